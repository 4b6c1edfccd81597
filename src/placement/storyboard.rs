use std::{
    fmt::{self, Write as _},
    io::Write,
};

use crate::{
    foundation::error::{TextcueError, TextcueResult},
    placement::record::{Fade, Placement, PlacementSink},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// osu! storyboard layer that receives every sprite.
pub enum OsbLayer {
    Background,
    Fail,
    Pass,
    #[default]
    Foreground,
    Overlay,
}

impl OsbLayer {
    const ALL: [OsbLayer; 5] = [
        Self::Background,
        Self::Fail,
        Self::Pass,
        Self::Foreground,
        Self::Overlay,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Foreground => "Foreground",
            Self::Overlay => "Overlay",
        }
    }
}

/// Renders placements as an osu! storyboard `[Events]` section.
///
/// Each placement becomes one `Sprite` with fade, scale and (when set)
/// rotation and color commands. Sprites are grouped by placement layer name
/// in first-seen order; within a group, emission order is kept.
pub struct StoryboardSink {
    target: OsbLayer,
    groups: Vec<(String, String)>,
    sprites: usize,
}

impl StoryboardSink {
    pub fn new(target: OsbLayer) -> Self {
        Self {
            target,
            groups: Vec::new(),
            sprites: 0,
        }
    }

    /// Number of sprites written so far.
    pub fn sprite_count(&self) -> usize {
        self.sprites
    }

    /// Full script text.
    pub fn to_script(&self) -> String {
        self.to_string()
    }

    /// Write the script to `w`.
    pub fn write_to(&self, mut w: impl Write) -> TextcueResult<()> {
        write!(w, "{self}").map_err(|e| TextcueError::io(format!("write storyboard: {e}")))
    }

    fn group_mut(&mut self, layer: &str) -> &mut String {
        let idx = match self.groups.iter().position(|(n, _)| n == layer) {
            Some(idx) => idx,
            None => {
                self.groups.push((layer.to_string(), String::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }
}

impl fmt::Display for StoryboardSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Events]\n//Background and Video events\n")?;
        for (idx, layer) in OsbLayer::ALL.into_iter().enumerate() {
            writeln!(f, "//Storyboard Layer {idx} ({})", layer.as_str())?;
            if layer == self.target {
                for (name, body) in &self.groups {
                    writeln!(f, "//textcue layer: {name}")?;
                    f.write_str(body)?;
                }
            }
        }
        f.write_str("//Storyboard Sound Samples\n")
    }
}

impl PlacementSink for StoryboardSink {
    fn place(&mut self, p: Placement) -> TextcueResult<()> {
        let target = self.target;
        write_sprite(self.group_mut(&p.layer), target, &p)
            .map_err(|e| TextcueError::serde(format!("format sprite '{}': {e}", p.asset)))?;
        self.sprites += 1;
        Ok(())
    }
}

fn write_sprite(out: &mut String, target: OsbLayer, p: &Placement) -> fmt::Result {
    writeln!(
        out,
        "Sprite,{},{},\"{}\",{},{}",
        target.as_str(),
        p.origin.as_str(),
        p.asset,
        num(p.position.x),
        num(p.position.y)
    )?;
    write_fade(out, &p.fade_in)?;
    write_fade(out, &p.fade_out)?;
    writeln!(out, " S,0,{},,{}", p.start, num(p.scale))?;
    if p.rotation_rad != 0.0 {
        writeln!(out, " R,0,{},,{}", p.start, num(p.rotation_rad))?;
    }
    if let Some(c) = p.color {
        writeln!(out, " C,0,{},,{},{},{}", p.start, c.r, c.g, c.b)?;
    }
    Ok(())
}

fn write_fade(out: &mut String, f: &Fade) -> fmt::Result {
    write!(out, " F,0,{},", f.start)?;
    if f.end != f.start {
        write!(out, "{}", f.end)?;
    }
    writeln!(out, ",{},{}", num(f.from), num(f.to))
}

/// Shortest decimal form with at most four fractional digits.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/storyboard.rs"]
mod tests;
