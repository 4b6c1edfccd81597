use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    foundation::core::{Pair, Rgba8},
    foundation::error::{TextcueError, TextcueResult},
    glyph::source::{FontDescription, FontGlow, FontOutline, FontShadow, FontStyle},
    layout::walker::{DEFAULT_MAX_DEPTH, LayoutOptions},
    placement::record::Origin,
    placement::storyboard::OsbLayer,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Settings for a generation run that are not part of the document:
/// font, baked effects and output placement.
pub struct GeneratorConfig {
    /// Directory glyph sprites are referenced from.
    pub sprites_path: String,
    /// Layer name stamped on every placement.
    pub layer_name: String,
    /// Font family name.
    pub font: String,
    /// Optional font file used to measure glyphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_file: Option<PathBuf>,
    /// Font size in pixels.
    pub font_size: u32,
    /// Sprite scale applied on top of each node's `scale`.
    pub font_scale: f64,
    pub font_style: FontStyle,
    pub font_color: Rgba8,
    pub glow: FontGlow,
    /// Draw glow as a separate additive pass; the baked glow radius is then 0.
    pub additive_glow: bool,
    pub outline: FontOutline,
    pub shadow: FontShadow,
    pub origin: Origin,
    /// Storyboard layer receiving sprites in `.osb` output.
    pub osb_layer: OsbLayer,
    /// Maximum document nesting depth.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sprites_path: "sb/f".to_string(),
            layer_name: "Lyrics".to_string(),
            font: "Verdana".to_string(),
            font_file: None,
            font_size: 26,
            font_scale: 0.5,
            font_style: FontStyle::Regular,
            font_color: Rgba8::new(255, 255, 255, 200),
            glow: FontGlow::default(),
            additive_glow: true,
            outline: FontOutline::default(),
            shadow: FontShadow::default(),
            origin: Origin::Centre,
            osb_layer: OsbLayer::Foreground,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON config.
    pub fn from_slice(bytes: &[u8]) -> TextcueResult<Self> {
        let cfg: Self = serde_json::from_slice(bytes)
            .map_err(|e| TextcueError::parse(format!("generator config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> TextcueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| TextcueError::io(format!("open config '{}': {e}", path.display())))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| TextcueError::parse(format!("generator config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TextcueResult<()> {
        if self.font_size == 0 {
            return Err(TextcueError::validation("font_size must be > 0"));
        }
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(TextcueError::validation(
                "font_scale must be finite and > 0",
            ));
        }
        if self.max_depth == 0 {
            return Err(TextcueError::validation("max_depth must be > 0"));
        }
        if self.layer_name.trim().is_empty() {
            return Err(TextcueError::validation("layer_name must be non-empty"));
        }
        Ok(())
    }

    /// Font description for glyph lookups. Bitmap padding comes from the
    /// document's base `padding` (missing components are 0).
    pub fn font_description(&self, base_padding: Option<Pair>) -> FontDescription {
        let mut glow = self.glow;
        if self.additive_glow {
            glow.radius = 0;
        }
        FontDescription {
            family: self.font.clone(),
            size: self.font_size,
            style: self.font_style,
            color: self.font_color,
            padding: base_padding.unwrap_or_default().or_zero(),
            glow,
            outline: self.outline,
            shadow: self.shadow,
            sprites_path: self.sprites_path.clone(),
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            layer_name: self.layer_name.clone(),
            origin: self.origin,
            base_scale: self.font_scale,
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
