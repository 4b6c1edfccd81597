use crate::{
    foundation::core::{Point, Rgba8, TimeMs},
    foundation::error::TextcueResult,
    glyph::source::AssetHandle,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Sprite pivot, named as osu! storyboards name them.
pub enum Origin {
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    #[default]
    Centre,
    CentreRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

impl Origin {
    /// Storyboard script spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "TopLeft",
            Self::TopCentre => "TopCentre",
            Self::TopRight => "TopRight",
            Self::CentreLeft => "CentreLeft",
            Self::Centre => "Centre",
            Self::CentreRight => "CentreRight",
            Self::BottomLeft => "BottomLeft",
            Self::BottomCentre => "BottomCentre",
            Self::BottomRight => "BottomRight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Linear opacity ramp from `from` at `start` to `to` at `end`.
pub struct Fade {
    pub start: TimeMs,
    pub end: TimeMs,
    pub from: f64,
    pub to: f64,
}

impl Fade {
    /// Opacity 0 to 1 over `[at - duration, at]`, clamped to the time range.
    pub fn fade_in(at: TimeMs, duration: TimeMs) -> Self {
        Self {
            start: at.saturating_sub(duration),
            end: at,
            from: 0.0,
            to: 1.0,
        }
    }

    /// Opacity 1 to 0 over `[at, at + duration]`, clamped to the time range.
    pub fn fade_out(at: TimeMs, duration: TimeMs) -> Self {
        Self {
            start: at,
            end: at.saturating_add(duration),
            from: 1.0,
            to: 0.0,
        }
    }

    /// Opacity at time `t`, holding the end values outside the ramp.
    pub fn opacity_at(&self, t: TimeMs) -> f64 {
        if t >= self.end {
            return self.to;
        }
        if t <= self.start {
            return self.from;
        }
        let p = t.abs_diff(self.start) as f64 / self.end.abs_diff(self.start) as f64;
        self.from + (self.to - self.from) * p
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One emitted glyph: where it is, how big, and when it is visible.
pub struct Placement {
    /// Output layer name.
    pub layer: String,
    /// Glyph sprite.
    pub asset: AssetHandle,
    /// Sprite pivot.
    pub origin: Origin,
    /// Pivot position.
    pub position: Point,
    /// Fully visible from.
    pub start: TimeMs,
    /// Fully visible until.
    pub end: TimeMs,
    /// Uniform sprite scale applied at `start`.
    pub scale: f64,
    pub fade_in: Fade,
    pub fade_out: Fade,
    /// Static rotation applied at `start`.
    pub rotation_rad: f64,
    /// Tint, when the node configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

impl Placement {
    /// Opacity at time `t` combining both ramps.
    pub fn opacity_at(&self, t: TimeMs) -> f64 {
        if t < self.end {
            self.fade_in.opacity_at(t)
        } else {
            self.fade_out.opacity_at(t)
        }
    }
}

/// Receives placements in document traversal order.
pub trait PlacementSink {
    fn place(&mut self, placement: Placement) -> TextcueResult<()>;
}

impl PlacementSink for Vec<Placement> {
    fn place(&mut self, placement: Placement) -> TextcueResult<()> {
        self.push(placement);
        Ok(())
    }
}

impl<S: PlacementSink + ?Sized> PlacementSink for &mut S {
    fn place(&mut self, placement: Placement) -> TextcueResult<()> {
        (**self).place(placement)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/record.rs"]
mod tests;
