use crate::foundation::error::{TextcueError, TextcueResult};

pub use kurbo::{Point, Vec2};

/// Absolute or relative time in storyboard time units (milliseconds).
pub type TimeMs = i64;

/// Two-component value whose components may each be missing.
///
/// Serialized as a two element array, e.g. `[12, null]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[Option<f64>; 2]", into = "[Option<f64>; 2]")]
pub struct Pair {
    /// Horizontal component.
    pub x: Option<f64>,
    /// Vertical component.
    pub y: Option<f64>,
}

impl Pair {
    /// Pair with both components set.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Fill missing components from `fallback`.
    pub fn or(self, fallback: Vec2) -> Vec2 {
        Vec2::new(self.x.unwrap_or(fallback.x), self.y.unwrap_or(fallback.y))
    }

    /// Fill missing components with zero.
    pub fn or_zero(self) -> Vec2 {
        self.or(Vec2::ZERO)
    }

    /// Component along `axis`, if present.
    pub fn get(self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl From<[Option<f64>; 2]> for Pair {
    fn from([x, y]: [Option<f64>; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Pair> for [Option<f64>; 2] {
    fn from(p: Pair) -> Self {
        [p.x, p.y]
    }
}

impl From<Vec2> for Pair {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// One of the two layout axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Read this axis' component of `v`.
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }

    /// Mutable access to this axis' component of `v`.
    pub fn of_mut(self, v: &mut Vec2) -> &mut f64 {
        match self {
            Self::X => &mut v.x,
            Self::Y => &mut v.y,
        }
    }
}

/// Text flow direction.
///
/// Serialized as the integers `0` (horizontal) and `1` (vertical).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Orientation {
    /// Characters advance along X, lines stack along Y.
    #[default]
    Horizontal,
    /// Characters advance along Y, lines stack along X.
    Vertical,
}

impl Orientation {
    /// Axis along which consecutive characters advance.
    pub fn advance_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
        }
    }

    /// Axis along which line breaks move the cursor.
    pub fn line_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::Y,
            Self::Vertical => Axis::X,
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = TextcueError;

    fn try_from(v: u8) -> TextcueResult<Self> {
        match v {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            other => Err(TextcueError::parse(format!(
                "orientation must be 0 (horizontal) or 1 (vertical), got {other}"
            ))),
        }
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color, serialized as `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(s: &str) -> TextcueResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(TextcueError::validation(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| TextcueError::validation(format!("color '{s}' is not valid hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub(crate) fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
