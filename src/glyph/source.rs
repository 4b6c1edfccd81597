use crate::{
    foundation::core::{Rgba8, Vec2},
    foundation::error::TextcueResult,
    foundation::math::Fnv1a64,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Opaque reference to a rendered glyph sprite (a path relative to the
/// project's asset root).
pub struct AssetHandle(pub String);

impl AssetHandle {
    /// Borrow the underlying path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Metadata of one rendered glyph.
pub struct Glyph {
    /// Sprite reference.
    pub asset: AssetHandle,
    /// Bitmap width in pixels, margins included.
    pub width: f64,
    /// Bitmap height in pixels, margins included.
    pub height: f64,
    /// Nothing visible would be drawn (whitespace, blank glyph).
    pub is_empty: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Font face style.
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Glow effect baked around each glyph.
pub struct FontGlow {
    /// Blur radius in pixels; `0` disables the baked glow.
    pub radius: u32,
    /// Glow color.
    pub color: Rgba8,
}

impl Default for FontGlow {
    fn default() -> Self {
        Self {
            radius: 0,
            color: Rgba8::new(255, 255, 255, 100),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Outline stroked around each glyph.
pub struct FontOutline {
    /// Stroke thickness in pixels.
    pub thickness: u32,
    /// Stroke color.
    pub color: Rgba8,
}

impl Default for FontOutline {
    fn default() -> Self {
        Self {
            thickness: 3,
            color: Rgba8::new(50, 50, 50, 200),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Drop shadow under each glyph.
pub struct FontShadow {
    /// Shadow offset in pixels.
    pub thickness: u32,
    /// Shadow color.
    pub color: Rgba8,
}

impl Default for FontShadow {
    fn default() -> Self {
        Self {
            thickness: 0,
            color: Rgba8::new(0, 0, 0, 100),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Everything a glyph source needs to produce glyph sprites.
pub struct FontDescription {
    /// Font family name or font file path.
    pub family: String,
    /// Font size in pixels.
    pub size: u32,
    /// Face style.
    pub style: FontStyle,
    /// Fill color.
    pub color: Rgba8,
    /// Transparent margin around each glyph bitmap.
    pub padding: Vec2,
    /// Baked glow.
    pub glow: FontGlow,
    /// Baked outline.
    pub outline: FontOutline,
    /// Baked shadow.
    pub shadow: FontShadow,
    /// Directory under which glyph sprites are written.
    pub sprites_path: String,
}

impl FontDescription {
    /// Sprite handle for `ch`: `{sprites_path}/_{codepoint:04x}.png`.
    pub fn asset_for(&self, ch: char) -> AssetHandle {
        let dir = self.sprites_path.trim_end_matches('/');
        AssetHandle(format!("{dir}/_{:04x}.png", u32::from(ch)))
    }

    /// Extra pixels added on each side of a glyph bitmap by padding and effects.
    pub fn bitmap_margin(&self) -> Vec2 {
        let effects =
            f64::from(self.glow.radius + self.outline.thickness + self.shadow.thickness);
        Vec2::new(self.padding.x + effects, self.padding.y + effects)
    }

    /// Stable hash of every field; used as a cache key.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_str(&self.family);
        h.write_u32(self.size);
        h.write_u8(self.style as u8);
        h.write_bytes(&self.color.to_array());
        h.write_f64(self.padding.x);
        h.write_f64(self.padding.y);
        h.write_u32(self.glow.radius);
        h.write_bytes(&self.glow.color.to_array());
        h.write_u32(self.outline.thickness);
        h.write_bytes(&self.outline.color.to_array());
        h.write_u32(self.shadow.thickness);
        h.write_bytes(&self.shadow.color.to_array());
        h.write_str(&self.sprites_path);
        h.finish()
    }
}

/// Produces glyph metadata for a character under a font description.
///
/// Implementations must be deterministic for a fixed `(ch, font)` pair within
/// one run; callers may ask for the same glyph many times.
pub trait GlyphSource {
    /// Look up the glyph for `ch`.
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph>;
}

impl<G: GlyphSource + ?Sized> GlyphSource for &mut G {
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph> {
        (**self).glyph(ch, font)
    }
}

impl<G: GlyphSource + ?Sized> GlyphSource for Box<G> {
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph> {
        (**self).glyph(ch, font)
    }
}

pub(crate) fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control()
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/source.rs"]
mod tests;
