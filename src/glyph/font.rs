use std::{borrow::Cow, path::Path};

use crate::{
    foundation::error::{TextcueError, TextcueResult},
    glyph::source::{FontDescription, Glyph, GlyphSource, is_blank},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

/// Measures glyphs from a font file with Parley.
///
/// Width is the shaped advance of the single character, height is the line
/// height (ascent + descent + leading); both are extended by the description's
/// bitmap margin. Characters with no advance are reported as empty.
pub struct FontGlyphSource {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    family_name: String,
}

impl FontGlyphSource {
    /// Register `font_bytes` and use its first family for every lookup.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> TextcueResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TextcueError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TextcueError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Read a TTF/OTF file and register it.
    pub fn from_path(path: impl AsRef<Path>) -> TextcueResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| TextcueError::io(format!("read font '{}': {e}", path.display())))?;
        Self::from_font_bytes(bytes)
    }

    /// Family name resolved from the font data.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn measure(&mut self, ch: char, size_px: f32) -> (f64, f64) {
        let mut buf = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buf);

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(None);

        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        (w, h)
    }
}

impl GlyphSource for FontGlyphSource {
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph> {
        if font.size == 0 {
            return Err(TextcueError::glyph("font size must be > 0"));
        }
        let (advance, line_height) = self.measure(ch, font.size as f32);
        let margin = font.bitmap_margin();
        Ok(Glyph {
            asset: font.asset_for(ch),
            width: advance.ceil() + 2.0 * margin.x,
            height: line_height.ceil() + 2.0 * margin.y,
            is_empty: is_blank(ch) || advance <= 0.0,
        })
    }
}
