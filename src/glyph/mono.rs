use crate::{
    foundation::error::TextcueResult,
    glyph::source::{FontDescription, Glyph, GlyphSource, is_blank},
};

/// Advance of every glyph as a fraction of the font size.
const ADVANCE_EM: f64 = 0.6;
/// Glyph bitmap height as a fraction of the font size.
const LINE_EM: f64 = 1.2;

/// Fixed-pitch metrics computed from the font size alone.
///
/// Used when no font file is configured. Whitespace and control characters
/// are empty glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonoGlyphSource;

impl GlyphSource for MonoGlyphSource {
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph> {
        let size = f64::from(font.size);
        let margin = font.bitmap_margin();
        Ok(Glyph {
            asset: font.asset_for(ch),
            width: (size * ADVANCE_EM).round() + 2.0 * margin.x,
            height: (size * LINE_EM).round() + 2.0 * margin.y,
            is_empty: is_blank(ch),
        })
    }
}
