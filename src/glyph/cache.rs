use std::collections::HashMap;

use crate::{
    foundation::error::TextcueResult,
    glyph::source::{FontDescription, Glyph, GlyphSource},
};

/// Memoizes lookups of an inner [`GlyphSource`] by `(char, font fingerprint)`.
///
/// Failed lookups are not cached.
pub struct CachedGlyphSource<G> {
    inner: G,
    cache: HashMap<(char, u64), Glyph>,
    hits: u64,
    misses: u64,
}

impl<G: GlyphSource> CachedGlyphSource<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups forwarded to the inner source.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Distinct glyphs held.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: GlyphSource> GlyphSource for CachedGlyphSource<G> {
    fn glyph(&mut self, ch: char, font: &FontDescription) -> TextcueResult<Glyph> {
        let key = (ch, font.fingerprint());
        if let Some(g) = self.cache.get(&key) {
            self.hits += 1;
            tracing::trace!(?ch, "glyph cache hit");
            return Ok(g.clone());
        }
        let g = self.inner.glyph(ch, font)?;
        self.misses += 1;
        tracing::trace!(?ch, "glyph cache miss");
        self.cache.insert(key, g.clone());
        Ok(g)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/cache.rs"]
mod tests;
