use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A recoverable problem found while laying out a document.
pub enum Diagnostic {
    /// A leaf has no start or end time on itself or any ancestor; nothing
    /// was emitted for it.
    MissingTimeWindow { text: String },
    /// Glyph lookup failed; the character was treated as an empty glyph.
    GlyphUnavailable { ch: char, reason: String },
    /// A subtree deeper than the configured limit was skipped.
    DepthLimitExceeded { depth: usize, limit: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTimeWindow { text } => {
                write!(f, "missing start or end time for text `{text}`")
            }
            Self::GlyphUnavailable { ch, reason } => {
                write!(f, "glyph for {ch:?} unavailable ({reason}); treated as empty")
            }
            Self::DepthLimitExceeded { depth, limit } => {
                write!(f, "node depth {depth} exceeds limit {limit}; subtree skipped")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
/// Ordered diagnostics of one layout pass.
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `d` and emit it as a warning event.
    pub fn push(&mut self, d: Diagnostic) {
        tracing::warn!(diagnostic = %d, "layout diagnostic");
        self.items.push(d);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_clean(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Texts of leaves that were skipped for lack of a time window.
    pub fn missing_time_windows(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|d| match d {
            Diagnostic::MissingTimeWindow { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.items {
            writeln!(f, "warning: {d}")?;
        }
        Ok(())
    }
}
