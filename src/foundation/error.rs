/// Convenience result type used across textcue.
pub type TextcueResult<T> = Result<T, TextcueError>;

/// Top-level error taxonomy used by the public APIs.
///
/// Recoverable layout problems (a leaf without a time window, an unavailable
/// glyph) are not errors; they are reported through [`crate::Diagnostics`].
#[derive(thiserror::Error, Debug)]
pub enum TextcueError {
    /// Invalid user-provided document or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed document structure; fatal to a generation pass.
    #[error("parse error: {0}")]
    Parse(String),

    /// A glyph source could not produce metrics for a character.
    #[error("glyph error: {0}")]
    Glyph(String),

    /// Errors when serializing placement output.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or stream errors.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextcueError {
    /// Build a [`TextcueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TextcueError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TextcueError::Glyph`] value.
    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }

    /// Build a [`TextcueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TextcueError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
