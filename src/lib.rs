//! textcue resolves hierarchical, time-scoped text documents into positioned,
//! faded glyph placements for storyboard-style renderers.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON bytes -> [`Document`] (a tree of [`TextNode`]s with partial
//!    [`StyleConfig`] overrides)
//! 2. **Lay out**: [`LayoutWalker`] merges each node's overrides over its
//!    ancestors' ([`StyleConfig::merge`]), expands repeat offsets and walks the
//!    text with a 2D cursor, asking a [`GlyphSource`] for glyph sizes
//! 3. **Emit**: every visible glyph becomes a [`Placement`] handed to a
//!    [`PlacementSink`] (a `Vec`, or [`StoryboardSink`] for `.osb` scripts)
//!
//! Recoverable problems (leaves with no time window, unavailable glyphs,
//! over-deep subtrees) are returned as [`Diagnostics`] and never abort a pass.
#![forbid(unsafe_code)]

mod document;
mod foundation;
mod glyph;
mod layout;
mod pipeline;
mod placement;
mod style;

pub use document::dsl::TextNodeBuilder;
pub use document::model::{Document, TextNode};
pub use foundation::core::{Axis, Orientation, Pair, Point, Rgba8, TimeMs, Vec2};
pub use foundation::error::{TextcueError, TextcueResult};
pub use glyph::cache::CachedGlyphSource;
pub use glyph::font::FontGlyphSource;
pub use glyph::mono::MonoGlyphSource;
pub use glyph::source::{
    AssetHandle, FontDescription, FontGlow, FontOutline, FontShadow, FontStyle, Glyph,
    GlyphSource,
};
pub use layout::diagnostics::{Diagnostic, Diagnostics};
pub use layout::walker::{
    DEFAULT_MAX_DEPTH, LayoutOptions, LayoutReport, LayoutWalker, layout_document,
};
pub use pipeline::config::GeneratorConfig;
pub use pipeline::generate::{Generator, OutputFormat, Rendered};
pub use placement::record::{Fade, Origin, Placement, PlacementSink};
pub use placement::storyboard::{OsbLayer, StoryboardSink};
pub use style::config::StyleConfig;
