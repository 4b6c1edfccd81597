use crate::{
    document::model::Document,
    foundation::error::{TextcueError, TextcueResult},
    glyph::cache::CachedGlyphSource,
    glyph::font::FontGlyphSource,
    glyph::mono::MonoGlyphSource,
    glyph::source::GlyphSource,
    layout::walker::{LayoutReport, layout_document},
    pipeline::config::GeneratorConfig,
    placement::record::{Placement, PlacementSink},
    placement::storyboard::StoryboardSink,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
/// Serialized form of generated placements.
pub enum OutputFormat {
    /// osu! storyboard script.
    #[default]
    Osb,
    /// Pretty JSON array of placements.
    Json,
}

#[derive(Clone, Debug)]
/// Serialized output plus the layout report that produced it.
pub struct Rendered {
    pub text: String,
    pub report: LayoutReport,
}

/// Runs documents through layout with one configuration.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> TextcueResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Glyph source selected by the config: a measured font file when
    /// `font_file` is set, fixed-pitch metrics otherwise; cached either way.
    pub fn glyph_source(&self) -> TextcueResult<Box<dyn GlyphSource>> {
        Ok(match &self.config.font_file {
            Some(path) => Box::new(CachedGlyphSource::new(FontGlyphSource::from_path(path)?)),
            None => Box::new(CachedGlyphSource::new(MonoGlyphSource)),
        })
    }

    /// Lay out every top-level node of `doc`, sending placements to `sink`.
    #[tracing::instrument(skip_all)]
    pub fn generate<G: GlyphSource, S: PlacementSink>(
        &self,
        doc: &Document,
        glyphs: G,
        sink: S,
    ) -> TextcueResult<LayoutReport> {
        let font = self.config.font_description(doc.base_config().padding);
        let opts = self.config.layout_options();
        layout_document(&doc.root, glyphs, sink, &font, &opts)
    }

    /// Generate with the configured glyph source and serialize the result.
    #[tracing::instrument(skip(self, doc))]
    pub fn render(&self, doc: &Document, format: OutputFormat) -> TextcueResult<Rendered> {
        let glyphs = self.glyph_source()?;
        match format {
            OutputFormat::Osb => {
                let mut sink = StoryboardSink::new(self.config.osb_layer);
                let report = self.generate(doc, glyphs, &mut sink)?;
                Ok(Rendered {
                    text: sink.to_script(),
                    report,
                })
            }
            OutputFormat::Json => {
                let mut placements: Vec<Placement> = Vec::new();
                let report = self.generate(doc, glyphs, &mut placements)?;
                let text = serde_json::to_string_pretty(&placements)
                    .map_err(|e| TextcueError::serde(format!("placements JSON: {e}")))?;
                Ok(Rendered { text, report })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
