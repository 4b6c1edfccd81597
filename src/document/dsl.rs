use crate::{
    document::model::{Document, TextNode},
    foundation::core::{Orientation, Pair, TimeMs},
    foundation::error::TextcueResult,
    style::config::StyleConfig,
};

/// Fluent construction of [`TextNode`] trees.
pub struct TextNodeBuilder {
    node: TextNode,
}

impl TextNodeBuilder {
    /// Start a leaf with literal text.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            node: TextNode::leaf(text),
        }
    }

    /// Start an empty branch.
    pub fn branch() -> Self {
        Self {
            node: TextNode::default(),
        }
    }

    pub fn start(mut self, st: TimeMs) -> Self {
        self.node.start = Some(st);
        self
    }

    pub fn end(mut self, et: TimeMs) -> Self {
        self.node.end = Some(et);
        self
    }

    pub fn times(self, st: TimeMs, et: TimeMs) -> Self {
        self.start(st).end(et)
    }

    /// Merge `overrides` over the style set so far.
    pub fn style(mut self, overrides: StyleConfig) -> Self {
        self.node.config = self.node.config.merge(&overrides);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.node.config.position = Some(Pair::new(x, y));
        self
    }

    pub fn position_offset(mut self, x: f64, y: f64) -> Self {
        self.node.config.position_offset = Some(Pair::new(x, y));
        self
    }

    pub fn padding(mut self, x: f64, y: f64) -> Self {
        self.node.config.padding = Some(Pair::new(x, y));
        self
    }

    pub fn padding_line(mut self, x: f64, y: f64) -> Self {
        self.node.config.padding_line = Some(Pair::new(x, y));
        self
    }

    pub fn padding_space(mut self, x: f64, y: f64) -> Self {
        self.node.config.padding_space = Some(Pair::new(x, y));
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.node.config.orientation = Some(o);
        self
    }

    pub fn fades(mut self, fade_in: TimeMs, fade_out: TimeMs) -> Self {
        self.node.config.fade_in = Some(fade_in);
        self.node.config.fade_out = Some(fade_out);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.node.config.rotation = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.node.config.scale = Some(scale);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.node.config.color = Some(color.into());
        self
    }

    pub fn repeat(mut self, offsets: impl IntoIterator<Item = TimeMs>) -> Self {
        self.node.config.repeat_offset = Some(offsets.into_iter().collect());
        self
    }

    /// Append a child. The node becomes a branch.
    pub fn child(mut self, child: TextNode) -> Self {
        self.node.children.push(child);
        self
    }

    pub fn build(self) -> TextNode {
        self.node
    }

    /// Finish as a document root and validate it.
    pub fn build_document(self) -> TextcueResult<Document> {
        let doc = Document::new(self.node);
        doc.validate()?;
        Ok(doc)
    }
}
