use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    foundation::core::{Rgba8, TimeMs},
    foundation::error::{TextcueError, TextcueResult},
    style::config::StyleConfig,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// One entry of a text document: either a leaf carrying literal text or a
/// branch grouping child nodes.
pub struct TextNode {
    /// Absolute start time; inherited from the nearest ancestor when absent.
    #[serde(default, rename = "st", skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeMs>,
    /// Absolute end time; inherited from the nearest ancestor when absent.
    #[serde(default, rename = "et", skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeMs>,
    /// Local style overrides.
    #[serde(default)]
    pub config: StyleConfig,
    /// Literal text. Empty for branch nodes.
    #[serde(default)]
    pub text: String,
    /// Child nodes of a branch.
    #[serde(default, rename = "texts", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// Leaf node with literal text.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Branch node with children.
    pub fn branch(children: Vec<TextNode>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// A node is a branch when its text is empty or when it has children.
    ///
    /// Nodes carrying both text and children are treated as branches and
    /// their text is never emitted.
    pub fn is_branch(&self) -> bool {
        self.text.is_empty() || !self.children.is_empty()
    }

    /// Set both times.
    pub fn timed(mut self, start: TimeMs, end: TimeMs) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Replace local style overrides.
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            count += 1;
            stack.extend(n.children.iter());
        }
        count
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A parsed text document. The root node's config is the base style of the
/// whole document; its children are laid out independently.
pub struct Document {
    /// Root node.
    pub root: TextNode,
}

impl Document {
    /// Wrap a root node without validating it.
    pub fn new(root: TextNode) -> Self {
        Self { root }
    }

    /// Parse and validate a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> TextcueResult<Self> {
        let doc: Self = serde_json::from_slice(bytes)
            .map_err(|e| TextcueError::parse(format!("document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document from a reader.
    pub fn from_reader(r: impl Read) -> TextcueResult<Self> {
        let doc: Self = serde_json::from_reader(r)
            .map_err(|e| TextcueError::parse(format!("document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document from YAML bytes.
    pub fn from_yaml_slice(bytes: &[u8]) -> TextcueResult<Self> {
        let doc: Self = serde_yaml::from_slice(bytes)
            .map_err(|e| TextcueError::parse(format!("document YAML: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a YAML document from a reader.
    pub fn from_yaml_reader(r: impl Read) -> TextcueResult<Self> {
        let doc: Self = serde_yaml::from_reader(r)
            .map_err(|e| TextcueError::parse(format!("document YAML: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document from a file.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> TextcueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TextcueError::io(format!("open document '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        if is_yaml_path(path) {
            Self::from_yaml_reader(r)
        } else {
            Self::from_reader(r)
        }
    }

    /// Base style of the document.
    pub fn base_config(&self) -> &StyleConfig {
        &self.root.config
    }

    /// Structural and value checks. Walks the tree with an explicit stack.
    pub fn validate(&self) -> TextcueResult<()> {
        if !self.root.is_branch() {
            return Err(TextcueError::validation(
                "document root must be a branch (empty text with child texts)",
            ));
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            validate_node(node)?;
            stack.extend(node.children.iter());
        }
        Ok(())
    }
}

fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

fn validate_node(node: &TextNode) -> TextcueResult<()> {
    let label = || {
        if node.text.is_empty() {
            "<branch>".to_string()
        } else {
            format!("'{}'", node.text)
        }
    };

    if let (Some(st), Some(et)) = (node.start, node.end) {
        if st > et {
            return Err(TextcueError::validation(format!(
                "node {} has st {st} after et {et}",
                label()
            )));
        }
    }

    let c = &node.config;
    for (name, v) in [("fadeIn", c.fade_in), ("fadeOut", c.fade_out)] {
        if v.is_some_and(|v| v < 0) {
            return Err(TextcueError::validation(format!(
                "node {} has negative {name}",
                label()
            )));
        }
    }
    if let Some(s) = c.scale {
        if !s.is_finite() || s <= 0.0 {
            return Err(TextcueError::validation(format!(
                "node {} scale must be finite and > 0",
                label()
            )));
        }
    }
    if c.rotation.is_some_and(|r| !r.is_finite()) {
        return Err(TextcueError::validation(format!(
            "node {} rotation must be finite",
            label()
        )));
    }
    if let Some(color) = &c.color {
        Rgba8::parse_hex(color)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
