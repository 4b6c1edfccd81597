use crate::{
    document::model::TextNode,
    foundation::core::{Axis, Pair, Rgba8, TimeMs, Vec2, deg_to_rad},
    foundation::error::{TextcueError, TextcueResult},
    glyph::source::{FontDescription, Glyph, GlyphSource},
    layout::diagnostics::{Diagnostic, Diagnostics},
    placement::record::{Fade, Origin, Placement, PlacementSink},
    style::config::StyleConfig,
};

/// Nesting depth past which subtrees are skipped.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Debug, PartialEq)]
/// Pass-through values stamped on every placement, plus the depth guard.
pub struct LayoutOptions {
    /// Layer name handed to the sink.
    pub layer_name: String,
    /// Sprite pivot handed to the sink.
    pub origin: Origin,
    /// Font scale multiplied with each node's `scale`.
    pub base_scale: f64,
    /// Maximum node depth below a top-level node.
    pub max_depth: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            layer_name: "Lyrics".to_string(),
            origin: Origin::Centre,
            base_scale: 1.0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of one layout pass.
pub struct LayoutReport {
    /// Placements handed to the sink.
    pub placements: usize,
    /// Nodes entered, counting each repeat of a subtree.
    pub nodes_visited: usize,
    pub diagnostics: Diagnostics,
}

/// Recursive cascading layout of a [`TextNode`] tree.
///
/// Each call merges the node's overrides over the inherited style, lays the
/// node out once per repeat offset and either recurses into children
/// (threading the returned cursor from sibling to sibling) or walks the
/// node's text, emitting one [`Placement`] per visible glyph.
pub struct LayoutWalker<'a, G, S> {
    glyphs: G,
    sink: S,
    font: &'a FontDescription,
    opts: &'a LayoutOptions,
    report: LayoutReport,
}

impl<'a, G: GlyphSource, S: PlacementSink> LayoutWalker<'a, G, S> {
    pub fn new(glyphs: G, sink: S, font: &'a FontDescription, opts: &'a LayoutOptions) -> Self {
        Self {
            glyphs,
            sink,
            font,
            opts,
            report: LayoutReport::default(),
        }
    }

    /// Lay out `node` under `inherited` style starting at `anchor`.
    ///
    /// Returns the position the next sibling should start from: the cursor
    /// after the last character for a leaf, or the configured anchor
    /// (`position`, else `anchor`) for a branch. With repeats, the value of
    /// the last repeat is returned.
    pub fn layout(
        &mut self,
        node: &TextNode,
        inherited: &StyleConfig,
        anchor: Vec2,
        start: Option<TimeMs>,
        end: Option<TimeMs>,
    ) -> TextcueResult<Vec2> {
        self.layout_at(node, inherited, anchor, start, end, 0)
    }

    /// Finish the pass and take the report.
    pub fn finish(self) -> LayoutReport {
        self.report
    }

    pub fn report(&self) -> &LayoutReport {
        &self.report
    }

    fn layout_at(
        &mut self,
        node: &TextNode,
        inherited: &StyleConfig,
        anchor: Vec2,
        start: Option<TimeMs>,
        end: Option<TimeMs>,
        depth: usize,
    ) -> TextcueResult<Vec2> {
        if depth > self.opts.max_depth {
            self.report.diagnostics.push(Diagnostic::DepthLimitExceeded {
                depth,
                limit: self.opts.max_depth,
            });
            return Ok(anchor);
        }

        let style = inherited.merge(&node.config);
        let start = node.start.or(start);
        let end = node.end.or(end);

        if node.is_branch() {
            let configured = pinned(style.position, anchor);
            for t in style.repeat_times() {
                self.report.nodes_visited += 1;
                let st = start.map(|s| shift(s, t)).transpose()?;
                let et = end.map(|e| shift(e, t)).transpose()?;
                let mut cursor = configured;
                for child in &node.children {
                    let child_anchor = pinned(child.config.position, cursor);
                    cursor = self.layout_at(child, &style, child_anchor, st, et, depth + 1)?;
                }
            }
            return Ok(configured);
        }

        let (Some(start), Some(end)) = (start, end) else {
            self.report.diagnostics.push(Diagnostic::MissingTimeWindow {
                text: node.text.clone(),
            });
            return Ok(anchor);
        };

        let mut cursor = anchor;
        for t in style.repeat_times() {
            self.report.nodes_visited += 1;
            let (st, et) = (shift(start, t)?, shift(end, t)?);
            cursor = self.lay_text(&node.text, &style, anchor, st, et)?;
        }
        Ok(cursor)
    }

    fn lay_text(
        &mut self,
        text: &str,
        style: &StyleConfig,
        anchor: Vec2,
        st: TimeMs,
        et: TimeMs,
    ) -> TextcueResult<Vec2> {
        let orientation = style.orientation_or_default();
        let (advance, line) = (orientation.advance_axis(), orientation.line_axis());
        let offset = style.position_offset.unwrap_or_default().or_zero();
        let line_start = pinned(style.position, anchor) + offset;
        let padding = style.padding.unwrap_or_default().or_zero();
        let line_step = style.padding_line.and_then(|p| p.get(line)).unwrap_or(0.0);
        let space_step = style
            .padding_space
            .and_then(|p| p.get(advance))
            .unwrap_or(0.0);
        let scale = self.opts.base_scale * style.scale_or_default();
        let rotation_rad = deg_to_rad(style.rotation.unwrap_or(0.0));
        let color = style.color.as_deref().map(Rgba8::parse_hex).transpose()?;
        let (fade_in, fade_out) = (style.fade_in.unwrap_or(0), style.fade_out.unwrap_or(0));
        if st.checked_sub(fade_in).is_none() || et.checked_add(fade_out).is_none() {
            return Err(TextcueError::validation(format!(
                "fade window around {st}..{et} is out of range"
            )));
        }
        let fade_in = Fade::fade_in(st, fade_in);
        let fade_out = Fade::fade_out(et, fade_out);

        let mut cursor = anchor + offset;
        for ch in text.chars() {
            match ch {
                '\n' => {
                    *advance.of_mut(&mut cursor) = advance.of(line_start);
                    *line.of_mut(&mut cursor) += line_step;
                }
                ' ' => *advance.of_mut(&mut cursor) += space_step,
                _ => {
                    if let Some(glyph) = self.visible_glyph(ch) {
                        self.sink.place(Placement {
                            layer: self.opts.layer_name.clone(),
                            asset: glyph.asset,
                            origin: self.opts.origin,
                            position: cursor.to_point(),
                            start: st,
                            end: et,
                            scale,
                            fade_in,
                            fade_out,
                            rotation_rad,
                            color,
                        })?;
                        self.report.placements += 1;

                        let extent = match advance {
                            Axis::X => glyph.width,
                            Axis::Y => glyph.height,
                        };
                        *advance.of_mut(&mut cursor) += extent * scale;
                    }
                }
            }
            cursor += padding;
        }
        Ok(cursor)
    }

    /// Glyph for `ch` if it would draw anything. Lookup failures are
    /// recorded and treated as empty glyphs.
    fn visible_glyph(&mut self, ch: char) -> Option<Glyph> {
        match self.glyphs.glyph(ch, self.font) {
            Ok(g) if g.is_empty => None,
            Ok(g) => Some(g),
            Err(e) => {
                self.report.diagnostics.push(Diagnostic::GlyphUnavailable {
                    ch,
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

/// `time + by`, or a validation error when it leaves the time range.
fn shift(time: TimeMs, by: TimeMs) -> TextcueResult<TimeMs> {
    time.checked_add(by).ok_or_else(|| {
        TextcueError::validation(format!("time {time} shifted by {by} is out of range"))
    })
}

/// `position` componentwise, falling back to `anchor`.
fn pinned(position: Option<Pair>, anchor: Vec2) -> Vec2 {
    position.map_or(anchor, |p| p.or(anchor))
}

/// Lay out every top-level child of `root`.
///
/// The root's own config is the base style. Every top-level child starts from
/// the root's `position` (or the origin); a child's own `position` only takes
/// effect inside it. Top-level siblings do not thread positions and have no
/// inherited time window.
#[tracing::instrument(skip_all, fields(children = root.children.len()))]
pub fn layout_document<G: GlyphSource, S: PlacementSink>(
    root: &TextNode,
    glyphs: G,
    sink: S,
    font: &FontDescription,
    opts: &LayoutOptions,
) -> TextcueResult<LayoutReport> {
    let base = StyleConfig::default().merge(&root.config);
    let origin = base.position.unwrap_or_default().or_zero();

    let mut walker = LayoutWalker::new(glyphs, sink, font, opts);
    for child in &root.children {
        walker.layout(child, &base, origin, None, None)?;
    }
    let report = walker.finish();
    tracing::debug!(
        placements = report.placements,
        nodes = report.nodes_visited,
        warnings = report.diagnostics.len(),
        "layout finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/walker.rs"]
mod tests;
