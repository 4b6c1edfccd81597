use crate::foundation::core::{Orientation, Pair, TimeMs};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partial style record attached to a document node.
///
/// Every field is optional. A node's effective style is its own record merged
/// over the effective style of its parent, see [`StyleConfig::merge`].
pub struct StyleConfig {
    /// Pass-through color for emitted glyphs (`#RRGGBB[AA]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Advance applied after every character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Pair>,
    /// Advance applied on a line break.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_line: Option<Pair>,
    /// Advance applied for a space character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_space: Option<Pair>,
    /// Anchor for a subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Pair>,
    /// Added to the active anchor before laying out a leaf's text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_offset: Option<Pair>,
    /// Text flow direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Width of the opacity ramp ending at the start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<TimeMs>,
    /// Width of the opacity ramp starting at the end time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<TimeMs>,
    /// Static rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Multiplier on glyph size and the base font scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Extra time offsets at which the subtree is laid out again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_offset: Option<Vec<TimeMs>>,
}

impl StyleConfig {
    /// Field-wise override: each field takes `child`'s value when present,
    /// otherwise `self`'s.
    ///
    /// Pairs are overridden as a whole; a child `position` of `[5, null]`
    /// replaces the parent's `position` entirely.
    #[must_use]
    pub fn merge(&self, child: &StyleConfig) -> StyleConfig {
        fn pick<T: Clone>(parent: &Option<T>, child: &Option<T>) -> Option<T> {
            child.as_ref().or(parent.as_ref()).cloned()
        }

        StyleConfig {
            color: pick(&self.color, &child.color),
            padding: pick(&self.padding, &child.padding),
            padding_line: pick(&self.padding_line, &child.padding_line),
            padding_space: pick(&self.padding_space, &child.padding_space),
            position: pick(&self.position, &child.position),
            position_offset: pick(&self.position_offset, &child.position_offset),
            orientation: pick(&self.orientation, &child.orientation),
            fade_in: pick(&self.fade_in, &child.fade_in),
            fade_out: pick(&self.fade_out, &child.fade_out),
            rotation: pick(&self.rotation, &child.rotation),
            scale: pick(&self.scale, &child.scale),
            repeat_offset: pick(&self.repeat_offset, &child.repeat_offset),
        }
    }

    /// Resolve an ancestor chain (outermost first) into one effective record.
    pub fn resolve<'a>(chain: impl IntoIterator<Item = &'a StyleConfig>) -> StyleConfig {
        chain
            .into_iter()
            .fold(StyleConfig::default(), |acc, c| acc.merge(c))
    }

    /// Time offsets of every layout pass: `0` followed by `repeat_offset`.
    pub fn repeat_times(&self) -> Vec<TimeMs> {
        std::iter::once(0)
            .chain(self.repeat_offset.iter().flatten().copied())
            .collect()
    }

    /// Flow direction, horizontal when unset.
    pub fn orientation_or_default(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }

    /// Scale multiplier, `1.0` when unset.
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
