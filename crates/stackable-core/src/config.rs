//! Container configuration.

use crate::errors::StackError;
use crate::geometry::EdgeInsets;

/// Edge of the parent the stack is conceptually pinned to.
///
/// The anchor decides the order children are measured and placed in:
/// insertion order for [`Anchor::Top`], reverse insertion order for
/// [`Anchor::Bottom`]. Placing the container itself against the matching
/// edge is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
}

impl Anchor {
    /// Whether children are visited last-to-first.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Anchor::Bottom)
    }
}

/// Settings a container is built from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    pub anchor: Anchor,
    pub content_inset: EdgeInsets,
}

impl StackConfig {
    /// Top-anchored stack with no inset.
    pub fn top() -> Self {
        Self::default()
    }

    /// Bottom-anchored stack with no inset.
    pub fn bottom() -> Self {
        Self {
            anchor: Anchor::Bottom,
            ..Default::default()
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_content_inset(mut self, content_inset: EdgeInsets) -> Self {
        self.content_inset = content_inset;
        self
    }

    /// Check the inset invariants before the config is applied.
    pub fn validate(&self) -> Result<(), StackError> {
        self.content_inset.validate()
    }
}
