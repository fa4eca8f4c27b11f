//! Error types for the Stackable container.

use std::fmt;

use thiserror::Error;

/// Edge of an [`EdgeInsets`](crate::geometry::EdgeInsets) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsetEdge {
    Top,
    Left,
    Bottom,
    Right,
}

impl fmt::Display for InsetEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InsetEdge::Top => "top",
            InsetEdge::Left => "left",
            InsetEdge::Bottom => "bottom",
            InsetEdge::Right => "right",
        };
        f.write_str(name)
    }
}

/// Errors raised at the configuration and containment boundary.
///
/// The sizing algorithm itself is total; these only guard the inputs that
/// feed it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StackError {
    #[error("Content inset {edge} must be non-negative, got {value}")]
    NegativeInset { edge: InsetEdge, value: f64 },

    #[error("Content inset {edge} must be finite, got {value}")]
    NonFiniteInset { edge: InsetEdge, value: f64 },

    #[error("Child index {index} out of bounds for container with {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}
