//! Single-axis vertical stack layout.
//!
//! A [`StackContainer`] stacks its children top to bottom inside a content
//! inset. One sizing pass serves both the authoritative layout and the
//! read-only size query, so the two can never disagree.
//!
//! # Example
//!
//! ```ignore
//! use stackable_layout::{StackContainer, StackChild, Anchor};
//!
//! let mut bar = StackContainer::new(
//!     [StackChild::full_width(toolbar), StackChild::new(caption)],
//!     Anchor::Bottom,
//! );
//! let size = bar.size_that_fits(Size::new(320.0, 480.0));
//! bar.set_frame(Rect::new(0.0, 480.0 - size.height, size.width, size.height));
//! bar.layout_if_needed();
//! ```

mod container;
mod observer;
mod sizing;
mod view;

pub use container::StackContainer;
pub use observer::StackObserver;
pub use view::{view_ref, ChildKind, StackChild, ViewElement, ViewRef};

pub use stackable_core::{Anchor, EdgeInsets, Point, Rect, Size, StackConfig, StackError};
