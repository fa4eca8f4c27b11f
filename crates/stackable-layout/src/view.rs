//! Child elements as seen by the container.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use stackable_core::{Rect, Size};

/// A visual element owned by the host and positioned by a container.
pub trait ViewElement {
    /// How large the element would like to be within `constrained`.
    ///
    /// Must not depend on the element's current frame and must return the
    /// same size for equal inputs.
    fn measure(&self, constrained: Size) -> Size;

    /// Current frame, relative to the containing view.
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    /// Called right after the container assigns a new frame.
    fn set_needs_layout(&mut self) {}
}

/// Shared handle to a view. Identity is the allocation, not the value.
pub type ViewRef = Rc<RefCell<dyn ViewElement>>;

/// Wrap a concrete view in a shared handle.
pub fn view_ref<V: ViewElement + 'static>(view: V) -> ViewRef {
    Rc::new(RefCell::new(view))
}

/// How a child's width is chosen during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildKind {
    /// Use the width the child measures at.
    #[default]
    Natural,
    /// Stretch to the container's available width (toolbars, navigation bars).
    FullWidth,
}

/// A view registered with a container, tagged with its sizing kind.
#[derive(Clone)]
pub struct StackChild {
    view: ViewRef,
    kind: ChildKind,
}

impl StackChild {
    pub fn new(view: ViewRef) -> Self {
        Self::with_kind(view, ChildKind::Natural)
    }

    pub fn full_width(view: ViewRef) -> Self {
        Self::with_kind(view, ChildKind::FullWidth)
    }

    pub fn with_kind(view: ViewRef, kind: ChildKind) -> Self {
        Self { view, kind }
    }

    pub fn view(&self) -> &ViewRef {
        &self.view
    }

    pub fn kind(&self) -> ChildKind {
        self.kind
    }

    pub fn is_full_width(&self) -> bool {
        self.kind == ChildKind::FullWidth
    }

    /// Whether this child wraps the same allocation as `view`.
    pub fn is_view(&self, view: &ViewRef) -> bool {
        Rc::ptr_eq(&self.view, view)
    }
}

impl From<ViewRef> for StackChild {
    fn from(view: ViewRef) -> Self {
        StackChild::new(view)
    }
}

impl fmt::Debug for StackChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("StackChild");
        s.field("kind", &self.kind);
        match self.view.try_borrow() {
            Ok(view) => s.field("frame", &view.frame()),
            Err(_) => s.field("frame", &"<borrowed>"),
        };
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label {
        frame: Rect,
    }

    impl ViewElement for Label {
        fn measure(&self, _constrained: Size) -> Size {
            Size::new(10.0, 10.0)
        }

        fn frame(&self) -> Rect {
            self.frame
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame = frame;
        }
    }

    #[test]
    fn test_identity_is_by_allocation() {
        let a = view_ref(Label { frame: Rect::ZERO });
        let b = view_ref(Label { frame: Rect::ZERO });
        let child = StackChild::new(a.clone());
        assert!(child.is_view(&a));
        assert!(!child.is_view(&b));
    }

    #[test]
    fn test_kind_tags() {
        let view = view_ref(Label { frame: Rect::ZERO });
        assert!(!StackChild::new(view.clone()).is_full_width());
        assert!(StackChild::full_width(view.clone()).is_full_width());
        assert_eq!(StackChild::from(view).kind(), ChildKind::Natural);
    }

    #[test]
    fn test_debug_shows_frame() {
        let view = view_ref(Label { frame: Rect::new(1.0, 2.0, 3.0, 4.0) });
        let out = format!("{:?}", StackChild::full_width(view));
        assert!(out.contains("FullWidth"));
        assert!(out.contains("frame"));
    }
}
