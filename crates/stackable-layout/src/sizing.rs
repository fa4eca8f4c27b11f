//! The stacking pass shared by layout and size queries.
//!
//! Children are measured against the inset width and placed one below the
//! other starting at the top inset. The running cursor always moves down;
//! the anchor only decides which child is visited first.

use stackable_core::{Anchor, EdgeInsets, Rect, Size};
use tracing::trace;

use crate::view::StackChild;

/// Measure `children` against `constrained` and compute each child's frame.
///
/// `place` is called once per child, in visiting order, with the frame the
/// child would receive. Returns the container size: the constrained width
/// and the stacked height including insets.
///
/// The bottom inset is only added when some child contributed height, so an
/// empty stack reports exactly `inset.top`.
pub(crate) fn stack_children<F>(
    children: &[StackChild],
    anchor: Anchor,
    inset: EdgeInsets,
    constrained: Size,
    mut place: F,
) -> Size
where
    F: FnMut(&StackChild, Rect),
{
    let x = inset.left;
    let mut y = inset.top;
    let child_constraint = Size::new(constrained.width - inset.horizontal(), constrained.height);

    let mut visit = |child: &StackChild| {
        let proposed = child.view().borrow().measure(child_constraint);
        let width = if child.is_full_width() {
            child_constraint.width
        } else {
            proposed.width
        };
        let frame = Rect::new(x, y, width, proposed.height);
        trace!(?frame, kind = ?child.kind(), "stacked child");

        y += frame.height();
        place(child, frame);
    };

    if anchor.is_reversed() {
        children.iter().rev().for_each(&mut visit);
    } else {
        children.iter().for_each(&mut visit);
    }

    if y - inset.top > 0.0 {
        y += inset.bottom;
    }

    Size::new(constrained.width, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{view_ref, ViewElement};

    struct Fixed(Size);

    impl ViewElement for Fixed {
        fn measure(&self, _constrained: Size) -> Size {
            self.0
        }

        fn frame(&self) -> Rect {
            Rect::ZERO
        }

        fn set_frame(&mut self, _frame: Rect) {}
    }

    fn child(width: f64, height: f64) -> StackChild {
        StackChild::new(view_ref(Fixed(Size::new(width, height))))
    }

    fn collect(children: &[StackChild], anchor: Anchor, inset: EdgeInsets, constrained: Size) -> (Size, Vec<Rect>) {
        let mut frames = Vec::new();
        let size = stack_children(children, anchor, inset, constrained, |_, frame| frames.push(frame));
        (size, frames)
    }

    #[test]
    fn test_single_child_with_insets() {
        let inset = EdgeInsets::new(10.0, 5.0, 10.0, 5.0);
        let (size, frames) = collect(&[child(100.0, 40.0)], Anchor::Top, inset, Size::new(200.0, 500.0));

        assert_eq!(frames, vec![Rect::new(5.0, 10.0, 100.0, 40.0)]);
        assert_eq!(size, Size::new(200.0, 60.0));
    }

    #[test]
    fn test_empty_stack_skips_bottom_inset() {
        let inset = EdgeInsets::new(10.0, 5.0, 10.0, 5.0);
        let (size, frames) = collect(&[], Anchor::Top, inset, Size::new(200.0, 500.0));

        assert!(frames.is_empty());
        assert_eq!(size, Size::new(200.0, 10.0));
    }

    #[test]
    fn test_zero_height_children_skip_bottom_inset() {
        let inset = EdgeInsets::new(4.0, 0.0, 6.0, 0.0);
        let (size, _) = collect(&[child(50.0, 0.0), child(20.0, 0.0)], Anchor::Top, inset, Size::new(100.0, 100.0));
        assert!((size.height - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_full_width_ignores_measured_width() {
        let inset = EdgeInsets::new(0.0, 10.0, 0.0, 10.0);
        let toolbar = StackChild::full_width(view_ref(Fixed(Size::new(50.0, 44.0))));
        let (_, frames) = collect(&[toolbar], Anchor::Top, inset, Size::new(300.0, 600.0));

        assert_eq!(frames, vec![Rect::new(10.0, 0.0, 280.0, 44.0)]);
    }

    #[test]
    fn test_bottom_anchor_visits_in_reverse() {
        let children = [child(10.0, 20.0), child(10.0, 30.0)];
        let (top_size, top) = collect(&children, Anchor::Top, EdgeInsets::ZERO, Size::new(100.0, 100.0));
        let (bottom_size, bottom) = collect(&children, Anchor::Bottom, EdgeInsets::ZERO, Size::new(100.0, 100.0));

        assert_eq!(top, vec![Rect::new(0.0, 0.0, 10.0, 20.0), Rect::new(0.0, 20.0, 10.0, 30.0)]);
        // Last child first, still stacked downward.
        assert_eq!(bottom, vec![Rect::new(0.0, 0.0, 10.0, 30.0), Rect::new(0.0, 30.0, 10.0, 20.0)]);
        assert_eq!(top_size, bottom_size);
    }

    #[test]
    fn test_negative_constraint_passes_through() {
        let inset = EdgeInsets::new(0.0, 20.0, 0.0, 20.0);
        let toolbar = StackChild::full_width(view_ref(Fixed(Size::new(50.0, 10.0))));
        let (size, frames) = collect(&[toolbar], Anchor::Top, inset, Size::new(30.0, -5.0));

        assert!((frames[0].width() - -10.0).abs() < 0.001);
        assert_eq!(size, Size::new(30.0, 10.0));
    }
}
