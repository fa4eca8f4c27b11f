//! The stack container.

use std::rc::{Rc, Weak};

use stackable_core::{Anchor, EdgeInsets, Point, Rect, Size, StackConfig, StackError};
use tracing::{debug, trace, warn};

use crate::observer::StackObserver;
use crate::sizing::stack_children;
use crate::view::{StackChild, ViewElement, ViewRef};

/// Stacks its children vertically inside a content inset.
///
/// Children are shared with the host: the container positions them but does
/// not own their lifecycle. Each view appears at most once; adding a view
/// that is already present moves it.
#[derive(Debug)]
pub struct StackContainer {
    children: Vec<StackChild>,
    anchor: Anchor,
    content_inset: EdgeInsets,
    frame: Rect,
    needs_layout: bool,
    observer: Option<Weak<dyn StackObserver>>,
}

impl StackContainer {
    /// Create a container with a zero frame and no inset.
    ///
    /// The initial children go through [`add_child`](Self::add_child), but
    /// no observer can be attached yet, so these additions are not reported.
    pub fn new<I>(children: I, anchor: Anchor) -> Self
    where
        I: IntoIterator<Item = StackChild>,
    {
        let mut container = Self {
            children: Vec::new(),
            anchor,
            content_inset: EdgeInsets::ZERO,
            frame: Rect::ZERO,
            needs_layout: true,
            observer: None,
        };
        for child in children {
            container.add_child(child);
        }
        container
    }

    /// Create a container from a validated config.
    pub fn with_config<I>(children: I, config: StackConfig) -> Result<Self, StackError>
    where
        I: IntoIterator<Item = StackChild>,
    {
        config.validate()?;
        let mut container = Self::new(children, config.anchor);
        container.content_inset = config.content_inset;
        Ok(container)
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    /// Replace the content inset. Negative or non-finite edges are rejected
    /// and leave the current inset in place.
    pub fn set_content_inset(&mut self, inset: EdgeInsets) -> Result<(), StackError> {
        if let Err(err) = inset.validate() {
            warn!(%err, "rejected content inset");
            return Err(err);
        }
        if inset != self.content_inset {
            self.content_inset = inset;
            self.needs_layout = true;
        }
        Ok(())
    }

    /// Attach an observer. Only a weak handle is kept.
    pub fn set_observer(&mut self, observer: Weak<dyn StackObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // Frame

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the container. A size change invalidates the layout.
    pub fn set_frame(&mut self, frame: Rect) {
        if frame.size != self.frame.size {
            self.needs_layout = true;
        }
        self.frame = frame;
    }

    /// The frame's size at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame.size)
    }

    /// Resize the frame to what [`size_that_fits`](Self::size_that_fits)
    /// reports for the current size. The origin is kept.
    pub fn size_to_fit(&mut self) {
        let size = self.size_that_fits(self.frame.size);
        self.set_frame(Rect::from_origin_size(self.frame.origin, size));
    }

    // Layout

    /// Measure and position every child within the current bounds.
    ///
    /// Each child receives its frame followed by a `set_needs_layout` call.
    pub fn layout(&mut self) {
        let size = stack_children(
            &self.children,
            self.anchor,
            self.content_inset,
            self.frame.size,
            |child, frame| {
                let mut view = child.view().borrow_mut();
                view.set_frame(frame);
                view.set_needs_layout();
            },
        );
        self.needs_layout = false;
        debug!(
            children = self.children.len(),
            anchor = ?self.anchor,
            width = size.width,
            height = size.height,
            "stack layout pass"
        );
    }

    /// The size this container would take within `constrained`.
    ///
    /// Width always echoes the constraint; height is the stacked content plus
    /// insets. Nothing is mutated.
    pub fn size_that_fits(&self, constrained: Size) -> Size {
        stack_children(
            &self.children,
            self.anchor,
            self.content_inset,
            constrained,
            |_, _| {},
        )
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Run [`layout`](Self::layout) if anything invalidated it. Returns
    /// whether a pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if !self.needs_layout {
            return false;
        }
        self.layout();
        true
    }

    // Containment

    pub fn children(&self) -> &[StackChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, view: &ViewRef) -> bool {
        self.position_of(view).is_some()
    }

    /// Index of `view` in stacking order.
    pub fn position_of(&self, view: &ViewRef) -> Option<usize> {
        self.children.iter().position(|c| c.is_view(view))
    }

    /// Append a child to the end of the stacking order.
    pub fn add_child(&mut self, child: StackChild) {
        self.detach_existing(child.view());
        self.children.push(child);
        self.needs_layout = true;
        self.notify_added(self.children.len() - 1);
    }

    /// Insert a child at `index` in stacking order.
    ///
    /// If the view is already present it is moved; `index` is then relative
    /// to the list without it. Fails without side effects when `index` is
    /// past the end.
    pub fn insert_child(&mut self, index: usize, child: StackChild) -> Result<(), StackError> {
        let len = self.children.len() - usize::from(self.contains(child.view()));
        if index > len {
            return Err(StackError::IndexOutOfBounds { index, len });
        }
        self.detach_existing(child.view());
        self.children.insert(index, child);
        self.needs_layout = true;
        self.notify_added(index);
        Ok(())
    }

    /// Remove `view` if present.
    pub fn remove_child(&mut self, view: &ViewRef) -> Option<StackChild> {
        let index = self.position_of(view)?;
        self.remove_child_at(index).ok()
    }

    /// Remove the child at `index`. The observer sees it before removal.
    pub fn remove_child_at(&mut self, index: usize) -> Result<StackChild, StackError> {
        if index >= self.children.len() {
            return Err(StackError::IndexOutOfBounds { index, len: self.children.len() });
        }
        self.notify_will_remove(index);
        self.needs_layout = true;
        Ok(self.children.remove(index))
    }

    /// Remove every child, last first. Returns them in stacking order.
    pub fn remove_all_children(&mut self) -> Vec<StackChild> {
        let mut removed = Vec::with_capacity(self.children.len());
        while let Some(last) = self.children.len().checked_sub(1) {
            self.notify_will_remove(last);
            if let Some(child) = self.children.pop() {
                removed.push(child);
            }
        }
        removed.reverse();
        self.needs_layout = true;
        removed
    }

    fn detach_existing(&mut self, view: &ViewRef) {
        if let Some(index) = self.position_of(view) {
            trace!(index, "moving child already in stack");
            self.notify_will_remove(index);
            self.children.remove(index);
        }
    }

    fn live_observer(&self) -> Option<Rc<dyn StackObserver>> {
        let observer = self.observer.as_ref()?.upgrade();
        if observer.is_none() {
            trace!("observer dropped, skipping notification");
        }
        observer
    }

    fn notify_added(&self, index: usize) {
        if let Some(observer) = self.live_observer() {
            observer.on_child_added(self, &self.children[index]);
        }
    }

    fn notify_will_remove(&self, index: usize) {
        if let Some(observer) = self.live_observer() {
            observer.on_child_will_remove(self, &self.children[index]);
        }
    }
}

/// Containers nest: a container measures as its stacked size.
impl ViewElement for StackContainer {
    fn measure(&self, constrained: Size) -> Size {
        self.size_that_fits(constrained)
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        StackContainer::set_frame(self, frame);
    }

    fn set_needs_layout(&mut self) {
        StackContainer::set_needs_layout(self);
    }
}

/// There is no meaningful anchor or child list to rebuild a container from,
/// so deserializing one is a programming error.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StackContainer {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        panic!("StackContainer cannot be deserialized; build it with StackContainer::new")
    }
}
