//! Containment notifications.

use crate::container::StackContainer;
use crate::view::StackChild;

/// Receives child-list changes from a [`StackContainer`].
///
/// Both hooks default to no-ops; implement only the ones you need. The
/// container holds its observer weakly, so the observer must be kept alive
/// by its owner for as long as notifications are wanted.
pub trait StackObserver {
    /// A child has been added and is now at its final position.
    fn on_child_added(&self, _container: &StackContainer, _child: &StackChild) {}

    /// A child is about to be removed. It is still present in `container`.
    fn on_child_will_remove(&self, _container: &StackContainer, _child: &StackChild) {}
}
