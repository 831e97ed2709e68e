//! Nested navigation stack observation.
//!
//! A page may expose an internal push/pop navigation stack. The container
//! subscribes when the page is added and cancels the subscription when it
//! is removed; the stack reports only root-boundary crossings.

use std::rc::Rc;

use crate::scroll::ScrollRegion;

/// Notification emitted when a nested stack crosses its root boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEvent {
    /// The stack pushed its first entry beyond the root.
    PushedPastRoot,
    /// The stack popped back down to its root entry.
    PoppedToRoot,
}

/// Observer callback invoked with root-boundary crossing events.
pub type StackObserver = Rc<dyn Fn(StackEvent)>;

/// A push/pop navigation stack a page may expose.
pub trait NestedStack {
    /// Registers an observer for root-boundary crossings and returns the
    /// handle that cancels the registration.
    fn subscribe(&self, observer: StackObserver) -> StackSubscription;

    /// True while only the root entry is on the stack.
    fn at_root(&self) -> bool;

    /// Scroll region of the topmost entry, if it exposes one.
    fn top_scroll_region(&self) -> Option<Rc<dyn ScrollRegion>>;
}

/// Cancellation handle for a stack observation.
///
/// Cancelling is idempotent; dropping the handle cancels as well, so a
/// registration can never outlive the side that holds the handle.
pub struct StackSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl StackSubscription {
    /// Wraps the implementation-specific unsubscribe action.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the observation.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for StackSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cancel_runs_once() {
        let count = Rc::new(Cell::new(0));

        let counted = count.clone();
        let subscription = StackSubscription::new(move || counted.set(counted.get() + 1));
        subscription.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let count = Rc::new(Cell::new(0));

        let counted = count.clone();
        drop(StackSubscription::new(move || counted.set(counted.get() + 1)));
        assert_eq!(count.get(), 1);
    }
}
