//! A minimal push/pop navigation stack for pages that host one.
//!
//! [NavStack] keeps a non-empty stack of titled entries and notifies its
//! observers exactly when the stack leaves its root entry and when it
//! returns to it. The root entry can never be popped.

use std::cell::RefCell;
use std::rc::Rc;

use pagedeck_core::scroll::ScrollRegion;
use pagedeck_core::stack::{NestedStack, StackEvent, StackObserver, StackSubscription};

/// One entry on a [NavStack].
pub struct StackEntry {
    title: String,
    scroll_region: Option<Rc<dyn ScrollRegion>>,
}

impl StackEntry {
    /// Create a plain entry.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scroll_region: None,
        }
    }

    /// Create an entry whose root content is a scrollable region.
    pub fn scrollable(title: impl Into<String>, region: Rc<dyn ScrollRegion>) -> Self {
        Self {
            title: title.into(),
            scroll_region: Some(region),
        }
    }

    /// The entry's title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

struct Observation {
    id: u64,
    observer: StackObserver,
}

struct NavStackInner {
    entries: Vec<StackEntry>,
    observations: Vec<Observation>,
    next_observation_id: u64,
}

/// A concrete [NestedStack] backed by an in-memory entry list.
pub struct NavStack {
    inner: Rc<RefCell<NavStackInner>>,
}

impl NavStack {
    /// Create a stack with the given root entry.
    pub fn new(root: StackEntry) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NavStackInner {
                entries: vec![root],
                observations: Vec::new(),
                next_observation_id: 1,
            })),
        }
    }

    /// The number of entries on the stack, root included.
    pub fn depth(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// The title of the topmost entry.
    pub fn top_title(&self) -> String {
        self.inner
            .borrow()
            .entries
            .last()
            .map(|entry| entry.title.clone())
            .unwrap_or_default()
    }

    /// Pushes an entry onto the stack.
    ///
    /// Observers are notified only when this push leaves the root.
    pub fn push(&self, entry: StackEntry) {
        let left_root = {
            let mut inner = self.inner.borrow_mut();
            let was_at_root = inner.entries.len() == 1;
            inner.entries.push(entry);
            was_at_root
        };

        if left_root {
            self.notify(StackEvent::PushedPastRoot);
        }
    }

    /// Pops the topmost entry.
    ///
    /// Returns `None` when the stack is at its root; the root entry is
    /// never popped. Observers are notified only when this pop returns to
    /// the root.
    pub fn pop(&self) -> Option<StackEntry> {
        let (entry, returned_to_root) = {
            let mut inner = self.inner.borrow_mut();
            if inner.entries.len() <= 1 {
                return None;
            }
            let entry = inner.entries.pop();
            (entry, inner.entries.len() == 1)
        };

        if returned_to_root {
            self.notify(StackEvent::PoppedToRoot);
        }
        entry
    }

    /// Pops every entry above the root.
    pub fn pop_to_root(&self) {
        let returned_to_root = {
            let mut inner = self.inner.borrow_mut();
            if inner.entries.len() <= 1 {
                return;
            }
            inner.entries.truncate(1);
            true
        };

        if returned_to_root {
            self.notify(StackEvent::PoppedToRoot);
        }
    }

    fn notify(&self, event: StackEvent) {
        // Observers may push or pop re-entrantly; snapshot the callbacks
        // before invoking them so the borrow is released first.
        let observers: Vec<StackObserver> = self
            .inner
            .borrow()
            .observations
            .iter()
            .map(|observation| observation.observer.clone())
            .collect();

        for observer in observers {
            observer(event);
        }
    }
}

impl NestedStack for NavStack {
    fn subscribe(&self, observer: StackObserver) -> StackSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_observation_id;
            inner.next_observation_id += 1;
            inner.observations.push(Observation { id, observer });
            id
        };

        let weak = Rc::downgrade(&self.inner);
        StackSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .observations
                    .retain(|observation| observation.id != id);
            }
        })
    }

    fn at_root(&self) -> bool {
        self.inner.borrow().entries.len() == 1
    }

    fn top_scroll_region(&self) -> Option<Rc<dyn ScrollRegion>> {
        self.inner
            .borrow()
            .entries
            .last()
            .and_then(|entry| entry.scroll_region.clone())
    }
}
