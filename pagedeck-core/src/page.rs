//! The page model.
//!
//! A [Page] is an opaque, cheaply cloneable handle to one tab's content
//! unit. The container never interprets content; it tracks identity and
//! the capabilities a page opted into at construction.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::scroll::ScrollRegion;
use crate::stack::NestedStack;

static NEXT_PAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [Page].
///
/// Identity is only used for membership lookups and log messages; the
/// position of a page remains positional and is recomputed on every
/// structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(u64);

impl PageId {
    fn next() -> Self {
        Self(NEXT_PAGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The capability set a page opted into at construction.
#[derive(Clone)]
pub enum PageContent {
    /// Plain content; the container leaves it alone.
    Plain,
    /// The page's root content is a scrollable region whose bottom insets
    /// the container manages.
    Scrollable(Rc<dyn ScrollRegion>),
    /// The page hosts an internal navigation stack the container observes.
    NestedStackHost(Rc<dyn NestedStack>),
}

struct PageInner {
    id: PageId,
    title: String,
    content: PageContent,
}

/// Handle to one tab's content unit, displayed full-screen when current.
///
/// Cloning shares the underlying content unit; two clones compare equal.
#[derive(Clone)]
pub struct Page {
    inner: Rc<PageInner>,
}

impl Page {
    fn with_content(title: impl Into<String>, content: PageContent) -> Self {
        Self {
            inner: Rc::new(PageInner {
                id: PageId::next(),
                title: title.into(),
                content,
            }),
        }
    }

    /// Create a plain page.
    pub fn plain(title: impl Into<String>) -> Self {
        Self::with_content(title, PageContent::Plain)
    }

    /// Create a page whose root content is a scrollable region.
    pub fn scrollable(title: impl Into<String>, region: Rc<dyn ScrollRegion>) -> Self {
        Self::with_content(title, PageContent::Scrollable(region))
    }

    /// Create a page hosting a nested navigation stack.
    pub fn stack_host(title: impl Into<String>, stack: Rc<dyn NestedStack>) -> Self {
        Self::with_content(title, PageContent::NestedStackHost(stack))
    }

    /// The page's process-unique identity.
    pub fn id(&self) -> PageId {
        self.inner.id
    }

    /// The page's title, used for its tab strip item.
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// The scroll region capability, if the page opted into it.
    pub fn scroll_region(&self) -> Option<Rc<dyn ScrollRegion>> {
        match &self.inner.content {
            PageContent::Scrollable(region) => Some(region.clone()),
            _ => None,
        }
    }

    /// The nested stack capability, if the page opted into it.
    pub fn nested_stack(&self) -> Option<Rc<dyn NestedStack>> {
        match &self.inner.content {
            PageContent::NestedStackHost(stack) => Some(stack.clone()),
            _ => None,
        }
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Page {}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self.inner.content {
            PageContent::Plain => "Plain",
            PageContent::Scrollable(_) => "Scrollable",
            PageContent::NestedStackHost(_) => "NestedStackHost",
        };
        f.debug_struct("Page")
            .field("id", &self.inner.id)
            .field("title", &self.inner.title)
            .field("content", &variant)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeRegion {
        content: Cell<f32>,
    }

    impl ScrollRegion for FakeRegion {
        fn set_bottom_insets(&self, content: f32, _indicator: f32) {
            self.content.set(content);
        }
    }

    #[test]
    fn test_identity_is_unique_per_construction() {
        let a = Page::plain("A");
        let b = Page::plain("A");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_shares_identity() {
        let a = Page::plain("A");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_capability_accessors() {
        let region = Rc::new(FakeRegion {
            content: Cell::new(0.0),
        });
        let plain = Page::plain("plain");
        let scrollable = Page::scrollable("scrollable", region.clone());

        assert!(plain.scroll_region().is_none());
        assert!(plain.nested_stack().is_none());

        let attached = scrollable.scroll_region().unwrap();
        attached.set_bottom_insets(50.0, 50.0);
        assert_eq!(region.content.get(), 50.0);
    }
}
