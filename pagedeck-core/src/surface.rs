use crate::page::Page;

/// Transition direction for a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    /// Slide in from the trailing edge (index increasing).
    Forward,
    /// Slide in from the leading edge (index decreasing).
    Reverse,
}

/// The swipeable single-child display widget.
///
/// The surface displays exactly one page at a time and builds its swipe
/// gesture state from the container's neighbor queries. When a swipe
/// settles, the host forwards the completion to the container so the
/// strip highlight can catch up.
pub trait PagingSurface {
    /// Requests an immediate or animated switch to `page`.
    fn set_displayed(&mut self, page: &Page, direction: TransitionDirection, animated: bool);

    /// The page currently displayed, if any.
    fn displayed(&self) -> Option<Page>;
}
