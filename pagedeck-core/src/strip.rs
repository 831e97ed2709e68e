/// One selectable item in a tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Display label for the tab.
    pub label: String,
}

impl TabItem {
    /// Create a new tab item with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// The fixed-order tab selector bar.
///
/// The container keeps the item list mirroring its page list: wholesale
/// replacement on `set_pages`, incremental append/remove otherwise. Taps
/// flow the other way, from the strip implementation to the host, which
/// forwards them to the container's selection handler.
pub trait TabStrip {
    /// Replaces the item list wholesale.
    fn set_items(&mut self, items: Vec<TabItem>);

    /// Appends one item.
    fn push_item(&mut self, item: TabItem);

    /// Removes the item at `index`.
    fn remove_item(&mut self, index: usize);

    /// Moves the selection marker. `None` clears it.
    fn set_highlighted(&mut self, index: Option<usize>);
}
