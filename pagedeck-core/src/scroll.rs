/// A scrollable content region whose bottom insets the container manages.
///
/// Pages opt into this capability at construction; the container adjusts
/// the insets so scrolled content is not obscured by the tab strip.
pub trait ScrollRegion {
    /// Sets the bottom content inset and the bottom scroll-indicator inset.
    fn set_bottom_insets(&self, content: f32, indicator: f32);
}
