use std::time::Duration;

/// Construction-time configuration for a tab container.
///
/// Captured once when the container is created and immutable for its
/// lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// The gap between pages while swiping, in points.
    pub page_spacing: f32,
    /// The tab strip height when the vertical size class is regular.
    pub regular_strip_height: f32,
    /// The tab strip height when the vertical size class is compact.
    pub compact_strip_height: f32,
    /// The duration used when sliding the tab strip on and off screen.
    pub animation_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_spacing: 10.0,
            regular_strip_height: 50.0,
            compact_strip_height: 34.0,
            animation_duration: Duration::from_millis(200),
        }
    }
}
