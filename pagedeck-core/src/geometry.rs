//! Strip geometry derived from the host environment.
//!
//! Geometry is never stored as independently mutated fields; every call
//! site that needs it recomputes the full value through [compute_layout]
//! and applies the result once.

use crate::config::Config;

/// Vertical size class of the hosting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Vertically constrained, e.g. a phone in landscape.
    Compact,
    /// The common portrait-style environment.
    Regular,
}

/// Resolved strip geometry for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    /// Total strip height, including the bottom safe-area inset.
    pub strip_height: f32,
    /// Resting vertical offset of the strip: the configured strip height
    /// when swipe navigation is suppressed, `0` otherwise.
    pub strip_offset: f32,
    /// Bottom inset applied to scrollable page content. Tracks the
    /// configured strip height only, without the safe-area addition.
    pub content_inset: f32,
}

/// Computes the strip geometry for the given environment.
pub fn compute_layout(
    config: &Config,
    size_class: SizeClass,
    safe_area_bottom: f32,
    suppressed: bool,
) -> LayoutGeometry {
    let raw_height = match size_class {
        SizeClass::Compact => config.compact_strip_height,
        SizeClass::Regular => config.regular_strip_height,
    };

    LayoutGeometry {
        strip_height: raw_height + safe_area_bottom,
        strip_offset: if suppressed { raw_height } else { 0.0 },
        content_inset: raw_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_height_includes_safe_area() {
        let geometry = compute_layout(&Config::default(), SizeClass::Regular, 34.0, false);
        assert_eq!(geometry.strip_height, 84.0);
        assert_eq!(geometry.strip_offset, 0.0);
    }

    #[test]
    fn test_compact_height() {
        let geometry = compute_layout(&Config::default(), SizeClass::Compact, 21.0, false);
        assert_eq!(geometry.strip_height, 55.0);
    }

    #[test]
    fn test_content_inset_excludes_safe_area() {
        // The inset applied to scrollable content tracks the raw strip
        // height, not the safe-area-augmented one.
        let geometry = compute_layout(&Config::default(), SizeClass::Regular, 34.0, false);
        assert_eq!(geometry.content_inset, 50.0);
    }

    #[test]
    fn test_suppressed_offset_is_raw_height() {
        let geometry = compute_layout(&Config::default(), SizeClass::Regular, 34.0, true);
        assert_eq!(geometry.strip_offset, 50.0);

        let geometry = compute_layout(&Config::default(), SizeClass::Compact, 0.0, true);
        assert_eq!(geometry.strip_offset, 34.0);
    }
}
