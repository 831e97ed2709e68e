//! Tab strip offset animation.
//!
//! A linear slide of the strip's vertical offset over a configured
//! duration, evaluated against explicit timestamps so the container's
//! update pump stays deterministic.

use std::time::{Duration, Instant};

/// An in-flight animation of the tab strip's vertical offset.
pub struct OffsetAnimation {
    start_offset: f32,
    target_offset: f32,
    started: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    /// Starts a new animation at `started` from `start_offset` to
    /// `target_offset`.
    pub fn new(start_offset: f32, target_offset: f32, started: Instant, duration: Duration) -> Self {
        Self {
            start_offset,
            target_offset,
            started,
            duration,
        }
    }

    /// The offset the animation is moving towards.
    pub fn target(&self) -> f32 {
        self.target_offset
    }

    /// Progress of the animation at `now`, between `0.0` and `1.0`.
    ///
    /// A zero duration completes immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// The interpolated offset at `now`.
    pub fn offset_at(&self, now: Instant) -> f32 {
        lerp(self.start_offset, self.target_offset, self.progress(now))
    }

    /// Whether the animation has reached its target at `now`.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Linear interpolation between two f32 values.
fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t.clamp(0.0, 1.0)
}
