//! Frame stepper for the eased slide after a release.
//!
//! The slide moves along the release heading. Each frame covers
//! `speed * easing * frame_time` pixels, where `easing` is a power-law
//! ease-out sampled at the temporal midpoint of the frame:
//!
//! ```text
//! progress = (elapsed_since_start - elapsed_since_last_frame / 2) / duration
//! easing   = (1 - progress) ^ easing_factor
//! ```
//!
//! Sampling at the midpoint rather than the frame end keeps long or uneven
//! frames from under-travelling. The stepper is evaluated once per tick by
//! the caller; it never loops internally.

use crate::timing::AnimationTiming;
use crate::velocity::Velocity;
use grabscroll_foundation::Offset;

/// Outcome of one slide tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideFrame {
    /// Apply `delta` (in pointer space) and schedule another tick.
    Continue { delta: Offset, timestamp_ms: f64 },
    /// The slide duration has elapsed; nothing to apply.
    Stop { timestamp_ms: f64 },
}

impl SlideFrame {
    pub fn delta(&self) -> Offset {
        match self {
            SlideFrame::Continue { delta, .. } => *delta,
            SlideFrame::Stop { .. } => Offset::ZERO,
        }
    }

    pub fn timestamp_ms(&self) -> f64 {
        match self {
            SlideFrame::Continue { timestamp_ms, .. } | SlideFrame::Stop { timestamp_ms } => {
                *timestamp_ms
            }
        }
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, SlideFrame::Continue { .. })
    }
}

/// Power-law ease-out: `(1 - progress) ^ easing_factor`.
#[inline]
pub fn ease_out(progress: f64, easing_factor: f64) -> f64 {
    (1.0 - progress).powf(easing_factor)
}

/// Computes the slide movement for the tick at `now_ms`.
pub fn step_slide_frame(
    velocity: &Velocity,
    start_timestamp_ms: f64,
    last_frame_timestamp_ms: f64,
    timing: &AnimationTiming,
    now_ms: f64,
) -> SlideFrame {
    let elapsed_since_start = now_ms - start_timestamp_ms;
    if elapsed_since_start >= timing.duration_ms {
        return SlideFrame::Stop {
            timestamp_ms: now_ms,
        };
    }

    let elapsed_since_last_frame = now_ms - last_frame_timestamp_ms;
    let progress = (elapsed_since_start - elapsed_since_last_frame / 2.0) / timing.duration_ms;
    let easing = ease_out(progress, timing.easing_factor);
    let frame_distance = velocity.speed * easing * elapsed_since_last_frame;

    SlideFrame::Continue {
        delta: Offset::from_polar(frame_distance, velocity.angle),
        timestamp_ms: now_ms,
    }
}

#[cfg(test)]
#[path = "tests/slide_tests.rs"]
mod tests;
