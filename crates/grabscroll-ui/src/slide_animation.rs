//! Slide animation driver.
//!
//! Drives the eased slide using the host's frame scheduler: one tick per
//! frame, each tick evaluating [`step_slide_frame`] and handing the delta to
//! the caller. The pending tick is owned through a cancellable registration.

use grabscroll_animation::{step_slide_frame, AnimationTiming, SlideFrame, Velocity};
use grabscroll_core::{FrameCallbackRegistration, FrameClock};
use grabscroll_foundation::Offset;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Timestamps of a running slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideProgress {
    pub velocity: Velocity,
    pub start_timestamp_ms: f64,
    pub last_frame_timestamp_ms: f64,
}

/// State for an active slide. Absent whenever no slide runs.
struct SlideAnimationState {
    /// Distinguishes this slide from earlier ones whose ticks may still fire.
    generation: u64,
    velocity: Velocity,
    timing: AnimationTiming,
    start_timestamp_ms: f64,
    last_frame_timestamp_ms: Cell<f64>,
    /// Pending tick; dropping it cancels the tick.
    registration: Option<FrameCallbackRegistration>,
}

type SharedState = Rc<RefCell<Option<SlideAnimationState>>>;

/// Schedules the next slide tick.
///
/// A tick whose slide has since been cancelled or replaced does nothing, so a
/// callback the host already picked up for the current frame cannot move the
/// target after cancellation.
fn schedule_next_frame<F, G>(
    state: SharedState,
    generation: u64,
    frame_clock: FrameClock,
    on_frame: F,
    on_end: G,
) where
    F: Fn(Offset) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_millis(move |_frame_time| {
        let now = frame_clock_for_closure.now_millis();
        let frame = {
            let state_guard = state_for_closure.borrow();
            let Some(anim_state) = state_guard.as_ref() else {
                return;
            };
            if anim_state.generation != generation {
                return;
            }
            step_slide_frame(
                &anim_state.velocity,
                anim_state.start_timestamp_ms,
                anim_state.last_frame_timestamp_ms.get(),
                &anim_state.timing,
                now,
            )
        };

        match frame {
            SlideFrame::Continue {
                delta,
                timestamp_ms,
            } => {
                if let Some(anim_state) = state_for_closure.borrow().as_ref() {
                    anim_state.last_frame_timestamp_ms.set(timestamp_ms);
                }
                log::trace!("slide frame at {timestamp_ms:.1}ms: {delta:?}");
                on_frame(delta);

                // `on_frame` may have cancelled the slide.
                let still_running = state_for_closure
                    .borrow()
                    .as_ref()
                    .is_some_and(|s| s.generation == generation);
                if still_running {
                    schedule_next_frame(
                        state_for_closure,
                        generation,
                        frame_clock_for_closure,
                        on_frame,
                        on_end,
                    );
                }
            }
            SlideFrame::Stop { .. } => {
                let finished = state_for_closure.borrow_mut().take();
                drop(finished);
                on_end();
            }
        }
    });

    if let Some(anim_state) = state.borrow_mut().as_mut() {
        if anim_state.generation == generation {
            anim_state.registration = Some(registration);
        }
    }
}

/// Drives one slide at a time for a scroll controller.
pub struct SlideAnimation {
    state: SharedState,
    frame_clock: FrameClock,
    next_generation: Cell<u64>,
}

impl SlideAnimation {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
            next_generation: Cell::new(0),
        }
    }

    /// Starts a slide now, replacing any running one.
    ///
    /// `on_frame` receives each frame's delta in pointer space. `on_end` runs
    /// only when the slide reaches its duration, never on cancellation.
    pub fn start<F, G>(&self, velocity: Velocity, timing: AnimationTiming, on_frame: F, on_end: G)
    where
        F: Fn(Offset) + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();

        let generation = self.next_generation.get() + 1;
        self.next_generation.set(generation);
        let now = self.frame_clock.now_millis();

        *self.state.borrow_mut() = Some(SlideAnimationState {
            generation,
            velocity,
            timing,
            start_timestamp_ms: now,
            last_frame_timestamp_ms: Cell::new(now),
            registration: None,
        });

        schedule_next_frame(
            self.state.clone(),
            generation,
            self.frame_clock.clone(),
            on_frame,
            on_end,
        );
    }

    /// Stops the running slide, if any. Returns whether one was running.
    pub fn cancel(&self) -> bool {
        let cancelled = self.state.borrow_mut().take();
        match cancelled {
            Some(anim_state) => {
                if let Some(registration) = anim_state.registration {
                    registration.cancel();
                }
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn progress(&self) -> Option<SlideProgress> {
        self.state.borrow().as_ref().map(|s| SlideProgress {
            velocity: s.velocity,
            start_timestamp_ms: s.start_timestamp_ms,
            last_frame_timestamp_ms: s.last_frame_timestamp_ms.get(),
        })
    }
}

#[cfg(test)]
#[path = "tests/slide_animation_tests.rs"]
mod tests;
