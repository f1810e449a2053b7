//! Core runtime for Grabscroll: host frame scheduling and clocks.
//!
//! The drag-to-scroll engine never owns a render loop. It asks the host for
//! "run this before the next visual refresh" through [`FrameScheduler`] and
//! keeps the returned [`FrameCallbackRegistration`] so a pending frame can be
//! cancelled at any time.

mod clock;
mod frame_clock;
mod scheduler;

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;

pub use clock::SystemClock;
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use scheduler::{FrameCallback, FrameCallbackId, FrameScheduler, ManualFrameScheduler};
