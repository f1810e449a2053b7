//! Slide animation math for Grabscroll
//!
//! Pure functions only: deriving a release velocity from the last two drag
//! samples and stepping the eased slide one frame at a time. Scheduling and
//! state live in `grabscroll-ui`.

mod slide;
mod timing;
mod velocity;

pub use slide::{ease_out, step_slide_frame, SlideFrame};
pub use timing::AnimationTiming;
pub use velocity::{release_velocity, Velocity, MIN_RELEASE_SPEED};
