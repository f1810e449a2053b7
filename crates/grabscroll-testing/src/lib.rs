//! Testing utilities and harness for Grabscroll

pub mod assertions;
pub mod drag_script;
pub mod element;

// Re-export testing utilities
pub use assertions::{assert_approx_eq, assert_point_approx_eq, assert_within_bounds};
pub use drag_script::DragScript;
pub use element::TestScrollElement;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::drag_script::*;
    pub use crate::element::*;
    pub use grabscroll_core::{FrameScheduler, ManualFrameScheduler};
}
