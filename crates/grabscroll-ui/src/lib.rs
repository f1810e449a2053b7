//! Drag-to-scroll for Grabscroll
//!
//! Attach a [`DragToScroll`] controller to any [`ScrollTarget`]: dragging
//! scrolls the content against the pointer, and a fast release keeps it
//! sliding with an eased deceleration.

mod config;
mod drag_to_scroll;
mod error;
pub mod registry;
mod slide_animation;

pub use config::{
    AnimationConfig, AnimationParameters, DirectionConfig, DragToScrollConfig,
    DragToScrollParameters, TimingConfig,
};
pub use drag_to_scroll::{DragToScroll, InstanceId, InteractionPhase};
pub use error::{ConfigError, ConfigViolation, DragError};
pub use registry::{destroy_all, destroy_for_target, instances};
pub use slide_animation::{SlideAnimation, SlideProgress};

pub use grabscroll_animation::{AnimationTiming, Velocity};
pub use grabscroll_foundation::{
    Direction, Point, PointerEvent, PointerEventKind, ScrollTarget, Size, WheelEvent,
};

pub mod prelude {
    pub use crate::config::{DragToScrollConfig, DragToScrollParameters};
    pub use crate::drag_to_scroll::{DragToScroll, InteractionPhase};
    pub use crate::error::{ConfigError, DragError};
    pub use crate::registry;
    pub use grabscroll_foundation::prelude::*;
}
