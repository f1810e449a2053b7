//! Foundation elements for Grabscroll: geometry, pointer input, drag tracking
//! and the scroll target contract.

pub mod direction;
pub mod drag;
pub mod geometry;
pub mod pointer;
pub mod scroll;

// Re-export commonly used items
pub use direction::Direction;
pub use drag::{DragMoveData, DragSample, DragSource, DragTracker};
pub use geometry::{Offset, Point, Size};
pub use pointer::{EventFlags, PointerEvent, PointerEventKind, WheelEvent};
pub use scroll::{scroll_destination, ScrollExtent, ScrollTarget};

pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::drag::*;
    pub use crate::geometry::*;
    pub use crate::pointer::*;
    pub use crate::scroll::*;
}
