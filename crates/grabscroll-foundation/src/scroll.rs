//! Scroll target contract and the clamped scroll offset calculation.

use crate::direction::Direction;
use crate::geometry::{Offset, Point, Size};

/// Element whose content is scrolled by dragging.
///
/// Mirrors what a DOM element exposes: current scroll offsets, scrollable and
/// visible extents, and an instant absolute scroll.
pub trait ScrollTarget {
    /// Current scroll offsets (`scrollLeft`, `scrollTop`).
    fn scroll_position(&self) -> Point;

    /// Full content extent (`scrollWidth`, `scrollHeight`).
    fn scroll_size(&self) -> Size;

    /// Visible extent (`clientWidth`, `clientHeight`).
    fn client_size(&self) -> Size;

    /// Jumps to an absolute scroll position without animation.
    fn scroll_to(&self, position: Point);

    /// Starts or stops listening for wheel input that cancels a slide.
    fn set_wheel_listener(&self, _listening: bool) {}
}

/// Current and maximum scroll offsets of a target, read fresh per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    pub current: Point,
    pub max: Point,
}

impl ScrollExtent {
    pub fn new(current: Point, scroll_size: Size, client_size: Size) -> Self {
        // Content smaller than the viewport cannot scroll at all.
        let max = Point::new(
            (scroll_size.width - client_size.width).max(0.0),
            (scroll_size.height - client_size.height).max(0.0),
        );
        Self { current, max }
    }

    pub fn of(target: &dyn ScrollTarget) -> Self {
        Self::new(
            target.scroll_position(),
            target.scroll_size(),
            target.client_size(),
        )
    }
}

/// Converts a pointer delta into the absolute scroll destination.
///
/// Disabled axes contribute nothing. Enabled deltas are inverted so the
/// content follows the pointer, then the result is clamped to `[0, max]`.
pub fn scroll_destination(extent: &ScrollExtent, delta: Offset, direction: Direction) -> Point {
    let delta_x = if direction.x { -delta.x } else { 0.0 };
    let delta_y = if direction.y { -delta.y } else { 0.0 };

    Point::new(
        (extent.current.x + delta_x).min(extent.max.x).max(0.0),
        (extent.current.y + delta_y).min(extent.max.y).max(0.0),
    )
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
