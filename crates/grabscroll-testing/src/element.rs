//! In-memory scroll target.

use grabscroll_foundation::{Point, ScrollExtent, ScrollTarget, Size};
use std::cell::{Cell, RefCell};

/// Scrollable element with fixed extents that records every scroll request.
///
/// `scroll_to` stores the destination as given, the way a DOM element does
/// once the value is already inside its range.
#[derive(Debug)]
pub struct TestScrollElement {
    position: Cell<Point>,
    scroll_size: Cell<Size>,
    client_size: Cell<Size>,
    scroll_calls: RefCell<Vec<Point>>,
    wheel_listening: Cell<bool>,
    wheel_listener_changes: Cell<usize>,
}

impl TestScrollElement {
    /// 1000x1000 content in a 100x100 viewport, scrolled to the origin.
    pub fn new() -> Self {
        Self::with_sizes(Size::new(1000.0, 1000.0), Size::new(100.0, 100.0))
    }

    pub fn with_sizes(scroll_size: Size, client_size: Size) -> Self {
        Self {
            position: Cell::new(Point::ZERO),
            scroll_size: Cell::new(scroll_size),
            client_size: Cell::new(client_size),
            scroll_calls: RefCell::new(Vec::new()),
            wheel_listening: Cell::new(false),
            wheel_listener_changes: Cell::new(0),
        }
    }

    pub fn scrolled_to(self, position: Point) -> Self {
        self.position.set(position);
        self
    }

    /// Changes the content extent, as a relayout would.
    pub fn resize_content(&self, scroll_size: Size) {
        self.scroll_size.set(scroll_size);
    }

    pub fn resize_viewport(&self, client_size: Size) {
        self.client_size.set(client_size);
    }

    pub fn position(&self) -> Point {
        self.position.get()
    }

    pub fn extent(&self) -> ScrollExtent {
        ScrollExtent::of(self)
    }

    pub fn scroll_calls(&self) -> Vec<Point> {
        self.scroll_calls.borrow().clone()
    }

    pub fn scroll_call_count(&self) -> usize {
        self.scroll_calls.borrow().len()
    }

    pub fn clear_scroll_calls(&self) {
        self.scroll_calls.borrow_mut().clear();
    }

    pub fn is_wheel_listening(&self) -> bool {
        self.wheel_listening.get()
    }

    /// How many times a wheel listener was added or removed.
    pub fn wheel_listener_changes(&self) -> usize {
        self.wheel_listener_changes.get()
    }
}

impl Default for TestScrollElement {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTarget for TestScrollElement {
    fn scroll_position(&self) -> Point {
        self.position.get()
    }

    fn scroll_size(&self) -> Size {
        self.scroll_size.get()
    }

    fn client_size(&self) -> Size {
        self.client_size.get()
    }

    fn scroll_to(&self, position: Point) {
        self.scroll_calls.borrow_mut().push(position);
        self.position.set(position);
    }

    fn set_wheel_listener(&self, listening: bool) {
        self.wheel_listening.set(listening);
        self.wheel_listener_changes
            .set(self.wheel_listener_changes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_element_matches_fixture_extents() {
        let element = TestScrollElement::new();
        let extent = element.extent();

        assert_eq!(extent.current, Point::ZERO);
        assert_eq!(extent.max, Point::new(900.0, 900.0));
    }

    #[test]
    fn scroll_calls_are_recorded_in_order() {
        let element = TestScrollElement::new();
        element.scroll_to(Point::new(10.0, 0.0));
        element.scroll_to(Point::new(20.0, 5.0));

        assert_eq!(
            element.scroll_calls(),
            vec![Point::new(10.0, 0.0), Point::new(20.0, 5.0)]
        );
        assert_eq!(element.position(), Point::new(20.0, 5.0));
    }
}
