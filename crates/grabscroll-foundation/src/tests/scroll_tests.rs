use super::*;

fn extent(current: Point) -> ScrollExtent {
    ScrollExtent::new(current, Size::new(1000.0, 1000.0), Size::new(100.0, 100.0))
}

#[test]
fn delta_is_inverted_relative_to_pointer() {
    let extent = extent(Point::new(400.0, 400.0));

    let destination = scroll_destination(&extent, Offset::new(-50.0, 30.0), Direction::BOTH);

    assert_eq!(destination, Point::new(450.0, 370.0));
}

#[test]
fn destination_clamps_to_max_scroll() {
    let extent = extent(Point::ZERO);
    assert_eq!(extent.max, Point::new(900.0, 900.0));

    let destination = scroll_destination(&extent, Offset::new(-1100.0, 0.0), Direction::BOTH);

    assert_eq!(destination, Point::new(900.0, 0.0));
}

#[test]
fn destination_clamps_to_zero() {
    let extent = extent(Point::new(20.0, 20.0));

    let destination = scroll_destination(&extent, Offset::new(500.0, 500.0), Direction::BOTH);

    assert_eq!(destination, Point::ZERO);
}

#[test]
fn disabled_axis_keeps_current_offset() {
    let extent = extent(Point::new(300.0, 300.0));

    let horizontal = scroll_destination(&extent, Offset::new(-100.0, -100.0), Direction::HORIZONTAL);
    let vertical = scroll_destination(&extent, Offset::new(-100.0, -100.0), Direction::VERTICAL);
    let none = scroll_destination(&extent, Offset::new(-1e9, 1e9), Direction::NONE);

    assert_eq!(horizontal, Point::new(400.0, 300.0));
    assert_eq!(vertical, Point::new(300.0, 400.0));
    assert_eq!(none, Point::new(300.0, 300.0));
}

#[test]
fn viewport_larger_than_content_never_scrolls() {
    let extent = ScrollExtent::new(Point::ZERO, Size::new(50.0, 50.0), Size::new(100.0, 100.0));
    assert_eq!(extent.max, Point::ZERO);

    let destination = scroll_destination(&extent, Offset::new(-40.0, -40.0), Direction::BOTH);

    assert_eq!(destination, Point::ZERO);
}

#[test]
fn destination_always_within_bounds() {
    let deltas = [-2000.0, -901.0, -1.5, 0.0, 0.25, 17.0, 899.0, 5000.0];
    for &start in &[0.0, 450.0, 900.0] {
        let extent = extent(Point::new(start, start));
        for &dx in &deltas {
            for &dy in &deltas {
                let destination = scroll_destination(&extent, Offset::new(dx, dy), Direction::BOTH);
                assert!((0.0..=900.0).contains(&destination.x), "x out of bounds: {destination:?}");
                assert!((0.0..=900.0).contains(&destination.y), "y out of bounds: {destination:?}");
            }
        }
    }
}

struct FixedTarget;

impl ScrollTarget for FixedTarget {
    fn scroll_position(&self) -> Point {
        Point::new(10.0, 20.0)
    }

    fn scroll_size(&self) -> Size {
        Size::new(300.0, 200.0)
    }

    fn client_size(&self) -> Size {
        Size::new(100.0, 150.0)
    }

    fn scroll_to(&self, _position: Point) {}
}

#[test]
fn extent_reads_target_geometry() {
    let extent = ScrollExtent::of(&FixedTarget);

    assert_eq!(extent.current, Point::new(10.0, 20.0));
    assert_eq!(extent.max, Point::new(200.0, 50.0));
}
