//! Assertion helpers for scroll positions.

use grabscroll_foundation::{Point, ScrollExtent};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f64, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that every position lies inside `[0, max]` on both axes.
pub fn assert_within_bounds(positions: &[Point], extent: &ScrollExtent, msg: &str) {
    for position in positions {
        assert!(
            (0.0..=extent.max.x).contains(&position.x)
                && (0.0..=extent.max.y).contains(&position.y),
            "{}: {:?} outside [0, {:?}]",
            msg,
            position,
            extent.max
        );
    }
}
