//! Geometric primitives: Point, Offset, Size

use std::ops::{Add, Neg, Sub};

/// Absolute position, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn translate(self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

/// Relative displacement between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians, measured like `atan2(y, x)`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn from_polar(length: f64, angle: f64) -> Self {
        Self {
            x: angle.cos() * length,
            y: angle.sin() * length,
        }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        self.translate(rhs)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_offset() {
        let delta = Point::new(0.0, 0.0) - Point::new(100.0, 100.0);
        assert_eq!(delta, Offset::new(-100.0, -100.0));
        assert!((delta.length() - 141.421_356).abs() < 1e-5);
        assert!((delta.angle() + 3.0 * std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn polar_round_trip_keeps_direction() {
        let offset = Offset::from_polar(10.0, std::f64::consts::FRAC_PI_2);
        assert!(offset.x.abs() < 1e-12);
        assert!((offset.y - 10.0).abs() < 1e-12);
        assert_eq!(-Offset::new(1.0, -2.0), Offset::new(-1.0, 2.0));
    }
}
