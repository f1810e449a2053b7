//! Release velocity from the last two drag samples.

use grabscroll_foundation::DragSample;

/// Releases at or below this speed (px/ms) do not slide.
pub const MIN_RELEASE_SPEED: f64 = 0.2;

/// Speed and heading of the pointer at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    /// Pixels per millisecond, never above the configured maximum.
    pub speed: f64,
    /// Heading in radians, `atan2(dy, dx)` of the last movement.
    pub angle: f64,
}

/// Derives the release velocity from `current` and the sample before it.
///
/// Returns `None` when the samples carry no usable time difference or when
/// the capped speed does not exceed [`MIN_RELEASE_SPEED`].
pub fn release_velocity(
    current: &DragSample,
    previous: &DragSample,
    max_speed: f64,
) -> Option<Velocity> {
    let time_delta = current.timestamp_ms - previous.timestamp_ms;
    if time_delta.is_nan() || time_delta <= 0.0 {
        return None;
    }

    let delta = current.position - previous.position;
    let speed = (delta.length() / time_delta).min(max_speed);
    if speed.is_nan() || speed <= MIN_RELEASE_SPEED {
        return None;
    }

    Some(Velocity {
        speed,
        angle: delta.angle(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabscroll_foundation::Point;

    fn sample(x: f64, y: f64, t: f64) -> DragSample {
        DragSample::new(Point::new(x, y), t)
    }

    #[test]
    fn diagonal_release_below_cap() {
        let velocity = release_velocity(&sample(0.0, 0.0, 16.0), &sample(100.0, 100.0, 0.0), 10.0)
            .expect("fast enough to slide");

        assert!((velocity.speed - 8.838_834_76).abs() < 1e-6);
        assert!((velocity.angle + 2.356_194_49).abs() < 1e-6);
    }

    #[test]
    fn speed_is_capped_at_max_speed() {
        let velocity = release_velocity(&sample(1000.0, 0.0, 1.0), &sample(0.0, 0.0, 0.0), 10.0)
            .expect("capped velocity");

        assert_eq!(velocity.speed, 10.0);
        assert_eq!(velocity.angle, 0.0);
    }

    #[test]
    fn slow_release_has_no_velocity() {
        // 3px over 16ms is 0.1875 px/ms.
        assert!(release_velocity(&sample(3.0, 0.0, 16.0), &sample(0.0, 0.0, 0.0), 10.0).is_none());
        // Exactly at the threshold does not slide either.
        assert!(release_velocity(&sample(2.0, 0.0, 10.0), &sample(0.0, 0.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn stationary_release_has_no_velocity() {
        assert!(release_velocity(&sample(5.0, 5.0, 40.0), &sample(5.0, 5.0, 20.0), 10.0).is_none());
    }

    #[test]
    fn zero_or_negative_time_delta_has_no_velocity() {
        assert!(release_velocity(&sample(50.0, 0.0, 10.0), &sample(0.0, 0.0, 10.0), 10.0).is_none());
        assert!(release_velocity(&sample(50.0, 0.0, 5.0), &sample(0.0, 0.0, 10.0), 10.0).is_none());
    }

    #[test]
    fn max_speed_at_threshold_disables_sliding() {
        assert!(release_velocity(&sample(100.0, 0.0, 1.0), &sample(0.0, 0.0, 0.0), 0.2).is_none());
        assert!(release_velocity(&sample(100.0, 0.0, 1.0), &sample(0.0, 0.0, 0.0), 0.0).is_none());
    }
}
