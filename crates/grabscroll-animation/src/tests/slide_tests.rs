use super::*;

const TIMING: AnimationTiming = AnimationTiming::new(1500.0, 4.0, 10.0);

fn eastward(speed: f64) -> Velocity {
    Velocity { speed, angle: 0.0 }
}

#[test]
fn first_frame_uses_midpoint_progress() {
    let frame = step_slide_frame(&eastward(5.0), 0.0, 0.0, &TIMING, 16.0);

    let progress: f64 = (16.0 - 8.0) / 1500.0;
    let expected = 5.0 * (1.0 - progress).powf(4.0) * 16.0;
    match frame {
        SlideFrame::Continue { delta, timestamp_ms } => {
            assert!((delta.x - expected).abs() < 1e-9);
            assert!((delta.x - 78.3).abs() < 0.05, "got {}", delta.x);
            assert!(delta.y.abs() < 1e-12);
            assert_eq!(timestamp_ms, 16.0);
        }
        SlideFrame::Stop { .. } => panic!("slide should continue"),
    }
}

#[test]
fn stops_once_duration_has_elapsed() {
    let at_end = step_slide_frame(&eastward(5.0), 0.0, 1490.0, &TIMING, 1500.0);
    let after_end = step_slide_frame(&eastward(5.0), 0.0, 1490.0, &TIMING, 2000.0);

    assert_eq!(at_end, SlideFrame::Stop { timestamp_ms: 1500.0 });
    assert_eq!(after_end.delta(), Offset::ZERO);
    assert!(!after_end.is_continue());
}

#[test]
fn zero_duration_stops_immediately() {
    let timing = AnimationTiming::new(0.0, 4.0, 10.0);
    let frame = step_slide_frame(&eastward(5.0), 100.0, 100.0, &timing, 100.0);
    assert!(!frame.is_continue());
}

#[test]
fn delta_follows_release_angle() {
    let velocity = Velocity {
        speed: 2.0,
        angle: -3.0 * std::f64::consts::FRAC_PI_4,
    };

    let delta = step_slide_frame(&velocity, 0.0, 0.0, &TIMING, 16.0).delta();

    assert!(delta.x < 0.0 && delta.y < 0.0);
    assert!((delta.x - delta.y).abs() < 1e-9);
}

#[test]
fn frame_distance_decays_over_time() {
    let velocity = eastward(5.0);
    let mut last = 0.0;
    let mut previous_distance = f64::INFINITY;
    let mut now = 0.0;

    loop {
        now += 16.0;
        let frame = step_slide_frame(&velocity, 0.0, last, &TIMING, now);
        if !frame.is_continue() {
            break;
        }
        let distance = frame.delta().x;
        assert!(distance >= 0.0);
        assert!(distance <= previous_distance, "slide must decelerate");
        previous_distance = distance;
        last = frame.timestamp_ms();
    }

    assert!(now >= TIMING.duration_ms);
}

#[test]
fn larger_easing_factor_decays_faster() {
    let gentle = AnimationTiming::new(1500.0, 1.0, 10.0);
    let steep = AnimationTiming::new(1500.0, 8.0, 10.0);

    let gentle_delta = step_slide_frame(&eastward(5.0), 0.0, 734.0, &gentle, 750.0).delta();
    let steep_delta = step_slide_frame(&eastward(5.0), 0.0, 734.0, &steep, 750.0).delta();

    assert!(steep_delta.x < gentle_delta.x);
}

#[test]
fn ease_out_endpoints() {
    assert_eq!(ease_out(0.0, 4.0), 1.0);
    assert_eq!(ease_out(1.0, 4.0), 0.0);
    assert!((ease_out(0.5, 1.0) - 0.5).abs() < 1e-12);
}
