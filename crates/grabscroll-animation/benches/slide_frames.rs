use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grabscroll_animation::{release_velocity, step_slide_frame, AnimationTiming, Velocity};
use grabscroll_foundation::{DragSample, Point};

const FRAME_INTERVALS_MS: &[f64] = &[8.0, 16.0, 33.0];

/// Steps a full slide at a fixed frame interval, returning the total travel.
fn run_slide(velocity: &Velocity, timing: &AnimationTiming, frame_ms: f64) -> f64 {
    let mut last = 0.0;
    let mut now = 0.0;
    let mut travelled = 0.0;
    loop {
        now += frame_ms;
        let frame = step_slide_frame(velocity, 0.0, last, timing, now);
        if !frame.is_continue() {
            return travelled;
        }
        travelled += frame.delta().length();
        last = frame.timestamp_ms();
    }
}

fn bench_full_slide(c: &mut Criterion) {
    let timing = AnimationTiming::default();
    let velocity = Velocity {
        speed: 8.0,
        angle: -2.356,
    };
    let mut group = c.benchmark_group("full_slide");
    for &frame_ms in FRAME_INTERVALS_MS {
        group.bench_with_input(BenchmarkId::from_parameter(frame_ms), &frame_ms, |b, &frame_ms| {
            b.iter(|| run_slide(black_box(&velocity), black_box(&timing), frame_ms));
        });
    }
    group.finish();
}

fn bench_release_velocity(c: &mut Criterion) {
    let previous = DragSample::new(Point::new(100.0, 100.0), 0.0);
    let current = DragSample::new(Point::new(0.0, 0.0), 16.0);
    c.bench_function("release_velocity", |b| {
        b.iter(|| release_velocity(black_box(&current), black_box(&previous), black_box(10.0)));
    });
}

criterion_group!(benches, bench_full_slide, bench_release_velocity);
criterion_main!(benches);
