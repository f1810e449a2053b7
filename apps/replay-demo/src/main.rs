//! Replays a flick against an in-memory 1000x1000 element in a 100x100
//! viewport, in real time, and logs where each frame leaves the viewport.
//!
//! Usage: `replay-demo [CONFIG_JSON]`, e.g.
//! `replay-demo '{"animation": {"timing": {"easingFactor": 2}}}'`.
//! Set `RUST_LOG=grabscroll_ui=trace` to see every frame delta.

use anyhow::Context;
use grabscroll_core::{ManualFrameScheduler, SystemClock};
use grabscroll_foundation::{Point, PointerEvent, ScrollTarget, Size};
use grabscroll_ui::{DragToScroll, DragToScrollConfig, InteractionPhase};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct ReplayElement {
    position: Cell<Point>,
    scroll_size: Size,
    client_size: Size,
    frames: Cell<usize>,
}

impl ScrollTarget for ReplayElement {
    fn scroll_position(&self) -> Point {
        self.position.get()
    }

    fn scroll_size(&self) -> Size {
        self.scroll_size
    }

    fn client_size(&self) -> Size {
        self.client_size
    }

    fn scroll_to(&self, position: Point) {
        self.frames.set(self.frames.get() + 1);
        self.position.set(position);
        log::info!(
            "scroll #{:<3} -> ({:7.2}, {:7.2})",
            self.frames.get(),
            position.x,
            position.y
        );
    }

    fn set_wheel_listener(&self, listening: bool) {
        log::debug!("wheel listener {}", if listening { "on" } else { "off" });
    }
}

/// A short flick up and to the left: five moves over 80ms.
fn flick() -> Vec<(Duration, PointerEvent)> {
    let step = Duration::from_millis(16);
    let mut events = vec![(Duration::ZERO, PointerEvent::down(Point::new(300.0, 300.0), 0.0))];
    for index in 1..=5 {
        let position = Point::new(300.0 - 40.0 * index as f64, 300.0 - 25.0 * index as f64);
        events.push((step, PointerEvent::moved(position, 0.0)));
    }
    events.push((Duration::ZERO, PointerEvent::up(Point::new(100.0, 175.0), 0.0)));
    events
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => DragToScrollConfig::from_json(&json).context("parsing configuration")?,
        None => DragToScrollConfig::default(),
    };

    let clock = SystemClock::new();
    let scheduler = Rc::new(ManualFrameScheduler::new());
    let element = Rc::new(ReplayElement {
        position: Cell::new(Point::ZERO),
        scroll_size: Size::new(1000.0, 1000.0),
        client_size: Size::new(100.0, 100.0),
        frames: Cell::new(0),
    });
    let controller = DragToScroll::from_config(element.clone(), scheduler.clone(), &config)
        .context("invalid configuration")?;
    log::info!("replaying flick with {:?}", controller.parameters());

    for (delay, scripted) in flick() {
        thread::sleep(delay);
        let now = clock.now_millis();
        scheduler.set_time(now);
        let event = PointerEvent::new(scripted.kind, scripted.position, now);
        controller.handle_pointer_event(&event)?;
    }

    match controller.velocity() {
        Some(velocity) => log::info!(
            "released at {:.2}px/ms heading {:.1}°",
            velocity.speed,
            velocity.angle.to_degrees()
        ),
        None => log::info!("released too slowly to slide"),
    }

    let mut frames = 0;
    while scheduler.has_frame_callbacks() {
        thread::sleep(FRAME_INTERVAL);
        scheduler.drain_frame_callbacks(clock.now_millis());
        frames += 1;
    }

    debug_assert_eq!(controller.phase(), InteractionPhase::Idle);
    let end = element.scroll_position();
    log::info!(
        "slide finished after {frames} frames at ({:.2}, {:.2})",
        end.x,
        end.y
    );
    controller.destroy();
    Ok(())
}
