//! Scripted mouse drags.

use grabscroll_foundation::{Offset, Point, PointerEvent};

/// A straight-line drag: press at `from`, a move on the spot, `steps` equal
/// moves spread over `duration_ms`, then release where the pointer stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct DragScript {
    pub from: Point,
    pub delta: Offset,
    pub steps: usize,
    pub duration_ms: f64,
    /// Pause between the last move and the release.
    pub hold_ms: f64,
}

impl Default for DragScript {
    fn default() -> Self {
        Self {
            from: Point::new(100.0, 100.0),
            delta: Offset::new(-100.0, -100.0),
            steps: 2,
            duration_ms: 50.0,
            hold_ms: 0.0,
        }
    }
}

impl DragScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: Point) -> Self {
        self.from = from;
        self
    }

    pub fn delta(mut self, dx: f64, dy: f64) -> Self {
        self.delta = Offset::new(dx, dy);
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn hold_ms(mut self, hold_ms: f64) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    /// Timestamp of the release when the press happens at `start_ms`.
    pub fn end_time(&self, start_ms: f64) -> f64 {
        start_ms + self.duration_ms + self.hold_ms
    }

    /// Events without the release, in dispatch order.
    pub fn drag_events(&self, start_ms: f64) -> Vec<PointerEvent> {
        let steps = self.steps.max(1);
        let step = Offset::new(self.delta.x / steps as f64, self.delta.y / steps as f64);
        let step_ms = self.duration_ms / steps as f64;

        let mut events = Vec::with_capacity(steps + 2);
        events.push(PointerEvent::down(self.from, start_ms));
        events.push(PointerEvent::moved(self.from, start_ms));

        let mut position = self.from;
        for index in 1..=steps {
            position = position + step;
            events.push(PointerEvent::moved(position, start_ms + step_ms * index as f64));
        }
        events
    }

    /// Full drag including the release.
    pub fn events(&self, start_ms: f64) -> Vec<PointerEvent> {
        let mut events = self.drag_events(start_ms);
        events.push(PointerEvent::up(self.from + self.delta, self.end_time(start_ms)));
        events
    }

    /// Dispatches every event in order.
    pub fn play<E>(
        &self,
        start_ms: f64,
        mut dispatch: impl FnMut(&PointerEvent) -> Result<(), E>,
    ) -> Result<(), E> {
        for event in self.events(start_ms) {
            dispatch(&event)?;
        }
        Ok(())
    }
}
