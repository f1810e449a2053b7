use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Suppression requests recorded while an event is being handled.
///
/// Shared via `Rc<Cell>` so requests made on a copy are visible to the host
/// that owns the original browser/native event.
#[derive(Clone, Debug, Default)]
pub struct EventFlags {
    propagation_stopped: Rc<Cell<bool>>,
    default_prevented: Rc<Cell<bool>>,
}

impl EventFlags {
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Mouse event delivered to a drag-to-scroll controller.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Milliseconds on the host frame scheduler's time base.
    pub timestamp_ms: f64,
    flags: EventFlags,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_ms: f64) -> Self {
        Self {
            kind,
            position,
            timestamp_ms,
            flags: EventFlags::default(),
        }
    }

    pub fn down(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Down, position, timestamp_ms)
    }

    pub fn moved(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Move, position, timestamp_ms)
    }

    pub fn up(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Up, position, timestamp_ms)
    }

    pub fn flags(&self) -> &EventFlags {
        &self.flags
    }

    pub fn stop_propagation(&self) {
        self.flags.stop_propagation();
    }

    pub fn prevent_default(&self) {
        self.flags.prevent_default();
    }
}

/// Wheel input on the scroll target. Any wheel input cancels a slide.
#[derive(Clone, Debug, Default)]
pub struct WheelEvent {
    pub timestamp_ms: f64,
    flags: EventFlags,
}

impl WheelEvent {
    pub fn new(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            flags: EventFlags::default(),
        }
    }

    pub fn flags(&self) -> &EventFlags {
        &self.flags
    }
}
