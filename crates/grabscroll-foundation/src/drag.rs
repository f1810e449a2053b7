//! Drag tracking: timestamped pointer samples for an active drag.
//!
//! A [`DragSource`] is the pointer-tracking collaborator the scroll
//! controller is composed with. It records the press and every move while the
//! pointer is held, and answers with the latest sample plus its predecessor.
//! [`DragTracker`] is the default implementation.

use crate::geometry::{Offset, Point};
use smallvec::SmallVec;

/// Only the latest two samples matter to the scroll engine.
const RETAINED_SAMPLES: usize = 2;

/// Pointer position at a point in time. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub position: Point,
    pub timestamp_ms: f64,
}

impl DragSample {
    pub const fn new(position: Point, timestamp_ms: f64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Latest drag sample and the one recorded before it, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMoveData {
    pub current: DragSample,
    pub previous: Option<DragSample>,
}

impl DragMoveData {
    /// Positional change from the previous sample to the current one.
    pub fn delta(&self) -> Option<Offset> {
        self.previous
            .map(|previous| self.current.position - previous.position)
    }
}

/// Pointer-tracking collaborator consumed by the scroll controller.
pub trait DragSource {
    /// Pointer pressed: a new drag begins and old samples are discarded.
    fn press(&mut self, position: Point, timestamp_ms: f64);

    /// Records a move sample. Returns `true` if a drag is active and the
    /// sample was recorded.
    fn record_move(&mut self, position: Point, timestamp_ms: f64) -> bool;

    /// Pointer released. Samples stay readable until the next press so the
    /// release velocity can be derived from them.
    fn release(&mut self, timestamp_ms: f64);

    fn is_pressed(&self) -> bool;

    /// Latest sample and its predecessor, or `None` if nothing was recorded.
    fn drag_move(&self) -> Option<DragMoveData>;
}

/// Default [`DragSource`]: keeps the press state and the last two samples.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    pressed: bool,
    samples: SmallVec<[DragSample; RETAINED_SAMPLES]>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every recorded sample without changing the press state.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    fn push(&mut self, sample: DragSample) {
        if self.samples.len() == RETAINED_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }
}

impl DragSource for DragTracker {
    fn press(&mut self, position: Point, timestamp_ms: f64) {
        log::trace!("drag press at {position:?} ({timestamp_ms}ms)");
        self.samples.clear();
        self.pressed = true;
        self.push(DragSample::new(position, timestamp_ms));
    }

    fn record_move(&mut self, position: Point, timestamp_ms: f64) -> bool {
        if !self.pressed {
            return false;
        }
        self.push(DragSample::new(position, timestamp_ms));
        true
    }

    fn release(&mut self, timestamp_ms: f64) {
        log::trace!(
            "drag release at {timestamp_ms}ms with {} sample(s)",
            self.samples.len()
        );
        self.pressed = false;
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn drag_move(&self) -> Option<DragMoveData> {
        let current = *self.samples.last()?;
        let previous = self
            .samples
            .len()
            .checked_sub(2)
            .map(|index| self.samples[index]);
        Some(DragMoveData { current, previous })
    }
}
