use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub type FrameCallbackId = u64;

/// Callback invoked once with the frame time in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64) + 'static>;

/// Host primitive for "run this before the next visual refresh".
///
/// Implementations must deliver frame callbacks on the thread that registered
/// them and must never run a callback whose id was cancelled before the
/// frame started. A callback that was already picked up for the current frame
/// may still run after cancellation; consumers guard against that themselves.
pub trait FrameScheduler {
    /// Current time in milliseconds, on the same time base as frame times.
    fn now_millis(&self) -> f64;

    /// Schedules `callback` for the next frame. Returns `None` if the host can
    /// no longer schedule frames.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameCallbackId>;

    /// Cancels a pending callback. Unknown or already-fired ids are ignored.
    fn cancel_frame(&self, id: FrameCallbackId);
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

/// Frame scheduler driven explicitly by the caller.
///
/// Nothing runs until [`ManualFrameScheduler::drain_frame_callbacks`] is
/// called, which makes frame timing fully deterministic. Tests and headless
/// hosts use this; a native host can drive it from its own event loop.
pub struct ManualFrameScheduler {
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    now: Cell<f64>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::with_start_time(0.0)
    }

    pub fn with_start_time(now_ms: f64) -> Self {
        Self {
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            now: Cell::new(now_ms),
        }
    }

    /// Moves the clock without running any frame.
    pub fn set_time(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance_by(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.frame_callbacks.borrow().len()
    }

    /// Runs every callback registered before this call at `frame_time_ms`.
    ///
    /// Callbacks registered while draining land in the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_ms: f64) {
        self.now.set(frame_time_ms);
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<FrameCallback> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        for callback in pending {
            callback(frame_time_ms);
        }
    }

    /// Advances by `step_ms` and drains, repeating until no callback is
    /// pending or `max_frames` frames ran. Returns the number of frames run.
    pub fn run_frames(&self, step_ms: f64, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.has_frame_callbacks() {
            let frame_time = self.now.get() + step_ms;
            self.drain_frame_callbacks(frame_time);
            frames += 1;
        }
        frames
    }
}

impl Default for ManualFrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn now_millis(&self) -> f64 {
        self.now.get()
    }

    fn request_frame(&self, callback: FrameCallback) -> Option<FrameCallbackId> {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks.borrow_mut().push_back(FrameCallbackEntry {
            id,
            callback: Some(callback),
        });
        Some(id)
    }

    fn cancel_frame(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }
}
