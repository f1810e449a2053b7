//! `requestAnimationFrame` as a [`FrameScheduler`].

use crate::error::WebError;
use grabscroll_core::{FrameCallback, FrameCallbackId, FrameScheduler};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

type FrameClosure = Closure<dyn FnMut(f64)>;

struct PendingFrame {
    handle: i32,
    closure: FrameClosure,
}

#[derive(Default)]
struct FrameTable {
    next_id: FrameCallbackId,
    pending: HashMap<FrameCallbackId, PendingFrame>,
    /// Closures that already ran. Dropped at the start of the next frame
    /// callback, never while one of them is still on the stack.
    spent: Vec<FrameClosure>,
}

/// Browser frame scheduler. Frame and event times share the
/// `performance.now()` time base.
pub struct AnimationFrameScheduler {
    window: Window,
    performance: Performance,
    table: Rc<RefCell<FrameTable>>,
}

impl AnimationFrameScheduler {
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let performance = window.performance().ok_or(WebError::NoPerformance)?;
        Ok(Self {
            window,
            performance,
            table: Rc::new(RefCell::new(FrameTable::default())),
        })
    }

    pub fn pending_frame_count(&self) -> usize {
        self.table.borrow().pending.len()
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn now_millis(&self) -> f64 {
        self.performance.now()
    }

    fn request_frame(&self, callback: FrameCallback) -> Option<FrameCallbackId> {
        let id = {
            let mut table = self.table.borrow_mut();
            table.next_id += 1;
            table.next_id
        };

        let table_ref = Rc::downgrade(&self.table);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |time: f64| {
            if let Some(table) = table_ref.upgrade() {
                let mut table = table.borrow_mut();
                table.spent.clear();
                if let Some(frame) = table.pending.remove(&id) {
                    table.spent.push(frame.closure);
                }
            }
            if let Some(callback) = callback.take() {
                callback(time);
            }
        }) as Box<dyn FnMut(f64)>);

        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => {
                self.table
                    .borrow_mut()
                    .pending
                    .insert(id, PendingFrame { handle, closure });
                Some(id)
            }
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                None
            }
        }
    }

    fn cancel_frame(&self, id: FrameCallbackId) {
        let Some(frame) = self.table.borrow_mut().pending.remove(&id) else {
            return;
        };
        if let Err(err) = self.window.cancel_animation_frame(frame.handle) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}
