use crate::scheduler::{FrameCallbackId, FrameScheduler};
use std::fmt;
use std::rc::Rc;

/// Cloneable handle to the host's frame scheduler.
#[derive(Clone)]
pub struct FrameClock {
    scheduler: Rc<dyn FrameScheduler>,
}

impl FrameClock {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { scheduler }
    }

    pub fn now_millis(&self) -> f64 {
        self.scheduler.now_millis()
    }

    /// Registers `callback` for the next frame.
    ///
    /// Dropping the returned registration cancels the callback if it has not
    /// run yet.
    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(f64) + 'static,
    ) -> FrameCallbackRegistration {
        match self.scheduler.request_frame(Box::new(callback)) {
            Some(id) => FrameCallbackRegistration::new(self.scheduler.clone(), id),
            None => {
                log::warn!("frame scheduler refused a frame callback");
                FrameCallbackRegistration::inactive(self.scheduler.clone())
            }
        }
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameClock")
            .field("now_millis", &self.scheduler.now_millis())
            .finish()
    }
}

pub struct FrameCallbackRegistration {
    scheduler: Rc<dyn FrameScheduler>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(scheduler: Rc<dyn FrameScheduler>, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    /// Whether the host accepted the callback.
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

impl fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .finish()
    }
}
