//! Drag-to-scroll interaction controller.
//!
//! [`DragToScroll`] turns drag samples from its [`DragSource`] into scroll
//! positions on a [`ScrollTarget`]. On release it derives a velocity from the
//! last two samples and, if fast enough, slides the content with an eased
//! deceleration until the duration elapses, a new drag begins, or the target
//! receives wheel input.
//!
//! ```text
//! Idle --press--> Dragging --release--> Sliding --duration--> Idle
//!                    |                     |
//!                    +--slow release-------+--press / wheel--> Idle
//! ```

use crate::config::{DragToScrollConfig, DragToScrollParameters};
use crate::error::{ConfigError, DragError};
use crate::registry;
use crate::slide_animation::SlideAnimation;
use grabscroll_animation::{release_velocity, Velocity};
use grabscroll_core::{FrameClock, FrameScheduler};
use grabscroll_foundation::{
    scroll_destination, DragSource, DragTracker, EventFlags, Offset, PointerEvent,
    PointerEventKind, ScrollExtent, ScrollTarget, WheelEvent,
};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Dragging,
    Sliding,
}

struct DragToScrollInner {
    id: InstanceId,
    target: Rc<dyn ScrollTarget>,
    parameters: DragToScrollParameters,
    source: RefCell<Box<dyn DragSource>>,
    slide: SlideAnimation,
    velocity: Cell<Option<Velocity>>,
    phase: Cell<InteractionPhase>,
    wheel_listening: Cell<bool>,
    destroyed: Cell<bool>,
    teardown: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl DragToScrollInner {
    fn suppress(&self, flags: &EventFlags) {
        if self.parameters.stop_propagation {
            flags.stop_propagation();
        }
        if self.parameters.prevent_default {
            flags.prevent_default();
        }
    }

    /// Applies a pointer-space delta as an instant, clamped scroll.
    fn scroll_by(&self, delta: Offset) {
        let extent = ScrollExtent::of(self.target.as_ref());
        let destination = scroll_destination(&extent, delta, self.parameters.direction);
        log::trace!(
            "drag-to-scroll {} scroll {:?} -> {:?}",
            self.id,
            extent.current,
            destination
        );
        self.target.scroll_to(destination);
    }

    fn set_wheel_listening(&self, listening: bool) {
        if self.wheel_listening.replace(listening) != listening {
            self.target.set_wheel_listener(listening);
        }
    }

    /// Leaves `Sliding`: releases the wheel listener and forgets the velocity.
    fn finish_slide(&self) {
        self.set_wheel_listening(false);
        self.velocity.set(None);
        if self.phase.get() == InteractionPhase::Sliding {
            self.phase.set(InteractionPhase::Idle);
        }
    }

    fn stop_slide_animation(&self) -> bool {
        let was_running = self.slide.cancel();
        self.finish_slide();
        was_running
    }
}

/// Drag-to-scroll behaviour attached to one scroll target.
///
/// Cheap to clone; clones share the same controller. The controller stays
/// registered (see [`crate::registry`]) until [`DragToScroll::destroy`].
#[derive(Clone)]
pub struct DragToScroll {
    inner: Rc<DragToScrollInner>,
}

impl DragToScroll {
    /// Attaches with the default [`DragTracker`].
    pub fn new(
        target: Rc<dyn ScrollTarget>,
        scheduler: Rc<dyn FrameScheduler>,
        parameters: DragToScrollParameters,
    ) -> Self {
        Self::with_source(target, scheduler, parameters, Box::new(DragTracker::new()))
    }

    /// Attaches with a custom pointer-tracking collaborator.
    pub fn with_source(
        target: Rc<dyn ScrollTarget>,
        scheduler: Rc<dyn FrameScheduler>,
        parameters: DragToScrollParameters,
        source: Box<dyn DragSource>,
    ) -> Self {
        let controller = Self {
            inner: Rc::new(DragToScrollInner {
                id: InstanceId::next(),
                target,
                parameters,
                source: RefCell::new(source),
                slide: SlideAnimation::new(FrameClock::new(scheduler)),
                velocity: Cell::new(None),
                phase: Cell::new(InteractionPhase::Idle),
                wheel_listening: Cell::new(false),
                destroyed: Cell::new(false),
                teardown: RefCell::new(Vec::new()),
            }),
        };
        registry::register(&controller);
        log::debug!(
            "drag-to-scroll {} attached: {:?}",
            controller.inner.id,
            controller.inner.parameters
        );
        controller
    }

    /// Validates `config`, merges it over the defaults and attaches.
    pub fn from_config(
        target: Rc<dyn ScrollTarget>,
        scheduler: Rc<dyn FrameScheduler>,
        config: &DragToScrollConfig,
    ) -> Result<Self, ConfigError> {
        let parameters = config.resolve()?;
        Ok(Self::new(target, scheduler, parameters))
    }

    pub fn id(&self) -> InstanceId {
        self.inner.id
    }

    pub fn parameters(&self) -> &DragToScrollParameters {
        &self.inner.parameters
    }

    pub fn target(&self) -> Rc<dyn ScrollTarget> {
        self.inner.target.clone()
    }

    pub fn phase(&self) -> InteractionPhase {
        self.inner.phase.get()
    }

    /// Release velocity driving the current slide, if any.
    pub fn velocity(&self) -> Option<Velocity> {
        self.inner.velocity.get()
    }

    pub fn is_sliding(&self) -> bool {
        self.inner.slide.is_running()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.get()
    }

    /// Routes a mouse event through the drag lifecycle.
    ///
    /// Errors only when the drag source breaks its contract during a move.
    /// Events reaching a destroyed controller are ignored.
    pub fn handle_pointer_event(&self, event: &PointerEvent) -> Result<(), DragError> {
        if self.is_destroyed() {
            return Ok(());
        }

        match event.kind {
            PointerEventKind::Down => {
                self.inner
                    .source
                    .borrow_mut()
                    .press(event.position, event.timestamp_ms);
                self.drag_start(event);
                Ok(())
            }
            PointerEventKind::Move => {
                let recorded = self
                    .inner
                    .source
                    .borrow_mut()
                    .record_move(event.position, event.timestamp_ms);
                if recorded {
                    self.drag_move(event)
                } else {
                    Ok(())
                }
            }
            PointerEventKind::Up => {
                if self.release_source(event.timestamp_ms) {
                    self.drag_end(event);
                }
                Ok(())
            }
            PointerEventKind::Cancel => {
                if self.release_source(event.timestamp_ms) {
                    log::debug!("drag-to-scroll {} drag cancelled", self.inner.id);
                    self.inner.phase.set(InteractionPhase::Idle);
                }
                Ok(())
            }
        }
    }

    /// Wheel input on the target. Cancels a running slide.
    pub fn handle_wheel(&self, _event: &WheelEvent) {
        if !self.inner.wheel_listening.get() {
            return;
        }
        if self.inner.stop_slide_animation() {
            log::debug!("drag-to-scroll {} slide cancelled by wheel", self.inner.id);
        }
    }

    /// Cancels the running slide. Safe to call at any time.
    pub fn stop_slide_animation(&self) {
        self.inner.stop_slide_animation();
    }

    /// Runs `teardown` once when the controller is destroyed. Hosts use it to
    /// detach their event listeners.
    pub fn on_destroy(&self, teardown: impl FnOnce() + 'static) {
        if self.is_destroyed() {
            teardown();
            return;
        }
        self.inner.teardown.borrow_mut().push(Box::new(teardown));
    }

    /// Stops any slide, detaches from the host and leaves the registry.
    /// Repeated calls do nothing.
    pub fn destroy(&self) {
        if self.inner.destroyed.replace(true) {
            return;
        }
        self.inner.stop_slide_animation();
        self.inner.phase.set(InteractionPhase::Idle);

        let teardown = std::mem::take(&mut *self.inner.teardown.borrow_mut());
        for hook in teardown {
            hook();
        }
        registry::unregister(self.inner.id);
        log::debug!("drag-to-scroll {} destroyed", self.inner.id);
    }

    fn release_source(&self, timestamp_ms: f64) -> bool {
        let mut source = self.inner.source.borrow_mut();
        if !source.is_pressed() {
            return false;
        }
        source.release(timestamp_ms);
        true
    }

    fn drag_start(&self, event: &PointerEvent) {
        self.inner.suppress(event.flags());
        if self.inner.stop_slide_animation() {
            log::debug!("drag-to-scroll {} slide cancelled by press", self.inner.id);
        }
        self.inner.phase.set(InteractionPhase::Dragging);
    }

    fn drag_move(&self, event: &PointerEvent) -> Result<(), DragError> {
        self.inner.suppress(event.flags());
        let data = self
            .inner
            .source
            .borrow()
            .drag_move()
            .ok_or(DragError::MissingCurrentSample)?;
        let delta = data.delta().ok_or(DragError::MissingPreviousSample)?;
        self.inner.scroll_by(delta);
        Ok(())
    }

    fn drag_end(&self, event: &PointerEvent) {
        self.inner.suppress(event.flags());
        self.inner.phase.set(InteractionPhase::Idle);

        let animation = self.inner.parameters.animation;
        if !animation.slide {
            return;
        }
        let Some(velocity) = self.capture_release_velocity() else {
            return;
        };
        self.start_slide(velocity);
    }

    fn capture_release_velocity(&self) -> Option<Velocity> {
        let data = self.inner.source.borrow().drag_move()?;
        let previous = data.previous?;
        let max_speed = self.inner.parameters.animation.timing.max_speed;
        let velocity = release_velocity(&data.current, &previous, max_speed);
        self.inner.velocity.set(velocity);
        velocity
    }

    fn start_slide(&self, velocity: Velocity) {
        log::debug!(
            "drag-to-scroll {} slide start: speed {:.3}px/ms, angle {:.3}rad",
            self.inner.id,
            velocity.speed,
            velocity.angle
        );
        self.inner.set_wheel_listening(true);
        self.inner.phase.set(InteractionPhase::Sliding);

        let on_frame_inner: Weak<DragToScrollInner> = Rc::downgrade(&self.inner);
        let on_end_inner = on_frame_inner.clone();
        self.inner.slide.start(
            velocity,
            self.inner.parameters.animation.timing,
            move |delta| {
                if let Some(inner) = on_frame_inner.upgrade() {
                    inner.scroll_by(delta);
                }
            },
            move || {
                if let Some(inner) = on_end_inner.upgrade() {
                    log::debug!("drag-to-scroll {} slide finished", inner.id);
                    inner.finish_slide();
                }
            },
        );
    }
}

impl PartialEq for DragToScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for DragToScroll {}

impl fmt::Debug for DragToScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragToScroll")
            .field("id", &self.inner.id)
            .field("phase", &self.inner.phase.get())
            .field("velocity", &self.inner.velocity.get())
            .field("destroyed", &self.inner.destroyed.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/drag_to_scroll_tests.rs"]
mod tests;
