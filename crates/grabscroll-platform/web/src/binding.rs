//! DOM wiring for drag-to-scroll controllers.
//!
//! Presses are heard on the element itself; moves and releases on the window
//! so a drag keeps tracking after the pointer leaves the element.

use crate::error::WebError;
use crate::scheduler::AnimationFrameScheduler;
use crate::target::WebScrollTarget;
use grabscroll_foundation::{EventFlags, Point, PointerEvent, PointerEventKind};
use grabscroll_ui::{registry, DragToScroll, DragToScrollConfig, InstanceId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent, Window};

/// Class looked up by [`apply`] when none is given.
pub const DEFAULT_CLASS_NAME: &str = "drag-to-scroll";

const PRIMARY_BUTTON: i16 = 0;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

thread_local! {
    static ATTACHED: RefCell<Vec<(HtmlElement, InstanceId)>> = const { RefCell::new(Vec::new()) };
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: MouseClosure,
}

impl Listener {
    fn add(
        target: EventTarget,
        event: &'static str,
        closure: MouseClosure,
    ) -> Result<Self, WebError> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    fn remove(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

fn mouse_listener(controller: &DragToScroll, kind: PointerEventKind) -> MouseClosure {
    let controller = controller.clone();
    Closure::wrap(Box::new(move |event: MouseEvent| {
        if !is_tracked_button(kind, event.button()) {
            return;
        }
        let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        let pointer = PointerEvent::new(kind, position, event.time_stamp());
        let result = controller.handle_pointer_event(&pointer);
        apply_flags(&event, pointer.flags());
        if let Err(err) = result {
            wasm_bindgen::throw_str(&err.to_string());
        }
    }) as Box<dyn FnMut(_)>)
}

/// Only primary-button presses start a drag. Moves and releases are
/// always forwarded so a drag in progress can finish.
fn is_tracked_button(kind: PointerEventKind, button: i16) -> bool {
    kind != PointerEventKind::Down || button == PRIMARY_BUTTON
}

fn apply_flags(event: &MouseEvent, flags: &EventFlags) {
    if flags.is_propagation_stopped() {
        event.stop_propagation();
    }
    if flags.is_default_prevented() {
        event.prevent_default();
    }
}

/// Attaches drag-to-scroll to `element`.
pub fn attach(element: &HtmlElement, config: &DragToScrollConfig) -> Result<DragToScroll, WebError> {
    let parameters = config.resolve()?;
    let window: Window = web_sys::window().ok_or(WebError::NoWindow)?;
    let scheduler = Rc::new(AnimationFrameScheduler::new()?);
    let target = Rc::new(WebScrollTarget::new(element.clone()));

    let controller = DragToScroll::new(target.clone(), scheduler, parameters);
    {
        let controller = controller.clone();
        target.set_wheel_handler(move |event| controller.handle_wheel(event));
    }

    let element_target: EventTarget = element.clone().into();
    let window_target: EventTarget = window.into();
    let mut listeners = Vec::with_capacity(3);
    for (event_target, event, kind) in [
        (element_target, "mousedown", PointerEventKind::Down),
        (window_target.clone(), "mousemove", PointerEventKind::Move),
        (window_target, "mouseup", PointerEventKind::Up),
    ] {
        match Listener::add(event_target, event, mouse_listener(&controller, kind)) {
            Ok(listener) => listeners.push(listener),
            Err(err) => {
                listeners.into_iter().for_each(Listener::remove);
                target.clear_wheel_handler();
                controller.destroy();
                return Err(err);
            }
        }
    }

    let id = controller.id();
    controller.on_destroy(move || {
        for listener in listeners {
            listener.remove();
        }
        target.clear_wheel_handler();
        ATTACHED.with(|attached| {
            attached
                .borrow_mut()
                .retain(|(_, attached_id)| *attached_id != id)
        });
    });
    ATTACHED.with(|attached| attached.borrow_mut().push((element.clone(), id)));

    Ok(controller)
}

/// Attaches to every element carrying `class_name`
/// ([`DEFAULT_CLASS_NAME`] when `None`).
pub fn apply(
    class_name: Option<&str>,
    config: &DragToScrollConfig,
) -> Result<Vec<DragToScroll>, WebError> {
    let class_name = class_name.unwrap_or(DEFAULT_CLASS_NAME);
    let document = web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)?;

    // The collection is live; snapshot it before attaching.
    let collection = document.get_elements_by_class_name(class_name);
    let elements: Vec<HtmlElement> = (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect();

    let controllers = elements
        .iter()
        .map(|element| attach(element, config))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "applied drag-to-scroll to {} element(s) with class '{class_name}'",
        controllers.len()
    );
    Ok(controllers)
}

/// Destroys every controller attached to `element`.
pub fn destroy(element: &HtmlElement) -> usize {
    let ids: Vec<InstanceId> = ATTACHED.with(|attached| {
        attached
            .borrow()
            .iter()
            .filter(|(attached_element, _)| attached_element == element)
            .map(|(_, id)| *id)
            .collect()
    });
    let mut destroyed = 0;
    for controller in ids.into_iter().filter_map(registry::find) {
        controller.destroy();
        destroyed += 1;
    }
    destroyed
}
