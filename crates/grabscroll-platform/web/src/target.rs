//! `HtmlElement` as a [`ScrollTarget`].

use grabscroll_foundation::{Point, ScrollTarget, Size, WheelEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

type WheelHandler = Rc<dyn Fn(&WheelEvent)>;
type WheelClosure = Closure<dyn FnMut(web_sys::WheelEvent)>;

/// Scrollable DOM element. The wheel listener is only attached while a
/// handler wants wheel input, i.e. while a slide is running.
pub struct WebScrollTarget {
    element: HtmlElement,
    wheel_handler: RefCell<Option<WheelHandler>>,
    wheel_listener: RefCell<Option<WheelClosure>>,
    /// Last removed listener; it may be the one currently dispatching.
    retired_listener: RefCell<Option<WheelClosure>>,
}

impl WebScrollTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            wheel_handler: RefCell::new(None),
            wheel_listener: RefCell::new(None),
            retired_listener: RefCell::new(None),
        }
    }

    pub fn set_wheel_handler(&self, handler: impl Fn(&WheelEvent) + 'static) {
        *self.wheel_handler.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn clear_wheel_handler(&self) {
        self.wheel_handler.borrow_mut().take();
    }

    fn add_wheel_listener(&self) {
        let Some(handler) = self.wheel_handler.borrow().clone() else {
            return;
        };
        self.retired_listener.borrow_mut().take();

        let closure = Closure::wrap(Box::new(move |event: web_sys::WheelEvent| {
            handler(&WheelEvent::new(event.time_stamp()));
        }) as Box<dyn FnMut(_)>);
        match self
            .element
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
        {
            Ok(()) => *self.wheel_listener.borrow_mut() = Some(closure),
            Err(err) => log::warn!("failed to add wheel listener: {err:?}"),
        }
    }

    /// Reads a scroll offset property as the `double` the DOM keeps.
    ///
    /// `Element::scroll_left` and `scroll_top` truncate to whole pixels,
    /// which loses the sub-pixel part of every slide frame.
    fn scroll_offset(&self, property: &str, whole_pixels: i32) -> f64 {
        let value = js_sys::Reflect::get(&self.element, &JsValue::from_str(property))
            .ok()
            .and_then(|value| value.as_f64());
        offset_or_whole_pixels(value, whole_pixels)
    }

    fn remove_wheel_listener(&self) {
        let Some(closure) = self.wheel_listener.borrow_mut().take() else {
            return;
        };
        if let Err(err) = self
            .element
            .remove_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove wheel listener: {err:?}");
        }
        *self.retired_listener.borrow_mut() = Some(closure);
    }
}

impl ScrollTarget for WebScrollTarget {
    fn scroll_position(&self) -> Point {
        Point::new(
            self.scroll_offset("scrollLeft", self.element.scroll_left()),
            self.scroll_offset("scrollTop", self.element.scroll_top()),
        )
    }

    fn scroll_size(&self) -> Size {
        Size::new(
            f64::from(self.element.scroll_width()),
            f64::from(self.element.scroll_height()),
        )
    }

    fn client_size(&self) -> Size {
        Size::new(
            f64::from(self.element.client_width()),
            f64::from(self.element.client_height()),
        )
    }

    fn scroll_to(&self, position: Point) {
        self.element.scroll_to_with_x_and_y(position.x, position.y);
    }

    fn set_wheel_listener(&self, listening: bool) {
        if listening {
            self.remove_wheel_listener();
            self.add_wheel_listener();
        } else {
            self.remove_wheel_listener();
        }
    }
}

fn offset_or_whole_pixels(value: Option<f64>, whole_pixels: i32) -> f64 {
    match value {
        Some(offset) if offset.is_finite() => offset,
        _ => f64::from(whole_pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_offset_is_kept() {
        assert_eq!(offset_or_whole_pixels(Some(268.75), 268), 268.75);
    }

    #[test]
    fn missing_or_non_finite_offset_falls_back_to_whole_pixels() {
        assert_eq!(offset_or_whole_pixels(None, 42), 42.0);
        assert_eq!(offset_or_whole_pixels(Some(f64::NAN), 7), 7.0);
    }
}
