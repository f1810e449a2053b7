//! Web platform adapter for Grabscroll
//!
//! Binds drag-to-scroll controllers to DOM elements: the element is the
//! scroll target, `requestAnimationFrame` drives the slide and mouse
//! listeners feed the drag.

mod binding;
mod error;
mod scheduler;
mod target;

pub use binding::{apply, attach, destroy, DEFAULT_CLASS_NAME};
pub use error::WebError;
pub use scheduler::AnimationFrameScheduler;
pub use target::WebScrollTarget;

use grabscroll_ui::{registry, DragToScrollConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Routes `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already initialised");
    }
}

fn parse_config(config_json: Option<String>) -> Result<DragToScrollConfig, WebError> {
    match config_json {
        Some(json) => Ok(DragToScrollConfig::from_json(&json)?),
        None => Ok(DragToScrollConfig::default()),
    }
}

/// JavaScript entry point: attaches to `element` with an optional JSON
/// configuration. Returns the instance id.
#[wasm_bindgen(js_name = attachDragToScroll)]
pub fn attach_js(element: &HtmlElement, config_json: Option<String>) -> Result<f64, JsValue> {
    let controller = attach(element, &parse_config(config_json)?)?;
    Ok(controller.id().get() as f64)
}

/// JavaScript entry point for [`apply`]. Returns how many elements were
/// attached.
#[wasm_bindgen(js_name = applyDragToScroll)]
pub fn apply_js(class_name: Option<String>, config_json: Option<String>) -> Result<u32, JsValue> {
    let controllers = apply(class_name.as_deref(), &parse_config(config_json)?)?;
    Ok(controllers.len() as u32)
}

#[wasm_bindgen(js_name = destroyDragToScroll)]
pub fn destroy_js(element: &HtmlElement) -> u32 {
    destroy(element) as u32
}

#[wasm_bindgen(js_name = destroyAllDragToScroll)]
pub fn destroy_all_js() -> u32 {
    registry::destroy_all() as u32
}
