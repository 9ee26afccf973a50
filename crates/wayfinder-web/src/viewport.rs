//! Browser viewport and DOM hit-testing helpers

use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

/// `window.innerWidth` in logical pixels, `None` outside a browser
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Whether the event target is `container` or one of its descendants
pub fn event_within(event: &MouseEvent, container: &Node) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|target| container.contains(Some(&target)))
}
