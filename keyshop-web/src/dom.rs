use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomRect, Element, HtmlElement, Storage, Window};

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no window or `localStorage` is disabled.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Move keyboard focus to the element with `id`, if it exists.
pub fn focus_by_id(id: &str) {
    if let Some(el) = element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let _ = el.focus();
    }
}

/// Bounding box of an element in viewport coordinates.
#[must_use]
pub fn bounding_rect(el: &Element) -> keyshop_core::Rect {
    let rect: DomRect = el.get_bounding_client_rect();
    keyshop_core::Rect {
        top: rect.top(),
        left: rect.left(),
        width: rect.width(),
        height: rect.height(),
    }
}
