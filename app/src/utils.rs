//! Small JS interop helpers.

use wasm_bindgen::JsValue;

/// Set a property on a JS object, ignoring failures.
pub fn js_set(target: &JsValue, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}
