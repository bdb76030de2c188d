// Console helpers for the browser build

use wasm_bindgen::JsValue;

/// Writes straight to the browser console, bypassing the `log` filter.
pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Milliseconds rendered for the event readout, e.g. `1.25s` or `340ms`.
pub fn format_millis(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        format!("{}ms", ms.max(0.0).round() as u64)
    }
}
