//! System clipboard access.
//!
//! The async Clipboard API is treated as an optional capability: it is
//! missing outside secure contexts and the write may be rejected by the
//! permission layer. Both cases surface as `Err` for the caller to absorb.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description of the failure when the Clipboard API is absent,
/// the write promise rejects, or this runs outside the browser.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let navigator = window.navigator();
        let handle = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("clipboard"))
            .map_err(|e| format!("clipboard lookup failed: {e:?}"))?;
        if handle.is_undefined() || handle.is_null() {
            return Err("clipboard API unavailable".to_owned());
        }
        let clipboard: web_sys::Clipboard = handle.unchecked_into();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write rejected: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("clipboard is only available in the browser".to_owned())
    }
}
