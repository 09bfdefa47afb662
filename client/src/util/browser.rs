//! Window-level navigation helpers. No-ops outside the browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Target passed to `window.open` for external links.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Open `url` in a new browsing context (tab or window).
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn open_in_new_context(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, NEW_CONTEXT_TARGET) {
                log::debug!("window.open({url}) failed: {err:?}");
            }
        }
    }
}
