//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location as `pathname + search + hash`.
///
/// Falls back to `/` when the location cannot be read.
pub fn current_url() -> String {
    let Some(location) = window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    if pathname.is_empty() {
        format!("/{search}{hash}")
    } else {
        format!("{pathname}{search}{hash}")
    }
}

/// Push a new history entry for `url`.
pub fn push_state(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url))
    {
        log::warn!("pushState to '{url}' failed: {e:?}");
    }
}

/// Replace the current history entry with `url`.
///
/// Used for redirects that shouldn't appear in back button history.
pub fn replace_state(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    {
        log::warn!("replaceState to '{url}' failed: {e:?}");
    }
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
