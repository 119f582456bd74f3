//! DOM and Web API access.
//!
//! Every accessor returns `None` outside a browser so callers can fall back to
//! empty values instead of panicking on native targets.

use web_sys::{Document, HtmlHeadElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get `document.head`.
#[inline]
pub fn head() -> Option<HtmlHeadElement> {
    document()?.head()
}

/// Read `location.search` and `location.hash`.
pub fn location_parts() -> Option<(String, String)> {
    let location = window()?.location();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    Some((search, hash))
}

/// Read `navigator.userAgent`.
pub fn user_agent() -> Option<String> {
    window()?.navigator().user_agent().ok()
}
