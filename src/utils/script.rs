//! Dynamic `<script>` loading.
//!
//! Each call appends a fresh `async` script element. There is no timeout,
//! retry, or de-duplication of repeated URLs.

use std::future::Future;

use js_sys::{Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

use crate::core::error::ScriptLoadError;
use crate::utils::dom;

/// Something that can fetch and execute a script by URL.
pub trait ScriptHost {
    /// Start loading `src` and resolve once it has loaded or failed.
    fn inject_script(&self, src: &str) -> impl Future<Output = Result<(), ScriptLoadError>>;
}

/// The page's `document`, used by [`load_api`].
///
/// Fails with [`ScriptLoadError::NoDocument`] outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl ScriptHost for BrowserDocument {
    async fn inject_script(&self, src: &str) -> Result<(), ScriptLoadError> {
        let document = dom::document().ok_or(ScriptLoadError::NoDocument)?;
        let head = dom::head().ok_or(ScriptLoadError::NoDocument)?;

        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(|e| ScriptLoadError::ElementCreation(describe_js(&e)))?
            .dyn_into()
            .map_err(|_| ScriptLoadError::ElementCreation("not a script element".to_string()))?;
        script.set_src(src);
        script.set_async(true);

        let settled = Promise::new(&mut |resolve, reject| {
            let onload = Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let onerror = Closure::once_into_js(move |event: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &event);
            });
            script.set_onload(Some(onload.unchecked_ref()));
            script.set_onerror(Some(onerror.unchecked_ref()));
        });

        head.append_child(&script)
            .map_err(|e| ScriptLoadError::Append(describe_js(&e)))?;

        JsFuture::from(settled)
            .await
            .map(|_| ())
            .map_err(|event| ScriptLoadError::LoadFailed {
                src: src.to_string(),
                reason: describe_js(&event),
            })
    }
}

/// Best-effort text for a thrown value or error event.
fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &"type".into())
                .ok()
                .and_then(|kind| kind.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Load `src` into the current page.
pub async fn load_api(src: &str) -> Result<(), ScriptLoadError> {
    load_api_with(&BrowserDocument, src).await
}

/// Load `src` through `host`.
pub async fn load_api_with<H: ScriptHost>(host: &H, src: &str) -> Result<(), ScriptLoadError> {
    tracing::debug!(src, "loading script");
    let result = host.inject_script(src).await;
    match &result {
        Ok(()) => tracing::debug!(src, "script loaded"),
        Err(err) => tracing::warn!(src, error = %err, "script failed to load"),
    }
    result
}
