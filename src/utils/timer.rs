//! Delay helper backed by the host timer.

/// Resolve after `ms` milliseconds.
///
/// On wasm32 this wraps the global `setTimeout`, so it also works inside
/// web workers; dropping the future does not clear the timer. Elsewhere it
/// uses tokio's timer and must run inside a tokio runtime.
pub async fn sleep(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        browser_delay(ms).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

#[cfg(target_arch = "wasm32")]
mod global {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// `setTimeout` on whatever global scope is running: a window, a
        /// worker or Node.
        #[wasm_bindgen(js_name = setTimeout)]
        pub fn set_timeout(handler: &js_sys::Function, timeout: i32) -> JsValue;
    }
}

/// Delay helper using setTimeout.
#[cfg(target_arch = "wasm32")]
async fn browser_delay(ms: u32) {
    use crate::config::MAX_TIMEOUT_MS;

    let timeout = ms.min(MAX_TIMEOUT_MS) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        global::set_timeout(&resolve, timeout);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
