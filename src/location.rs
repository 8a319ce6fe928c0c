//! Browser Glue
//!
//! URL fragment access, blocking notices and offline worker registration.

use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::SERVICE_WORKER_PATH;

/// Current `location.hash`, including the leading `#`
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Assign `location.hash`; an empty string clears it
pub fn write_hash(hash: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(hash) {
        log::error!("[APP] Failed to update URL hash: {:?}", e);
    }
}

pub fn clear_hash() {
    write_hash("");
}

/// Show a blocking notice
pub fn show_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Register the offline cache worker when the browser supports it
pub fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        log::info!("[SW] Service workers unavailable, running without offline cache");
        return;
    }

    let promise = navigator.service_worker().register(SERVICE_WORKER_PATH);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[SW] Registered {}", SERVICE_WORKER_PATH),
            Err(e) => log::warn!("[SW] Registration failed: {:?}", e),
        }
    });
}
