//! Service Worker Handlers
//!
//! Each handler returns a promise to JS; errors surface as rejections.

use js_sys::Array;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, CacheStorage, Request, ServiceWorkerGlobalScope};

use crate::manifest::CacheManifest;

#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_logger::init(LevelFilter::Info);
}

fn scope() -> Result<ServiceWorkerGlobalScope, JsValue> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| JsValue::from_str("not running in a service worker"))
}

fn caches() -> Result<CacheStorage, JsValue> {
    scope()?.caches()
}

/// Open the current cache and add every manifest asset
#[wasm_bindgen]
pub async fn on_install() -> Result<JsValue, JsValue> {
    let manifest = CacheManifest::default();
    let name = manifest.cache_name();

    let cache: Cache = JsFuture::from(caches()?.open(&name)).await?.dyn_into()?;
    log::info!("[SW] Cache {} opened", name);

    let assets: Array = manifest.assets.iter().map(|a| JsValue::from_str(a)).collect();
    JsFuture::from(cache.add_all_with_str_sequence(&assets)).await?;
    log::info!("[SW] Cached {} assets", manifest.assets.len());
    Ok(JsValue::UNDEFINED)
}

/// Serve from any cache, otherwise go to the network
#[wasm_bindgen]
pub async fn on_fetch(request: Request) -> Result<JsValue, JsValue> {
    let cached = JsFuture::from(caches()?.match_with_request(&request)).await?;
    if !cached.is_undefined() {
        return Ok(cached);
    }
    log::debug!("[SW] Cache miss, fetching {}", request.url());
    JsFuture::from(scope()?.fetch_with_request(&request)).await
}

/// Delete caches left behind by previous versions
#[wasm_bindgen]
pub async fn on_activate() -> Result<JsValue, JsValue> {
    let manifest = CacheManifest::default();
    let storage = caches()?;

    let keys: Array = JsFuture::from(storage.keys()).await?.dyn_into()?;
    let existing: Vec<String> = keys.iter().filter_map(|k| k.as_string()).collect();

    for name in manifest.stale_caches(&existing) {
        JsFuture::from(storage.delete(name)).await?;
        log::info!("[SW] Deleted stale cache {}", name);
    }
    Ok(JsValue::UNDEFINED)
}
