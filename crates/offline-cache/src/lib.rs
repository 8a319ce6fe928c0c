//! Offline Cache Worker
//!
//! Cache-first service worker for the page's static files:
//! - install: fill a versioned cache with the asset manifest
//! - fetch: answer from the cache, fall back to the network
//! - activate: drop every cache that is not the current version
//!
//! `sw.js` registers the event listeners synchronously and forwards to the
//! exported handlers once the module is initialised.

mod manifest;
mod worker;

pub use manifest::{CacheManifest, CACHE_PREFIX, CACHE_VERSION, DEFAULT_ASSETS};
pub use worker::{on_activate, on_fetch, on_install};
