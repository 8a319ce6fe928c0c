//! Asset Manifest
//!
//! Which files get cached, and under which versioned cache name.

/// Cache names are `<prefix><version>`
pub const CACHE_PREFIX: &str = "shopping-list-pwa-cache-v";

/// Bump whenever the asset list or the build output changes
pub const CACHE_VERSION: u32 = 1;

/// Static files needed to run the page offline
pub const DEFAULT_ASSETS: &[&str] = &[
    ".",
    "index.html",
    "style.css",
    "manifest.json",
    "sw.js",
    "shopping-list-ui.js",
    "shopping-list-ui_bg.wasm",
    "offline-cache/offline_cache.js",
    "offline-cache/offline_cache_bg.wasm",
    "icon-192x192.png",
    "icon-512x512.png",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheManifest {
    pub version: u32,
    pub assets: Vec<String>,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self::new(CACHE_VERSION, DEFAULT_ASSETS.iter().map(|a| a.to_string()).collect())
    }
}

impl CacheManifest {
    pub fn new(version: u32, assets: Vec<String>) -> Self {
        Self { version, assets }
    }

    pub fn cache_name(&self) -> String {
        format!("{}{}", CACHE_PREFIX, self.version)
    }

    /// Caches to delete on activation: everything but the current one
    pub fn stale_caches<'a>(&self, existing: &'a [String]) -> Vec<&'a str> {
        let current = self.cache_name();
        existing
            .iter()
            .map(String::as_str)
            .filter(|name| *name != current)
            .collect()
    }
}
