//! Backend location resolution.
//!
//! The server injects the analysis backend base URL into the page shell as
//! `<meta name="poseguard-api-base">`; the hydrated client reads it back here
//! and derives HTTP, WebSocket, and media URLs from it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when nothing is configured (local development).
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Name of the meta tag carrying the backend base URL.
pub const API_BASE_META: &str = "poseguard-api-base";

/// Resolved backend base URL, provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build from a base URL; trailing slashes are dropped and a blank value
    /// falls back to [`DEFAULT_API_BASE`].
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute HTTP URL for a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute WebSocket URL for a backend path (`http` -> `ws`, `https` -> `wss`).
    pub fn ws_endpoint(&self, path: &str) -> String {
        let http = self.endpoint(path);
        if let Some(rest) = http.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = http.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            http
        }
    }

    /// Resolve a media reference from the backend, which may be absolute or
    /// relative to the backend root (e.g. `/outputs/ab12.mp4`).
    pub fn asset_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_owned()
        } else {
            self.endpoint(reference)
        }
    }

    /// Read the server-injected meta tag from the current document.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let element = document
            .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
            .ok()
            .flatten()?;
        let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(Self::new(&meta.content()))
    }

    /// Configuration for the current environment: the meta tag in the browser,
    /// the default elsewhere.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_document().unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
