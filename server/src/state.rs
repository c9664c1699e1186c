//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the backend proxy; cloning is cheap.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
