//! REST helpers for the backend account endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpBackend`] reports
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all surface as
//! [`ApiError`]. The session store turns those into user-facing messages; the
//! payload helpers here know the backend's error shapes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Prefix under which the server forwards backend calls.
pub const API_BASE: &str = "/api/";
pub const LOGIN_ENDPOINT: &str = "accounts/login/";
pub const ADMIN_LOGIN_ENDPOINT: &str = "accounts/admin/login/";
pub const REGISTER_ENDPOINT: &str = "accounts/register/";

/// Error raised by a backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response; `body` is the parsed JSON payload or `null`.
    #[error("request failed: {status}")]
    Status { status: u16, body: serde_json::Value },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Which login endpoint to use. Both share one request/response contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginScope {
    Customer,
    Admin,
}

impl LoginScope {
    pub fn from_admin_flag(as_admin: bool) -> Self {
        if as_admin { Self::Admin } else { Self::Customer }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Customer => LOGIN_ENDPOINT,
            Self::Admin => ADMIN_LOGIN_ENDPOINT,
        }
    }
}

/// Backend account operations consumed by the session store.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange credentials for tokens and a user snapshot.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, rejection, or a malformed body.
    async fn login(&self, scope: LoginScope, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Create an account. Does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, rejection, or a malformed body.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}

/// [`AuthBackend`] over same-origin HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpBackend {
    async fn login(&self, scope: LoginScope, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        post_json(scope.endpoint(), request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        post_json(REGISTER_ENDPOINT, request).await
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(endpoint: &str) -> String {
    format!("{API_BASE}{}", endpoint.trim_start_matches('/'))
}

async fn post_json<T, R>(endpoint: &str, payload: &T) -> Result<R, ApiError>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&api_url(endpoint))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(ApiError::Status { status: resp.status(), body });
        }
        resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload);
        Err(ApiError::Unavailable)
    }
}

/// First entry of `non_field_errors` in a backend error payload.
pub fn first_non_field_error(body: &serde_json::Value) -> Option<String> {
    body.get("non_field_errors")?
        .as_array()?
        .first()?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Flatten a backend error payload into one message per invalid field entry.
///
/// Objects yield each string (or each string in each list) in key order;
/// a top-level list yields each entry; a bare string yields itself. Anything
/// else yields nothing.
pub fn field_error_messages(body: &serde_json::Value) -> Vec<String> {
    fn collect(value: &serde_json::Value, out: &mut Vec<String>) {
        match value {
            serde_json::Value::String(msg) => out.push(msg.clone()),
            serde_json::Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
            serde_json::Value::Null => {}
            other => out.push(other.to_string()),
        }
    }

    let mut out = Vec::new();
    match body {
        serde_json::Value::Object(fields) => fields.values().for_each(|v| collect(v, &mut out)),
        serde_json::Value::Array(items) => items.iter().for_each(|item| collect(item, &mut out)),
        serde_json::Value::String(msg) => out.push(msg.clone()),
        _ => {}
    }
    out
}
