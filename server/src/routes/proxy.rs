//! Backend API proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/api/...` on this origin; this handler forwards each
//! call to the same path on `BACKEND_URL` and relays the status and body.
//! Only the headers the account and shop endpoints need are forwarded, so
//! cookies and hop-by-hop headers never reach the backend.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, AUTHORIZATION, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Backend URL for an incoming request URI, query included.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Subset of `incoming` that is forwarded upstream.
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: relay the request to the backend.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) if the backend cannot be reached
/// or its body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    tracing::debug!(%method, %url, "proxying api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            ProxyError::Unreachable(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend returned server error");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
