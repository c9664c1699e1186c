use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::COOKIE;
use axum::routing::post;

use super::*;
use crate::config::ServerConfig;

fn state_for(backend_url: &str) -> AppState {
    let config = ServerConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        proxy_timeout: Duration::from_secs(5),
    };
    AppState::new(&config).unwrap()
}

/// Fake backend: the login endpoint echoes what it received as a 400 body.
async fn spawn_backend() -> String {
    let app = Router::new().route(
        "/api/accounts/login/",
        post(|uri: Uri, headers: HeaderMap, body: String| async move {
            let echo = serde_json::json!({
                "query": uri.query(),
                "authorization": headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
                "cookie": headers.get(COOKIE).and_then(|v| v.to_str().ok()),
                "body": body,
            });
            (StatusCode::BAD_REQUEST, Json(echo))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/products/?page=2&q=tea".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend:8000", &uri),
        "http://backend:8000/api/products/?page=2&q=tea"
    );
}

#[test]
fn forwarded_headers_keeps_only_allow_listed() {
    let mut incoming = HeaderMap::new();
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert("connection", HeaderValue::from_static("keep-alive"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(COOKIE).is_none());
}

#[test]
fn proxy_error_renders_bad_gateway() {
    let response = ProxyError::Unreachable("refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_relays_status_body_and_allowed_headers() {
    let backend = spawn_backend().await;
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    headers.insert(COOKIE, HeaderValue::from_static("sid=1"));

    let response = forward(
        State(state_for(&backend)),
        Method::POST,
        "/api/accounts/login/?next=home".parse().unwrap(),
        headers,
        Bytes::from_static(br#"{"email":"a@b.c"}"#),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let echo: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(echo["query"], "next=home");
    assert_eq!(echo["authorization"], "Bearer tok");
    assert!(echo["cookie"].is_null());
    assert_eq!(echo["body"], r#"{"email":"a@b.c"}"#);
}

#[tokio::test]
async fn forward_maps_unreachable_backend_to_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = forward(
        State(state_for(&format!("http://{addr}"))),
        Method::GET,
        "/api/products/".parse().unwrap(),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ProxyError::Unreachable(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}
