use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

/// Build the REST router as the application mounts it.
pub fn test_app() -> Router {
    server::rest::api_router(None)
}

/// Build the REST router with the contact route limited to
/// `max_requests` per minute, as the application mounts it when the
/// `rate_limit` flag is on.
pub fn test_app_rate_limited(max_requests: u32) -> Router {
    let limiter = server::rate_limit::RateLimitState::new(max_requests, Duration::from_secs(60));
    server::rest::api_router(Some(limiter))
}

/// POST a JSON body to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// POST a JSON body to a route with a client address header.
pub async fn post_json_from(
    app: &Router,
    uri: &str,
    body: &str,
    forwarded_for: &str,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", forwarded_for)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route with a client address header.
pub async fn get_from(app: &Router, uri: &str, forwarded_for: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-for", forwarded_for)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// A fully filled, valid submission body, built from the shared DTO so the
/// tests stay aligned with the wire field names.
pub fn valid_submission() -> serde_json::Value {
    serde_json::to_value(shared_types::ContactRequest {
        name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        subject: "Orçamento".to_string(),
        message: "Gostaria de um orçamento para o projeto.".to_string(),
    })
    .unwrap()
}
