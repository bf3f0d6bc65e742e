// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use codepulse::application::services::ApplicationServices;
use codepulse::domain::category::{CategoryReadRepository, CategoryWriteRepository};
use codepulse::infrastructure::repositories::InMemoryCategoryRepository;
use codepulse::config::RateLimitSettings;
use codepulse::presentation::http::{
    routes::{RouterOptions, build_router, build_router_with_options},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub fn build_test_state_with(
    write_repo: Arc<dyn CategoryWriteRepository>,
    read_repo: Arc<dyn CategoryReadRepository>,
    unique_url_handles: bool,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        unique_url_handles,
    ));
    HttpState { services }
}

pub fn build_test_state(unique_url_handles: bool) -> HttpState {
    let repo = Arc::new(InMemoryCategoryRepository::new());
    build_test_state_with(repo.clone(), repo, unique_url_handles)
}

/// Router over a fresh in-memory store with duplicate url handles allowed.
pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(false))
}

pub fn make_test_router_with(state: HttpState) -> axum::Router {
    build_router(state)
}

/// Router over a fresh in-memory store behind the per-IP rate limiter.
pub fn make_rate_limited_router(settings: RateLimitSettings) -> axum::Router {
    let options = RouterOptions {
        rate_limit: Some(settings),
        ..RouterOptions::default()
    };
    build_router_with_options(build_test_state(false), &options)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn post_with_content_type(
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.into()))
        .unwrap()
}

/// GET as seen behind a proxy that reports the client address.
pub fn get_from(uri: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Split a response into its status and JSON body.
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
