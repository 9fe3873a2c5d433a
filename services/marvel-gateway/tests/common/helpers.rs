// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use marvel_gateway::core::config::Config;
use marvel_gateway::core::services::Services;
use marvel_gateway::http::{self, App};
use serde_json::Value;
use tower::ServiceExt as TowerServiceExt;

/// Loopback port that refuses connections
#[allow(dead_code)] // Used in integration tests
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:1";

/// Create a test application whose upstream is unreachable
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app() -> App {
    create_test_app_with_upstream(UNREACHABLE_UPSTREAM, None).0
}

/// Create a test application pointed at `base_url`
///
/// Also returns the services so tests can inspect the store
/// directly.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app_with_upstream(
    base_url: &str,
    api_key: Option<&str>,
) -> (App, Arc<Services>) {
    let mut config = Config::default();
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_key = api_key.map(str::to_string);
    config.upstream.timeout_sec = Some(5);

    let services = Arc::new(Services::new(config).expect("Failed to build services"));
    (http::app(Arc::clone(&services)), services)
}

/// Send a request without body
#[allow(dead_code)] // Used in integration tests
pub async fn send(app: &App, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    dispatch(app, request).await
}

/// Send a request with a JSON body
#[allow(dead_code)] // Used in integration tests
pub async fn send_json(app: &App, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

/// Read a response body as JSON (`Value::Null` when empty)
#[allow(dead_code)] // Used in integration tests
pub async fn body_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, 1_000_000).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
