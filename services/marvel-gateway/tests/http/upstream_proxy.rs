//! Integration tests for the upstream search proxy
//!
//! Uses a local mock upstream for the success path and an
//! unreachable address for transport failures.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{create_test_app, create_test_app_with_upstream, send, send_json};
use crate::common::{MockUpstream, TEST_API_KEY};

#[tokio::test]
async fn test_characters_forwarded_with_defaults() {
    let upstream = MockUpstream::start().await;
    let (app, _) = create_test_app_with_upstream(&upstream.base_url(), Some(TEST_API_KEY));

    let (status, body) = send(&app, "GET", "/characters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resource"], "characters");
    assert_eq!(
        body["query"],
        json!({"apiKey": TEST_API_KEY, "name": "", "skip": "0", "limit": "100"})
    );
    // Upstream payload relayed untouched
    assert_eq!(body["results"][0]["name"], "Spider-Man");
}

#[tokio::test]
async fn test_comics_forwarded_with_params() {
    let upstream = MockUpstream::start().await;
    let (app, _) = create_test_app_with_upstream(&upstream.base_url(), Some(TEST_API_KEY));

    let (status, body) = send(&app, "GET", "/comics?name=spider&skip=20&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resource"], "comics");
    assert_eq!(body["query"]["name"], "spider");
    assert_eq!(body["query"]["skip"], "20");
    assert_eq!(body["query"]["limit"], "10");
}

#[tokio::test]
async fn test_external_source_uses_upstream() {
    let upstream = MockUpstream::start().await;
    let (app, _) = create_test_app_with_upstream(&upstream.base_url(), Some(TEST_API_KEY));

    let (status, body) = send(&app, "GET", "/characters?source=external&limit=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resource"], "characters");
    assert_eq!(body["query"]["limit"], "100");
}

#[tokio::test]
async fn test_upstream_error_status_becomes_500() {
    let upstream = MockUpstream::start().await;
    let (app, _) = create_test_app_with_upstream(&upstream.base_url(), Some("wrong-key"));

    let (status, body) = send(&app, "GET", "/comics").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Request failed with status code 401"}));
}

#[tokio::test]
async fn test_unreachable_upstream_leaves_store_untouched() {
    let (app, services) =
        create_test_app_with_upstream(crate::common::UNREACHABLE_UPSTREAM, None);
    send_json(&app, "POST", "/characters", &json!({"name": "Thor"})).await;

    let (status, body) = send(&app, "GET", "/characters?name=thor").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
    assert_eq!(services.store.len().unwrap(), 1);
}

#[tokio::test]
async fn test_local_source_never_calls_upstream() {
    // Upstream unreachable, yet the local listing succeeds
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/characters?source=local").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}
