// Test fixtures for integration testing

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::task::JoinHandle;

/// Key the mock upstream accepts
#[allow(dead_code)] // Used in integration tests
pub const TEST_API_KEY: &str = "test-api-key";

/// Local stand-in for the upstream search API
///
/// Serves `GET /:resource` on a random loopback port. With the right
/// `apiKey` it echoes the resource and the query it received; with a
/// missing or wrong key it answers 401 with an error payload.
#[allow(dead_code)] // Used in integration tests
pub struct MockUpstream {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    /// Bind to 127.0.0.1:0 and start serving
    #[allow(dead_code)] // Used in integration tests
    pub async fn start() -> Self {
        let app = Router::new().route("/:resource", get(search));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let addr = listener.local_addr().expect("Mock upstream has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock upstream stopped unexpectedly");
        });

        Self { addr, handle }
    }

    /// Base URL to configure the gateway with
    #[allow(dead_code)] // Used in integration tests
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn search(
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if params.get("apiKey").map(String::as_str) != Some(TEST_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API key" })),
        )
            .into_response();
    }

    Json(json!({
        "resource": resource,
        "count": 1,
        "results": [{ "_id": "5fcf91f4d8a2480017b91453", "name": "Spider-Man" }],
        "query": params,
    }))
    .into_response()
}
