//! Middleware for the gateway
//!
//! Provides request logging with duration tracking.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// Request logging middleware
///
/// Logs every request with method, URI, status code and duration:
/// INFO for 2xx/3xx, WARN for client errors (unknown routes, bad
/// bodies, missing ids) and ERROR for server errors.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %uri, status, %duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %uri, status, %duration_ms, "Request rejected");
    } else {
        info!(%method, %uri, status, %duration_ms, "Request completed");
    }

    response
}
