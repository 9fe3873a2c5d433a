//! HTTP REST adapter
//!
//! Depends only on core/. Maps the route table onto handlers and
//! converts gateway errors into JSON responses via Axum.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath};

use crate::core::services::Services;

pub use handlers::*;

/// Gateway service as served: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Build the served gateway
///
/// `/characters/` and `/characters` reach the same route. Trimming
/// has to wrap the router from outside because routing happens
/// before any router layer runs.
pub fn app(services: Arc<Services>) -> App {
    NormalizePath::trim_trailing_slash(router(services))
}

/// Build the gateway router
///
/// Unknown paths and unsupported methods on known paths both fall
/// through to [`not_found_handler`], so the service never answers
/// 405.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route(
            "/characters",
            get(list_characters_handler)
                .post(create_character_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/comics",
            get(search_comics_handler).fallback(not_found_handler),
        )
        .route(
            "/characters/:id",
            put(update_character_handler)
                .delete(delete_character_handler)
                .fallback(not_found_handler),
        )
        .route("/", get(root_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
