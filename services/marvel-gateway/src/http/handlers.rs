//! HTTP request handlers for the gateway
//!
//! Implements the root greeting, the two upstream search proxies,
//! the local character CRUD endpoints and the catch-all.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::core::error::GatewayError;
use crate::core::params::Page;
use crate::core::services::Services;
use crate::core::types::*;

/// Message of the catch-all 404
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "This route does not exist";

/// Raw query pairs, in request order
///
/// Extracted as a list so a repeated key never fails extraction;
/// [`SearchQuery::from_pairs`] keeps the first value.
pub type QueryPairs = Query<Vec<(String, String)>>;

/// Root handler
///
/// Plain-text liveness greeting.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Character list handler
///
/// `source=local` pages through the local store; any other source
/// proxies the search upstream.
///
/// # Errors
///
/// - `Upstream`: upstream unreachable or answered non-2xx
pub async fn list_characters_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): QueryPairs,
) -> Result<Response, GatewayError> {
    let query = SearchQuery::from_pairs(pairs);
    let page = Page::from_query(query.skip.as_deref(), query.limit.as_deref());

    if query.is_local() {
        let list = services.store.list(page)?;
        return Ok(Json(list).into_response());
    }

    proxy_search(&services, Resource::Characters, &query, page).await
}

/// Comic search handler
///
/// Always proxied upstream.
///
/// # Errors
///
/// - `Upstream`: upstream unreachable or answered non-2xx
pub async fn search_comics_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): QueryPairs,
) -> Result<Response, GatewayError> {
    let query = SearchQuery::from_pairs(pairs);
    let page = Page::from_query(query.skip.as_deref(), query.limit.as_deref());
    proxy_search(&services, Resource::Comics, &query, page).await
}

async fn proxy_search(
    services: &Services,
    resource: Resource,
    query: &SearchQuery,
    page: Page,
) -> Result<Response, GatewayError> {
    let name = query.name.as_deref().unwrap_or_default();
    let body = services.upstream.search(resource, name, page).await?;
    Ok(relay_json(body))
}

/// Relay an upstream body unchanged as a 200 JSON response
fn relay_json(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Create character handler
///
/// A missing, non-JSON or non-object body is treated like a body
/// without `name`.
///
/// # Errors
///
/// - `Validation`: no usable `name`
pub async fn create_character_handler(
    State(services): State<Arc<Services>>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Character>), GatewayError> {
    let character = services.store.create(payload.map(|Json(v)| v))?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// Update character handler
///
/// The id is resolved before the body is looked at; a missing,
/// non-JSON or non-object body is an empty patch.
///
/// # Errors
///
/// - `CharacterNotFound`: no local character has this id
pub async fn update_character_handler(
    State(services): State<Arc<Services>>,
    Path(id): Path<String>,
    payload: Option<Json<Value>>,
) -> Result<Json<Character>, GatewayError> {
    let character = services.store.update(&id, payload.map(|Json(v)| v))?;
    Ok(Json(character))
}

/// Delete character handler
///
/// # Errors
///
/// - `CharacterNotFound`: no local character has this id
pub async fn delete_character_handler(
    State(services): State<Arc<Services>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, GatewayError> {
    let deleted = services.store.delete(&id)?;
    Ok(Json(DeletedResponse { deleted }))
}

/// Catch-all for unknown paths and unsupported methods
pub async fn not_found_handler() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: ROUTE_NOT_FOUND_MESSAGE.to_string(),
        }),
    )
}
