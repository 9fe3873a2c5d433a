//! Unified service container for the gateway
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::store::CharacterStore;
use crate::core::upstream::UpstreamClient;
use std::sync::Arc;

/// Unified services container
///
/// Owned by the router for the lifetime of the process and handed to
/// every handler through axum state.
#[derive(Clone)]
pub struct Services {
    /// In-memory store for local characters
    pub store: Arc<CharacterStore>,

    /// Client for the upstream search API
    pub upstream: Arc<UpstreamClient>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// The local store always starts empty.
    pub fn new(config: Config) -> Result<Self> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);

        Ok(Self {
            store: Arc::new(CharacterStore::new()),
            upstream,
            config: Arc::new(config),
        })
    }
}
