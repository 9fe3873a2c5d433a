//! Error types and error handling for the Marvel gateway.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the `http` adapter.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Message returned when a create request lacks a usable `name`
pub const MISSING_NAME_MESSAGE: &str = "Le body doit contenir au moins { name }";

/// Message returned when an id is not present in the local store
pub const CHARACTER_NOT_FOUND_MESSAGE: &str = "Character not found in local store";

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// No local character carries the requested id
    #[error("Character not found in local store")]
    CharacterNotFound(String),

    /// The upstream API could not be reached or answered non-2xx
    #[error("{0}")]
    Upstream(String),

    /// Unexpected failure while handling a request
    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

impl GatewayError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::CharacterNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }

    /// Shorthand for the create-time validation failure
    pub fn missing_name() -> Self {
        GatewayError::Validation(MISSING_NAME_MESSAGE.to_string())
    }
}
