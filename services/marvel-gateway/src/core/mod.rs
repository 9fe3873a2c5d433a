//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the HTTP
//! transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **params**: Lenient skip/limit parsing
//! - **types**: Domain data structures
//! - **store**: In-memory local character store
//! - **upstream**: Client for the upstream search API
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod params;
pub mod services;
pub mod store;
pub mod types;
pub mod upstream;

// Re-export key types for convenience
pub use config::Config;
pub use error::{GatewayError, Result};
pub use services::Services;
