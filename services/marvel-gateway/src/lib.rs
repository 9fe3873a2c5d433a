//! Marvel Gateway - character/comic search proxy with a local store
//!
//! A small HTTP service that forwards character and comic searches
//! to an upstream API (adding the API key and pagination), and keeps
//! an independent, non-persistent store of locally created
//! characters under the same `/characters` namespace.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, params, types
//!   - store (in-memory character CRUD)
//!   - upstream (search API client)
//!   - services (unified service container)
//!
//! - **http**: REST adapter (depends on core)
//!   - router, handlers, middleware, error mapping
//!
//! # Routes
//!
//! | Method | Path | Handled by |
//! |---|---|---|
//! | GET | `/characters` | upstream, or local store with `source=local` |
//! | GET | `/comics` | upstream |
//! | POST | `/characters` | local store |
//! | PUT | `/characters/:id` | local store |
//! | DELETE | `/characters/:id` | local store |
//! | GET | `/` | greeting |
//! | any | anything else | 404 |

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{GatewayError, Result};
pub use crate::core::services::Services;
pub use crate::core::store::CharacterStore;
pub use crate::core::types::*;
