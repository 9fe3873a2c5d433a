//! Configuration management for the Marvel gateway.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when
/// `GATEWAY_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "marvel-gateway.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream search API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Secret appended as `apiKey` to every upstream request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (unset = no timeout)
    #[serde(default)]
    pub timeout_sec: Option<u64>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://lereacteur-marvel-api.herokuapp.com".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_sec: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The TOML file is `GATEWAY_CONFIG` when set, otherwise
    /// `./marvel-gateway.toml` if it exists.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("GATEWAY_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Upstream configuration
        if let Ok(base_url) = env::var("UPSTREAM_BASE_URL") {
            self.upstream.base_url = base_url;
        }
        if let Ok(api_key) = env::var("API_KEY") {
            if !api_key.is_empty() {
                self.upstream.api_key = Some(api_key);
            }
        }
        if let Ok(timeout) = env::var("UPSTREAM_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.upstream.timeout_sec = Some(t);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        let base_url = self.upstream.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GatewayError::ConfigError(format!(
                "Upstream base URL must be http(s): '{base_url}'"
            )));
        }

        if self.upstream.timeout_sec == Some(0) {
            return Err(GatewayError::ConfigError(
                "Upstream timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}", self.bind_addr());
        tracing::info!("  Upstream: {}", self.upstream.base_url);
        tracing::info!(
            "  API key: {}",
            if self.upstream.api_key.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        match self.upstream.timeout_sec {
            Some(t) => tracing::info!("  Upstream timeout: {}s", t),
            None => tracing::info!("  Upstream timeout: none"),
        }
    }
}
