//! Client for the upstream character/comic search API
//!
//! Requests are plain GETs carrying `apiKey`, `name`, `skip` and
//! `limit` as query parameters. Successful bodies are returned as
//! raw bytes so the caller can relay them without imposing a schema.
//! There is no retry.

use std::time::Duration;

use axum::body::Bytes;

use crate::core::config::UpstreamConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::params::Page;
use crate::core::types::Resource;

/// Pooled HTTP client bound to one upstream base URL
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// - `ConfigError`: the underlying HTTP client could not be built
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout_sec {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL of an upstream resource
    pub fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// Query parameters sent upstream, `apiKey` first when configured
    fn query_params(&self, name: &str, page: Page) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(key) = &self.api_key {
            params.push(("apiKey", key.clone()));
        }
        params.push(("name", name.to_string()));
        params.push(("skip", page.skip.to_string()));
        params.push(("limit", page.limit.to_string()));
        params
    }

    /// Run a search against `resource` and return the raw body
    ///
    /// # Errors
    ///
    /// - `Upstream`: transport failure (DNS, connect, timeout) or a
    ///   non-2xx answer; the upstream payload is logged when present
    pub async fn search(&self, resource: Resource, name: &str, page: Page) -> Result<Bytes> {
        let url = self.resource_url(resource);

        tracing::debug!(
            resource = resource.path(),
            name = %name,
            skip = page.skip,
            limit = page.limit,
            "Forwarding search upstream"
        );

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(name, page))
            .send()
            .await
            .map_err(|e| {
                // Strip the URL so the API key never reaches logs or clients
                let e = e.without_url();
                tracing::error!(url = %url, error = %e, "Upstream request failed");
                GatewayError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            let message = format!("Request failed with status code {}", status.as_u16());
            if payload.trim().is_empty() {
                tracing::error!(url = %url, status = status.as_u16(), "{}", message);
            } else {
                tracing::error!(
                    url = %url,
                    status = status.as_u16(),
                    payload = %payload,
                    "Upstream returned an error"
                );
            }
            return Err(GatewayError::Upstream(message));
        }

        response.bytes().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(url = %url, error = %e, "Failed to read upstream body");
            GatewayError::from(e)
        })
    }
}
