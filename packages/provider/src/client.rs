// ABOUTME: HTTP client for the Autobyteus catalog server
// ABOUTME: Fetches the available-models list with bounded connect/request timeouts

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use autobyteus_config::constants::{AUTOBYTEUS_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS};
use autobyteus_config::parse_env_or_default_with_validation;

use crate::error::{DiscoveryError, DiscoveryResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Autobyteus catalog server.
///
/// Connections are pooled inside the reqwest client and released when the
/// value is dropped, so holding the client in a narrow scope guarantees
/// release on every exit path.
pub struct AutobyteusClient {
    http_client: Client,
    base_url: String,
}

impl AutobyteusClient {
    /// Build a client for the given endpoint.
    ///
    /// The connect timeout defaults to 5 seconds and can be overridden with
    /// `AUTOBYTEUS_CONNECT_TIMEOUT_SECS` (accepted range 1..=120).
    pub fn new(base_url: impl Into<String>) -> DiscoveryResult<Self> {
        let connect_timeout_secs = parse_env_or_default_with_validation(
            AUTOBYTEUS_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            |secs| (1..=120).contains(&secs),
        );

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DiscoveryError::Network(e.to_string()))?;

        let base_url: String = base_url.into();

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw available-models payload.
    ///
    /// The payload is returned undecoded; shape validation happens in the
    /// discovery pipeline.
    pub async fn get_available_models(&self) -> DiscoveryResult<Value> {
        let url = format!("{}/models", self.base_url);
        debug!("Fetching available models from {}", url);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DiscoveryError::api(format!(
                "Server returned {}: {}",
                status, body
            )));
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
