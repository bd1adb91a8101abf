// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! 0x swap quote/price relay with API-key rotation
//!
//! The upstream selects the chain through a subdomain
//! (`https://{prefix}api.0x.org`), so the chain identifier must parse to a
//! supported `ChainId` before a URL is built - an unrecognized chain is an
//! explicit error, never a malformed request. The inbound request's raw
//! query string is forwarded untouched; one key is drawn from the rotation
//! per call, success or failure alike.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use shared_types::ChainId;
use token_registry::{KeyRotator, KeyRotatorError};
use tracing::debug;

use crate::error::UpstreamError;

const API_KEY_HEADER: &str = "0x-api-key";

/// Configuration for the 0x relay client
#[derive(Debug, Clone)]
pub struct ZeroExConfig {
    /// URL scheme, `https` outside of tests
    pub scheme: String,
    /// Host the per-chain subdomain prefix is applied to
    pub host: String,
    /// Space-separated API key list
    pub api_keys: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ZeroExConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "api.0x.org".to_string(),
            api_keys: String::new(),
            timeout_seconds: 30,
        }
    }
}

/// Swap quote/price relay client
#[derive(Debug)]
pub struct ZeroExClient {
    client: Client,
    config: ZeroExConfig,
    rotator: KeyRotator,
}

impl ZeroExClient {
    /// Create a new relay client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: ZeroExConfig) -> Result<Self, UpstreamError> {
        if config.host.trim().is_empty() {
            return Err(UpstreamError::Config("host cannot be empty".to_string()));
        }

        let rotator = KeyRotator::from_separated(&config.api_keys).map_err(|e| match e {
            KeyRotatorError::NoKeys => {
                UpstreamError::Config("at least one 0x API key is required".to_string())
            }
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("chain-gateway/0.1.0")
            .build()?;

        Ok(Self {
            client,
            config,
            rotator,
        })
    }

    /// Relay a swap quote request.
    pub async fn swap_quote(
        &self,
        chain: ChainId,
        raw_query: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay(chain, "quote", raw_query).await
    }

    /// Relay a swap price request.
    pub async fn swap_price(
        &self,
        chain: ChainId,
        raw_query: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay(chain, "price", raw_query).await
    }

    /// Number of keys in the rotation, exposed for health reporting.
    pub fn key_count(&self) -> usize {
        self.rotator.len()
    }

    async fn relay(
        &self,
        chain: ChainId,
        endpoint: &str,
        raw_query: &str,
    ) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}://{}{}/swap/v1/{endpoint}?{raw_query}",
            self.config.scheme,
            chain.swap_host_prefix(),
            self.config.host,
        );

        // Key selection and cursor advance happen together, before the
        // request future is awaited
        let api_key = self.rotator.next_key();
        debug!(url, chain = %chain, "relaying swap {endpoint}");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }
        Ok(response.json().await?)
    }
}
