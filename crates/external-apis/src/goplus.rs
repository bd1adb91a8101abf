// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! GoPlus security-scan relay
//!
//! Every operation forwards a handful of validated fields to a fixed
//! endpoint of the GoPlus Security API and returns the upstream JSON body
//! verbatim. The scanner supports far more chains than the swap path, so
//! `chain_id` is relayed as an opaque string rather than parsed against the
//! gateway's chain set.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::UpstreamError;

/// Configuration for the GoPlus relay client
#[derive(Debug, Clone)]
pub struct GoPlusConfig {
    /// Base URL of the security API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for GoPlusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gopluslabs.io/api/v1".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// GoPlus Security API relay client
#[derive(Debug)]
pub struct GoPlusClient {
    client: Client,
    config: GoPlusConfig,
}

impl GoPlusClient {
    /// Create a new relay client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: GoPlusConfig) -> Result<Self, UpstreamError> {
        if config.base_url.trim().is_empty() {
            return Err(UpstreamError::Config("base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("chain-gateway/0.1.0")
            .build()?;

        Ok(Self { client, config })
    }

    /// Token contract security scan for one or more addresses.
    pub async fn token_security(
        &self,
        chain_id: &str,
        contract_addresses: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay_get(
            &format!("token_security/{chain_id}"),
            &[("contract_addresses", contract_addresses)],
        )
        .await
    }

    /// Malicious-address scan.
    pub async fn address_security(
        &self,
        address: &str,
        chain_id: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay_get(
            &format!("address_security/{address}"),
            &[("chain_id", chain_id)],
        )
        .await
    }

    /// Approval-contract security scan.
    pub async fn approval_security(
        &self,
        chain_id: &str,
        contract_addresses: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay_get(
            &format!("approval_security/{chain_id}"),
            &[("contract_addresses", contract_addresses)],
        )
        .await
    }

    /// NFT contract security scan.
    pub async fn nft_security(
        &self,
        chain_id: &str,
        contract_addresses: &str,
        token_id: Option<&str>,
    ) -> Result<Value, UpstreamError> {
        let mut query = vec![("contract_addresses", contract_addresses)];
        if let Some(token_id) = token_id {
            query.push(("token_id", token_id));
        }
        self.relay_get(&format!("nft_security/{chain_id}"), &query).await
    }

    /// dApp security scan by URL.
    pub async fn dapp_security(&self, url: &str) -> Result<Value, UpstreamError> {
        self.relay_get("dapp_security", &[("url", url)]).await
    }

    /// Phishing-site check by URL.
    pub async fn phishing_site(&self, url: &str) -> Result<Value, UpstreamError> {
        self.relay_get("phishing_site", &[("url", url)]).await
    }

    /// Rug-pull risk detection.
    pub async fn rugpull_detecting(
        &self,
        chain_id: &str,
        contract_addresses: &str,
    ) -> Result<Value, UpstreamError> {
        self.relay_get(
            &format!("rugpull_detecting/{chain_id}"),
            &[("contract_addresses", contract_addresses)],
        )
        .await
    }

    /// Transaction input decoding; the request body is forwarded as-is.
    pub async fn input_decode(&self, body: Value) -> Result<Value, UpstreamError> {
        let url = format!("{}/input_decode", self.config.base_url);
        debug!(url, "relaying input decode");

        let response = self.client.post(&url).json(&body).send().await?;
        Self::passthrough(response).await
    }

    async fn relay_get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}/{path}", self.config.base_url);
        debug!(url, "relaying security scan");

        let response = self.client.get(&url).query(query).send().await?;
        Self::passthrough(response).await
    }

    async fn passthrough(response: reqwest::Response) -> Result<Value, UpstreamError> {
        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_base_url() {
        let config = GoPlusConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            GoPlusClient::new(config),
            Err(UpstreamError::Config(_))
        ));
    }

    #[test]
    fn default_config_targets_goplus() {
        let config = GoPlusConfig::default();
        assert!(config.base_url.contains("gopluslabs.io"));
    }
}
