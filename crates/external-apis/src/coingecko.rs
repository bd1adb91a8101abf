// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! CoinGecko token-list integration
//!
//! Fetches the public per-chain token lists (`tokens.coingecko.com/{slug}/
//! all.json`) that the registry refresh tasks consume. List entries are
//! mapped into the gateway's `Token` record; the registry handles seeding
//! and deduplication.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared_types::{ChainId, Token};
use thiserror::Error;
use token_registry::TokenSource;
use tracing::debug;

/// Configuration for the CoinGecko token-list client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL of the token-list host
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://tokens.coingecko.com".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Errors specific to token-list fetching
#[derive(Debug, Error)]
pub enum CoinGeckoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("token list request failed with status {status}")]
    Status {
        /// Upstream HTTP status code
        status: u16,
    },

    /// The chain has no external token list
    #[error("chain {0} has no token list source")]
    NoListForChain(ChainId),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// CoinGecko token-list client
#[derive(Debug)]
pub struct CoinGeckoClient {
    client: Client,
    config: CoinGeckoConfig,
}

#[derive(Debug, Deserialize)]
struct TokenListResponse {
    tokens: Vec<TokenListEntry>,
}

/// One entry of the upstream list; field names follow the upstream schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenListEntry {
    chain_id: u64,
    address: String,
    name: String,
    symbol: String,
    decimals: u8,
    #[serde(default)]
    logo_u_r_i: Option<String>,
}

impl From<TokenListEntry> for Token {
    fn from(entry: TokenListEntry) -> Self {
        Self {
            chain_id: entry.chain_id,
            address: entry.address,
            name: entry.name,
            symbol: entry.symbol,
            decimals: entry.decimals,
            image_url: entry.logo_u_r_i.unwrap_or_default(),
        }
    }
}

impl CoinGeckoClient {
    /// Create a new token-list client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: CoinGeckoConfig) -> Result<Self, CoinGeckoError> {
        if config.base_url.trim().is_empty() {
            return Err(CoinGeckoError::Config("base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("chain-gateway/0.1.0")
            .build()
            .map_err(CoinGeckoError::Http)?;

        Ok(Self { client, config })
    }

    /// Fetch the full token list for one chain.
    pub async fn fetch_token_list(&self, chain: ChainId) -> Result<Vec<Token>, CoinGeckoError> {
        let slug = chain
            .token_list_slug()
            .ok_or(CoinGeckoError::NoListForChain(chain))?;

        let url = format!("{}/{slug}/all.json", self.config.base_url);
        debug!(url, chain = %chain, "fetching token list");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CoinGeckoError::Status {
                status: response.status().as_u16(),
            });
        }

        let list: TokenListResponse = response.json().await?;
        Ok(list.tokens.into_iter().map(Token::from).collect())
    }
}

impl TokenSource for CoinGeckoClient {
    async fn fetch_tokens(&self, chain: ChainId) -> Result<Vec<Token>, anyhow::Error> {
        Ok(self.fetch_token_list(chain).await?)
    }
}
