// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared error type for relayed upstream calls

use serde_json::Value;
use thiserror::Error;

/// Errors from a proxied third-party HTTP call
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status; the body is kept so the
    /// gateway can mirror it to the caller.
    #[error("upstream returned status {status}")]
    Status {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream response body, parsed as JSON when possible
        body: Value,
    },

    /// The requested chain is not in the supported set
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),

    /// Client configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Build a `Status` error from an upstream response, preserving the JSON
    /// error payload when the body parses, else carrying the raw text.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Self::Status { status, body }
    }
}
