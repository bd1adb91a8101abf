// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! Maps every failure a handler can produce onto an HTTP response. Upstream
//! relay failures keep the upstream's own error body so callers see what the
//! proxied service said, not a paraphrase.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use external_apis::UpstreamError;
use form_store::FormStoreError;
use thiserror::Error;

/// Comprehensive error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A required dependency is not configured or not reachable
    #[error("Dependency error: {message}")]
    Dependency {
        /// Error message
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON parsing errors with detailed context
    #[error("Invalid JSON request: {message}")]
    JsonError {
        /// Detailed error message
        message: String,
    },

    /// Chain identifier outside the supported set for an operation that
    /// cannot degrade
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// A proxied upstream call failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Form store operation failed
    #[error("Form store error: {0}")]
    FormStore(#[from] FormStoreError),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, json_body) = match &self {
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }),
            ),
            ServerError::Dependency { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::SERVICE_UNAVAILABLE.as_u16()
                }),
            ),
            ServerError::Validation(..)
            | ServerError::JsonError { .. }
            | ServerError::UnsupportedChain(..) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }),
            ),
            // The upstream's error body is mirrored to the caller when one
            // was captured
            ServerError::Upstream(UpstreamError::Status { status, body }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": "upstream request failed",
                    "upstream_status": status,
                    "upstream_body": body,
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }),
            ),
            ServerError::Upstream(UpstreamError::UnsupportedChain(chain)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": format!("Unsupported chain: {chain}"),
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }),
            ),
            ServerError::Upstream(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }),
            ),
            ServerError::FormStore(FormStoreError::Validation(message)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({
                    "error": format!("Validation error: {message}"),
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }),
            ),
            ServerError::FormStore(FormStoreError::Redis(..)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::SERVICE_UNAVAILABLE.as_u16()
                }),
            ),
            ServerError::FormStore(FormStoreError::Serialization(..)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": self.to_string(),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }),
            ),
        };

        let body = Json(json_body);
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_maps_to_unprocessable_entity() {
        let error = ServerError::Upstream(UpstreamError::Status {
            status: 400,
            body: serde_json::json!({ "reason": "Validation Failed" }),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unsupported_chain_maps_to_unprocessable_entity() {
        let error = ServerError::UnsupportedChain("999".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn dependency_maps_to_service_unavailable() {
        let error = ServerError::Dependency {
            message: "form store is not enabled".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn form_validation_maps_to_unprocessable_entity() {
        let error = ServerError::FormStore(FormStoreError::Validation("name is required".into()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
