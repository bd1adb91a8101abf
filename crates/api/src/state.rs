// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! Shared application state for the gateway: configuration, the token
//! registry, upstream relay clients, the optional form store, and the
//! cancellation token for coordinated shutdown.

use std::{collections::HashMap, sync::Arc};

use external_apis::{GoPlusClient, ZeroExClient};
use form_store::FormStore;
use serde::{Deserialize, Serialize};
use shared_types::ChainId;
use token_registry::TokenRegistry;
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::config::{Environment, ServerConfig};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Per-chain token collections
    registry: Arc<TokenRegistry>,
    /// Swap quote/price relay
    zeroex: Arc<ZeroExClient>,
    /// Security-scan relay
    goplus: Arc<GoPlusClient>,
    /// Form store, present only when Redis is enabled
    forms: Option<FormStore>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    pub fn new(
        config: ServerConfig,
        registry: Arc<TokenRegistry>,
        zeroex: Arc<ZeroExClient>,
        goplus: Arc<GoPlusClient>,
        forms: Option<FormStore>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            registry,
            zeroex,
            goplus,
            forms,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The token registry
    pub fn registry(&self) -> &Arc<TokenRegistry> {
        &self.registry
    }

    /// The swap relay client
    pub fn zeroex(&self) -> &Arc<ZeroExClient> {
        &self.zeroex
    }

    /// The security-scan relay client
    pub fn goplus(&self) -> &Arc<GoPlusClient> {
        &self.goplus
    }

    /// The form store, if Redis is enabled
    pub fn forms(&self) -> Option<&FormStore> {
        self.forms.as_ref()
    }

    /// Build the health report: per-chain registry population plus a few
    /// static facts about the configured upstreams.
    pub fn health_check(&self) -> HealthCheck {
        let chains = ChainId::all()
            .iter()
            .map(|&chain| (chain.name().to_string(), self.registry.len(chain)))
            .collect();

        HealthCheck {
            status: HealthStatus::Up,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            chains,
            swap_api_keys: self.zeroex.key_count(),
            form_store_enabled: self.forms.is_some(),
        }
    }
}

/// Health status of the service
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Token count currently held per chain
    #[schema(value_type = Object)]
    pub chains: HashMap<String, usize>,
    /// Number of API keys in the swap-relay rotation
    pub swap_api_keys: usize,
    /// Whether the form store is connected
    pub form_store_enabled: bool,
}

#[cfg(test)]
mod tests {
    use external_apis::{GoPlusConfig, ZeroExConfig};

    use super::*;

    fn test_state() -> ServerState {
        let config = ServerConfig::for_testing();
        let zeroex = ZeroExClient::new(ZeroExConfig {
            api_keys: "test-key".to_string(),
            ..Default::default()
        })
        .expect("zeroex client");
        let goplus = GoPlusClient::new(GoPlusConfig::default()).expect("goplus client");

        ServerState::new(
            config,
            Arc::new(TokenRegistry::new()),
            Arc::new(zeroex),
            Arc::new(goplus),
            None,
            CancellationToken::new(),
        )
    }

    #[test]
    fn state_creation() {
        let state = test_state();
        assert!(!state.cancellation_token.is_cancelled());
        assert!(state.forms().is_none());
    }

    #[test]
    fn health_reports_every_chain() {
        let state = test_state();
        let health = state.health_check();

        assert_eq!(health.status, HealthStatus::Up);
        assert_eq!(health.chains.len(), ChainId::all().len());
        // Seed tokens are present before any refresh
        assert!(health.chains.values().all(|&count| count > 0));
        assert_eq!(health.swap_api_keys, 1);
        assert!(!health.form_store_enabled);
    }

    #[test]
    fn cancellation_tokens_are_linked() {
        let config = ServerConfig::for_testing();
        let zeroex = ZeroExClient::new(ZeroExConfig {
            api_keys: "k".to_string(),
            ..Default::default()
        })
        .expect("zeroex client");
        let goplus = GoPlusClient::new(GoPlusConfig::default()).expect("goplus client");
        let token = CancellationToken::new();
        let state = ServerState::new(
            config,
            Arc::new(TokenRegistry::new()),
            Arc::new(zeroex),
            Arc::new(goplus),
            None,
            token.clone(),
        );

        token.cancel();
        assert!(state.cancellation_token.is_cancelled());
    }
}
