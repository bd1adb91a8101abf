// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fire-and-forget registry population
//!
//! One refresh task is spawned per chain with an external token-list source.
//! Process readiness never waits on them, and a failed fetch leaves the
//! chain's previous collection (or its seeds) in place.

use std::sync::Arc;

use shared_types::{ChainId, Token};
use tracing::{debug, warn};

use crate::registry::TokenRegistry;

/// Source of token lists for registry refreshes
///
/// Implemented by the CoinGecko client in `external-apis`; test code supplies
/// stub implementations.
pub trait TokenSource: Send + Sync + 'static {
    /// Fetch the full token list for one chain.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a malformed payload; the
    /// refresh machinery swallows it.
    fn fetch_tokens(
        &self,
        chain: ChainId,
    ) -> impl Future<Output = Result<Vec<Token>, anyhow::Error>> + Send;
}

/// Spawn one background refresh task per chain that has a token-list source.
///
/// Returns the spawned task handles so tests can await completion; callers
/// in the serving path drop them.
pub fn spawn_refresh_all<S>(
    registry: &Arc<TokenRegistry>,
    source: Arc<S>,
) -> Vec<tokio::task::JoinHandle<()>>
where
    S: TokenSource,
{
    let mut handles = Vec::new();
    for &chain in ChainId::all() {
        if chain.token_list_slug().is_none() {
            continue;
        }
        let registry = Arc::clone(registry);
        let source = Arc::clone(&source);
        handles.push(tokio::spawn(async move {
            refresh_chain(&registry, source.as_ref(), chain).await;
        }));
    }
    handles
}

/// Refresh one chain's collection, swallowing failure.
pub async fn refresh_chain<S>(registry: &TokenRegistry, source: &S, chain: ChainId)
where
    S: TokenSource,
{
    match source.fetch_tokens(chain).await {
        Ok(tokens) => {
            debug!(chain = %chain, fetched = tokens.len(), "token list refresh complete");
            registry.replace(chain, tokens);
        }
        Err(error) => {
            // Keep serving the previous collection; no retry
            warn!(chain = %chain, %error, "token list refresh failed");
        }
    }
}
