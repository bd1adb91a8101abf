// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain token collections with bounded substring search
//!
//! Collections are stored as `Arc<Vec<Token>>` inside a `DashMap` keyed by
//! chain. A refresh builds the replacement vector fully off to the side and
//! swaps it in with one `insert`, which is the whole synchronization story:
//! search takes an `Arc` snapshot and never sees a partially written
//! collection.

use std::{str::FromStr, sync::Arc};

use dashmap::DashMap;
use shared_types::{ChainId, Token};
use tracing::debug;

/// Maximum number of tokens a single search returns.
pub const SEARCH_RESULT_CAP: usize = 25;

/// Registry of per-chain token collections
///
/// Created once at process start and shared behind an `Arc`; collections are
/// written only by the refresh task for their chain and read by everyone.
#[derive(Debug)]
pub struct TokenRegistry {
    chains: DashMap<ChainId, Arc<Vec<Token>>>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenRegistry {
    /// Create a registry with every supported chain present and populated
    /// with its seed tokens, so queries are well-defined before any
    /// background refresh completes.
    pub fn new() -> Self {
        let chains = DashMap::new();
        for &chain in ChainId::all() {
            chains.insert(chain, Arc::new(chain.seed_tokens()));
        }
        Self { chains }
    }

    /// Create a registry with every chain present but empty. Test seam for
    /// exercising the not-yet-refreshed state.
    pub fn empty() -> Self {
        let chains = DashMap::new();
        for &chain in ChainId::all() {
            chains.insert(chain, Arc::new(Vec::new()));
        }
        Self { chains }
    }

    /// Replace a chain's collection with freshly fetched tokens.
    ///
    /// The chain's seed tokens are re-added ahead of the fetched data, and
    /// fetched entries that collide with a seed address (compared lowercase)
    /// are dropped. The merged vector is swapped in atomically.
    pub fn replace(&self, chain: ChainId, fetched: Vec<Token>) {
        let seeds = chain.seed_tokens();
        let seed_addresses: Vec<String> = seeds.iter().map(Token::address_lower).collect();

        let mut merged = seeds;
        merged.reserve(fetched.len());
        for token in fetched {
            if seed_addresses.contains(&token.address_lower()) {
                continue;
            }
            merged.push(token);
        }

        debug!(chain = %chain, tokens = merged.len(), "replaced token collection");
        self.chains.insert(chain, Arc::new(merged));
    }

    /// Snapshot of a chain's current collection.
    pub fn snapshot(&self, chain: ChainId) -> Arc<Vec<Token>> {
        self.chains
            .get(&chain)
            .map(|entry| Arc::clone(entry.value()))
            .unwrap_or_default()
    }

    /// Number of tokens currently held for a chain.
    pub fn len(&self, chain: ChainId) -> usize {
        self.snapshot(chain).len()
    }

    /// Whether a chain's collection is currently empty.
    pub fn is_empty(&self, chain: ChainId) -> bool {
        self.len(chain) == 0
    }

    /// Bounded, case-insensitive substring search over one chain.
    ///
    /// Without a query the first [`SEARCH_RESULT_CAP`] tokens are returned in
    /// stored order. With a query, a token is included when the lowercased
    /// query is a substring of its address, name, or symbol; iteration stops
    /// once the cap is reached. Order is always a stable sub-order of the
    /// collection.
    pub fn search(&self, chain: ChainId, query: Option<&str>) -> Vec<Token> {
        let snapshot = self.snapshot(chain);
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let mut results = Vec::new();
        for token in snapshot.iter() {
            if results.len() >= SEARCH_RESULT_CAP {
                break;
            }
            match &needle {
                None => results.push(token.clone()),
                Some(needle) if token.matches(needle) => results.push(token.clone()),
                Some(_) => {}
            }
        }
        results
    }

    /// Search keyed by a raw chain identifier string.
    ///
    /// Separators are normalized (hyphen to underscore is handled by the
    /// chain parser) and an unrecognized identifier degrades to an empty
    /// result rather than an error.
    pub fn search_by_key(&self, chain_key: &str, query: Option<&str>) -> Vec<Token> {
        match ChainId::from_str(chain_key) {
            Ok(chain) => self.search(chain, query),
            Err(_) => Vec::new(),
        }
    }
}
