// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! External API integrations for the chain gateway
//!
//! This crate provides the HTTP clients the gateway proxies through:
//!
//! - **[`coingecko`]** - per-chain token lists; implements the registry's
//!   `TokenSource` trait so background refreshes can consume it.
//! - **[`goplus`]** - contract/address/NFT/dApp security scans, relayed
//!   verbatim.
//! - **[`zeroex`]** - swap quote/price relay with round-robin API-key
//!   rotation.
//!
//! Relay clients pass upstream response bodies through untouched; upstream
//! errors are captured as [`error::UpstreamError::Status`] with the upstream
//! body so the HTTP layer can mirror them to the caller. All clients carry a
//! bounded request timeout so a stalled upstream cannot pin a request task
//! indefinitely.

pub mod coingecko;
pub mod error;
pub mod goplus;
pub mod zeroex;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use error::UpstreamError;
pub use goplus::{GoPlusClient, GoPlusConfig};
pub use zeroex::{ZeroExClient, ZeroExConfig};
