// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the chain gateway
//!
//! This crate provides the closed set of supported blockchain chain
//! identifiers together with the per-chain upstream metadata (token-list
//! source, swap-API subdomain prefix, seed tokens) and the `Token` record
//! served by the token registry.

pub mod chains;
pub mod token;

pub use chains::{ChainId, ChainIdParseError};
pub use token::Token;
