// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata record
//!
//! A `Token` describes a fungible asset on one chain. Records are immutable
//! once constructed; identity is (chain, lowercase address) and nothing else.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata for a fungible token on a specific chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Token {
    /// Numeric chain identifier the token lives on
    #[schema(example = 1)]
    pub chain_id: u64,
    /// Contract address, compared case-insensitively
    #[schema(example = "0xdac17f958d2ee523a2206206994597c13d831ec7")]
    pub address: String,
    /// Human-readable token name
    #[schema(example = "Tether USD")]
    pub name: String,
    /// Ticker symbol
    #[schema(example = "USDT")]
    pub symbol: String,
    /// Number of decimal places
    #[schema(example = 6)]
    pub decimals: u8,
    /// Logo URL, may be empty when the upstream list has none
    pub image_url: String,
}

impl Token {
    /// Whether `needle` (already lowercased) is a substring of the token's
    /// address, name, or symbol, each compared lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.address.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.symbol.to_lowercase().contains(needle)
    }

    /// Lowercase form of the contract address, used for dedup keys.
    pub fn address_lower(&self) -> String {
        self.address.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdt() -> Token {
        Token {
            chain_id: 1,
            address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
            name: "Tether USD".to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
            image_url: String::new(),
        }
    }

    #[test]
    fn matches_each_field_case_insensitively() {
        let token = usdt();
        assert!(token.matches("usdt"));
        assert!(token.matches("tether"));
        assert!(token.matches("0xdac17f"));
        assert!(!token.matches("wbtc"));
    }

    #[test]
    fn matches_partial_substrings() {
        let token = usdt();
        assert!(token.matches("sd"));
        assert!(token.matches("ether u"));
    }

    #[test]
    fn address_lower_normalizes_mixed_case() {
        let token = usdt();
        assert_eq!(
            token.address_lower(),
            "0xdac17f958d2ee523a2206206994597c13d831ec7"
        );
    }

    #[test]
    fn serde_round_trip_keeps_field_names() {
        let token = usdt();
        let json = serde_json::to_value(&token).expect("serialize");
        assert_eq!(json["chain_id"], 1);
        assert_eq!(json["symbol"], "USDT");
        assert_eq!(json["image_url"], "");
        let back: Token = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, token);
    }
}
