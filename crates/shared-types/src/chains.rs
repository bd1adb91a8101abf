// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain chain identifiers and per-chain upstream metadata
//!
//! The gateway supports a small closed set of EVM chains. The canonical form
//! of a chain identifier is the numeric chain ID; human-readable slugs
//! (`"ethereum"`, `"bsc"`, ...) are accepted on input and normalized here.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::token::Token;

/// Supported blockchain chain identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum ChainId {
    /// Ethereum Mainnet - Chain ID: 1
    Ethereum = 1,
    /// BNB Smart Chain - Chain ID: 56
    Bsc = 56,
    /// Polygon - Chain ID: 137
    Polygon = 137,
    /// Arbitrum One - Chain ID: 42161
    Arbitrum = 42161,
    /// Avalanche C-Chain - Chain ID: 43114
    Avalanche = 43114,
    /// Sepolia testnet - Chain ID: 11155111
    Sepolia = 11155111,
}

/// Placeholder address upstream quoting APIs use for a chain's gas token.
const NATIVE_TOKEN_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

impl ChainId {
    /// Returns the numeric chain ID
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Bsc => 56,
            Self::Polygon => 137,
            Self::Arbitrum => 42161,
            Self::Avalanche => 43114,
            Self::Sepolia => 11155111,
        }
    }

    /// Returns the human-readable name of the chain
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Bsc => "BNB Smart Chain",
            Self::Polygon => "Polygon",
            Self::Arbitrum => "Arbitrum",
            Self::Avalanche => "Avalanche",
            Self::Sepolia => "Sepolia",
        }
    }

    /// Returns the canonical lowercase slug for the chain
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Bsc => "bsc",
            Self::Polygon => "polygon",
            Self::Arbitrum => "arbitrum",
            Self::Avalanche => "avalanche",
            Self::Sepolia => "sepolia",
        }
    }

    /// Subdomain prefix selecting the per-chain host of the swap-quote
    /// upstream (`https://{prefix}api.0x.org`). Ethereum uses the bare host.
    pub const fn swap_host_prefix(self) -> &'static str {
        match self {
            Self::Ethereum => "",
            Self::Bsc => "bsc.",
            Self::Polygon => "polygon.",
            Self::Arbitrum => "arbitrum.",
            Self::Avalanche => "avalanche.",
            Self::Sepolia => "sepolia.",
        }
    }

    /// Path slug of the chain's CoinGecko token list, `None` when the chain
    /// has no external list and is served from seed tokens only.
    pub const fn token_list_slug(self) -> Option<&'static str> {
        match self {
            Self::Ethereum => Some("ethereum"),
            Self::Bsc => Some("binance-smart-chain"),
            Self::Polygon => Some("polygon-pos"),
            Self::Arbitrum => Some("arbitrum-one"),
            Self::Avalanche => Some("avalanche"),
            Self::Sepolia => None,
        }
    }

    /// Fixed tokens placed ahead of fetched data in the chain's collection:
    /// the chain's gas token, or a hardcoded test set for Sepolia.
    pub fn seed_tokens(self) -> Vec<Token> {
        match self {
            Self::Ethereum => vec![native(
                1,
                "Ethereum",
                "ETH",
                "https://s2.coinmarketcap.com/static/img/coins/64x64/1027.png",
            )],
            Self::Bsc => vec![native(
                56,
                "BNB",
                "BNB",
                "https://s2.coinmarketcap.com/static/img/coins/64x64/1839.png",
            )],
            Self::Polygon => vec![native(
                137,
                "Polygon",
                "MATIC",
                "https://s2.coinmarketcap.com/static/img/coins/64x64/3890.png",
            )],
            Self::Arbitrum => vec![Token {
                chain_id: 42161,
                address: "0x912ce59144191c1204e64559fe8253a0e49e6548".to_string(),
                name: "Arbitrum".to_string(),
                symbol: "ARB".to_string(),
                decimals: 18,
                image_url: "https://s2.coinmarketcap.com/static/img/coins/64x64/11841.png"
                    .to_string(),
            }],
            Self::Avalanche => vec![native(
                43114,
                "Avalanche",
                "AVAX",
                "https://s2.coinmarketcap.com/static/img/coins/64x64/5805.png",
            )],
            Self::Sepolia => vec![
                sepolia_seed("Wrapped Ether", "WETH", "0xfff9976782d46cc05630d1f6ebab18b2324d6b14"),
                sepolia_seed("ChainLink Token", "LINK", "0x779877a7b0d9e8603169ddbd7836e478b4624789"),
                sepolia_seed("Uniswap", "UNI", "0x1f9840a85d5af5bf1d1762d925bdaddc4201f984"),
            ],
        }
    }

    /// Returns all supported chain IDs
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ethereum,
            Self::Bsc,
            Self::Polygon,
            Self::Arbitrum,
            Self::Avalanche,
            Self::Sepolia,
        ]
    }
}

fn native(chain_id: u64, name: &str, symbol: &str, image_url: &str) -> Token {
    Token {
        chain_id,
        address: NATIVE_TOKEN_ADDRESS.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals: 18,
        image_url: image_url.to_string(),
    }
}

fn sepolia_seed(name: &str, symbol: &str, address: &str) -> Token {
    Token {
        chain_id: 11155111,
        address: address.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals: 18,
        image_url: "/images/token.png".to_string(),
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ChainId {
    type Err = ChainIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Numeric chain IDs take priority over slugs
        if let Ok(id) = s.parse::<u64>() {
            return Self::try_from(id).map_err(|_| ChainIdParseError::InvalidId(id));
        }

        // Slugs arrive with mixed separators; normalize hyphen to underscore
        match s.to_lowercase().replace('-', "_").as_str() {
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "bsc" | "binance_smart_chain" | "bnb" => Ok(Self::Bsc),
            "polygon" | "polygon_pos" | "matic" => Ok(Self::Polygon),
            "arbitrum" | "arbitrum_one" | "arb" => Ok(Self::Arbitrum),
            "avalanche" | "avax" => Ok(Self::Avalanche),
            "sepolia" => Ok(Self::Sepolia),
            _ => Err(ChainIdParseError::InvalidName(s.to_string())),
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = ChainIdParseError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Ethereum),
            56 => Ok(Self::Bsc),
            137 => Ok(Self::Polygon),
            42161 => Ok(Self::Arbitrum),
            43114 => Ok(Self::Avalanche),
            11155111 => Ok(Self::Sepolia),
            _ => Err(ChainIdParseError::InvalidId(id)),
        }
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.chain_id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChainIdVisitor;

        impl serde::de::Visitor<'_> for ChainIdVisitor {
            type Value = ChainId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a supported chain ID (1, 56, 137, 42161, 43114, 11155111), numeric string, or slug (ethereum, bsc, polygon, arbitrum, avalanche, sepolia)"
                )
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ChainId::try_from(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Unsigned(value),
                        &"a supported chain ID (1, 56, 137, 42161, 43114, 11155111)",
                    )
                })
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ChainId::from_str(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &"a supported chain slug (ethereum, bsc, polygon, arbitrum, avalanche, sepolia)",
                    )
                })
            }
        }

        deserializer.deserialize_any(ChainIdVisitor)
    }
}

/// Error type for chain ID parsing
#[derive(Debug, thiserror::Error)]
pub enum ChainIdParseError {
    /// Invalid chain ID number
    #[error(
        "unsupported chain ID: {0}. Supported chain IDs are: 1 (Ethereum), 56 (BNB Smart Chain), 137 (Polygon), 42161 (Arbitrum), 43114 (Avalanche), 11155111 (Sepolia)"
    )]
    InvalidId(u64),
    /// Invalid chain slug
    #[error(
        "unsupported chain: {0}. Supported chains are: ethereum, bsc, polygon, arbitrum, avalanche, sepolia"
    )]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_conversion_round_trips() {
        for &chain in ChainId::all() {
            let id = chain.chain_id();
            assert_eq!(ChainId::try_from(id).expect("supported id"), chain);
            assert_eq!(
                ChainId::from_str(&id.to_string()).expect("numeric string"),
                chain
            );
        }
        assert!(ChainId::try_from(999).is_err());
    }

    #[test]
    fn slug_conversion_round_trips() {
        for &chain in ChainId::all() {
            assert_eq!(ChainId::from_str(chain.slug()).expect("slug"), chain);
        }
    }

    #[test]
    fn from_str_accepts_aliases_and_separators() {
        assert_eq!(ChainId::from_str("binance-smart-chain").expect("alias"), ChainId::Bsc);
        assert_eq!(ChainId::from_str("polygon-pos").expect("alias"), ChainId::Polygon);
        assert_eq!(ChainId::from_str("arbitrum_one").expect("alias"), ChainId::Arbitrum);
        assert_eq!(ChainId::from_str("AVAX").expect("alias"), ChainId::Avalanche);
        assert_eq!(ChainId::from_str("MATIC").expect("alias"), ChainId::Polygon);

        assert!(ChainId::from_str("not-a-chain").is_err());
        assert!(ChainId::from_str("999").is_err());
    }

    #[test]
    fn swap_host_prefixes() {
        assert_eq!(ChainId::Ethereum.swap_host_prefix(), "");
        assert_eq!(ChainId::Bsc.swap_host_prefix(), "bsc.");
        assert_eq!(ChainId::Sepolia.swap_host_prefix(), "sepolia.");
    }

    #[test]
    fn token_list_slugs() {
        assert_eq!(ChainId::Ethereum.token_list_slug(), Some("ethereum"));
        assert_eq!(ChainId::Bsc.token_list_slug(), Some("binance-smart-chain"));
        assert_eq!(ChainId::Arbitrum.token_list_slug(), Some("arbitrum-one"));
        assert_eq!(ChainId::Sepolia.token_list_slug(), None);
    }

    #[test]
    fn seed_tokens_carry_matching_chain_ids() {
        for &chain in ChainId::all() {
            let seeds = chain.seed_tokens();
            assert!(!seeds.is_empty(), "chain {chain:?} should have seeds");
            for token in seeds {
                assert_eq!(token.chain_id, chain.chain_id());
                assert!(!token.symbol.is_empty());
            }
        }
        assert_eq!(ChainId::Sepolia.seed_tokens().len(), 3);
    }

    #[test]
    fn serde_uses_numeric_form() {
        let json = serde_json::to_string(&ChainId::Bsc).expect("serialize");
        assert_eq!(json, "56");

        let from_number: ChainId = serde_json::from_str("137").expect("number");
        assert_eq!(from_number, ChainId::Polygon);

        let from_slug: ChainId = serde_json::from_str("\"sepolia\"").expect("slug");
        assert_eq!(from_slug, ChainId::Sepolia);

        assert!(serde_json::from_str::<ChainId>("999").is_err());
        assert!(serde_json::from_str::<ChainId>("\"unknown\"").is_err());
    }
}
