// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `CoinGeckoClient` using a wiremock upstream

use external_apis::{CoinGeckoClient, CoinGeckoConfig};
use serde_json::json;
use shared_types::ChainId;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn test_client(base_url: String) -> CoinGeckoClient {
    CoinGeckoClient::new(CoinGeckoConfig {
        base_url,
        timeout_seconds: 5,
    })
    .expect("client")
}

#[tokio::test]
async fn fetch_token_list_parses_upstream_entries() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    let list = json!({
        "name": "CoinGecko",
        "tokens": [
            {
                "chainId": 1,
                "address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "name": "Tether USD",
                "symbol": "USDT",
                "decimals": 6,
                "logoURI": "https://assets.coingecko.com/usdt.png"
            },
            {
                "chainId": 1,
                "address": "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
                "name": "Wrapped BTC",
                "symbol": "WBTC",
                "decimals": 8
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/ethereum/all.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list))
        .mount(&mock_server)
        .await;

    let tokens = client
        .fetch_token_list(ChainId::Ethereum)
        .await
        .expect("token list");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].symbol, "USDT");
    assert_eq!(tokens[0].decimals, 6);
    assert_eq!(tokens[1].image_url, "", "missing logoURI maps to empty");
}

#[tokio::test]
async fn chain_selects_its_list_slug() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/binance-smart-chain/all.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tokens": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = client.fetch_token_list(ChainId::Bsc).await.expect("list");
    assert!(tokens.is_empty());
}

#[tokio::test]
async fn upstream_error_status_is_reported() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/polygon-pos/all.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = client.fetch_token_list(ChainId::Polygon).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn malformed_payload_is_an_error() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/avalanche/all.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = client.fetch_token_list(ChainId::Avalanche).await;
    assert!(result.is_err());
}
