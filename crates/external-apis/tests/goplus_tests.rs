// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the GoPlus relay client

use external_apis::{GoPlusClient, GoPlusConfig, UpstreamError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn test_client(base_url: String) -> GoPlusClient {
    GoPlusClient::new(GoPlusConfig {
        base_url,
        timeout_seconds: 5,
    })
    .expect("client")
}

#[tokio::test]
async fn token_security_passes_body_through_verbatim() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    let upstream_body = json!({
        "code": 1,
        "message": "OK",
        "result": {
            "0xdac17f958d2ee523a2206206994597c13d831ec7": { "is_honeypot": "0" }
        }
    });

    Mock::given(method("GET"))
        .and(path("/token_security/1"))
        .and(query_param(
            "contract_addresses",
            "0xdac17f958d2ee523a2206206994597c13d831ec7",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .mount(&mock_server)
        .await;

    let body = client
        .token_security("1", "0xdac17f958d2ee523a2206206994597c13d831ec7")
        .await
        .expect("relay");

    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn address_security_routes_address_in_path() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/address_security/0xabc"))
        .and(query_param("chain_id", "56"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .address_security("0xabc", "56")
        .await
        .expect("relay");
}

#[tokio::test]
async fn nft_security_includes_optional_token_id() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/nft_security/1"))
        .and(query_param("contract_addresses", "0xdef"))
        .and(query_param("token_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .nft_security("1", "0xdef", Some("42"))
        .await
        .expect("relay");
}

#[tokio::test]
async fn input_decode_forwards_post_body() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    let request_body = json!({
        "chain_id": "1",
        "contract_addresses": "0xdef",
        "data": "0xa9059cbb"
    });

    Mock::given(method("POST"))
        .and(path("/input_decode"))
        .and(body_json(request_body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.input_decode(request_body).await.expect("relay");
}

#[tokio::test]
async fn upstream_error_body_is_preserved() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    let error_body = json!({ "code": 4022, "message": "chain not supported" });

    Mock::given(method("GET"))
        .and(path("/phishing_site"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body.clone()))
        .mount(&mock_server)
        .await;

    let result = client.phishing_site("https://example.com").await;
    match result {
        Err(UpstreamError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, error_body);
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let mock_server = MockServer::start().await;
    let client = test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/dapp_security"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    match client.dapp_security("https://example.com").await {
        Err(UpstreamError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, serde_json::Value::String("bad gateway".to_string()));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}
