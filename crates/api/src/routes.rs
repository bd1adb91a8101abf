// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! Route configuration for the gateway's HTTP surface.

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{
    address_security_handler, approval_security_handler, create_form_handler,
    dapp_security_handler, health_handler, input_decode_handler, list_forms_handler,
    nft_security_handler, phishing_site_handler, rugpull_handler, swap_price_handler,
    swap_quote_handler, token_security_handler, tokens_handler,
};

use crate::{
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes
pub fn create_routes() -> Router<ServerState> {
    // Health endpoint is not versioned, for monitoring purposes
    let health_routes = Router::new().route("/health", get(health_handler));

    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    let blockchain_routes = Router::new()
        .route("/tokens/{chain}", get(tokens_handler))
        .route("/swap/quote", get(swap_quote_handler))
        .route("/swap/price", get(swap_price_handler))
        .route("/security/token/{chain_id}", get(token_security_handler))
        .route("/security/address/{address}", get(address_security_handler))
        .route("/security/approval/{chain_id}", get(approval_security_handler))
        .route("/security/nft/{chain_id}", get(nft_security_handler))
        .route("/security/dapp", get(dapp_security_handler))
        .route("/security/phishing", get(phishing_site_handler))
        .route("/security/rugpull/{chain_id}", get(rugpull_handler))
        .route("/security/input-decode", post(input_decode_handler));

    let extera_routes =
        Router::new().route("/forms", post(create_form_handler).get(list_forms_handler));

    let v1 = Router::new()
        .nest("/v1/blockchain", blockchain_routes)
        .nest("/v1/extera", extera_routes);

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .merge(v1)
}
