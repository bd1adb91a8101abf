// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! Handlers for the gateway's endpoints: registry-backed token search, the
//! 0x swap relay, the GoPlus security relays, and the Redis-backed form
//! intake. Relay handlers forward upstream bodies verbatim in both the
//! success and the error case.

use std::{net::SocketAddr, str::FromStr};

use axum::{
    Json,
    extract::{ConnectInfo, Path, Query, RawQuery, State},
    response::IntoResponse,
};
use form_store::{FormRecord, NewForm};
use serde::Deserialize;
use serde_json::Value;
use shared_types::{ChainId, Token};
use utoipa::IntoParams;

use crate::{
    error::{ServerError, ServerResult},
    extractors::JsonExtractor,
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the gateway, including per-chain token registry population, swap-relay key count, and form-store availability.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> impl IntoResponse {
    Json(state.health_check())
}

/// Query parameters for token search
#[derive(Debug, Deserialize, IntoParams)]
pub struct TokensQuery {
    /// Free-text filter matched against address, name, and symbol
    pub search: Option<String>,
}

/// Token search over one chain's registry collection
///
/// The chain segment accepts a numeric chain ID or a slug alias; an
/// unrecognized chain yields an empty array rather than an error.
#[utoipa::path(
    get,
    path = "/v1/blockchain/tokens/{chain}",
    tag = "tokens",
    summary = "Search a chain's token list",
    params(
        ("chain" = String, Path, description = "Chain ID or slug, e.g. `1` or `ethereum`"),
        TokensQuery,
    ),
    responses(
        (status = 200, description = "Matching tokens in stored order, bounded", body = Vec<Token>)
    )
)]
pub async fn tokens_handler(
    State(state): State<ServerState>,
    Path(chain): Path<String>,
    Query(query): Query<TokensQuery>,
) -> Json<Vec<Token>> {
    Json(state.registry().search_by_key(&chain, query.search.as_deref()))
}

/// Query parameters for the swap relay
#[derive(Debug, Deserialize, IntoParams)]
pub struct SwapParams {
    /// Chain ID or slug selecting the upstream subdomain
    pub chain: Option<String>,
}

fn parse_swap_chain(chain: Option<&str>) -> ServerResult<ChainId> {
    let raw = chain.ok_or_else(|| {
        ServerError::Validation("chain query parameter is required".to_string())
    })?;
    ChainId::from_str(raw).map_err(|_| ServerError::UnsupportedChain(raw.to_string()))
}

/// Relay a swap quote request to the 0x API
#[utoipa::path(
    get,
    path = "/v1/blockchain/swap/quote",
    tag = "swap",
    summary = "Relay a swap quote request",
    description = "Forwards the full query string to the 0x quote endpoint for the selected chain, drawing one API key from the rotation. The upstream response body is returned verbatim.",
    params(SwapParams),
    responses(
        (status = 200, description = "Upstream quote body", body = Object),
        (status = 422, description = "Unsupported chain or upstream failure", body = Object)
    )
)]
pub async fn swap_quote_handler(
    State(state): State<ServerState>,
    Query(params): Query<SwapParams>,
    RawQuery(raw_query): RawQuery,
) -> ServerResult<Json<Value>> {
    let chain = parse_swap_chain(params.chain.as_deref())?;
    let body = state
        .zeroex()
        .swap_quote(chain, raw_query.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(body))
}

/// Relay a swap price request to the 0x API
#[utoipa::path(
    get,
    path = "/v1/blockchain/swap/price",
    tag = "swap",
    summary = "Relay a swap price request",
    params(SwapParams),
    responses(
        (status = 200, description = "Upstream price body", body = Object),
        (status = 422, description = "Unsupported chain or upstream failure", body = Object)
    )
)]
pub async fn swap_price_handler(
    State(state): State<ServerState>,
    Query(params): Query<SwapParams>,
    RawQuery(raw_query): RawQuery,
) -> ServerResult<Json<Value>> {
    let chain = parse_swap_chain(params.chain.as_deref())?;
    let body = state
        .zeroex()
        .swap_price(chain, raw_query.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(body))
}

/// Query parameters naming contract addresses to scan
#[derive(Debug, Deserialize, IntoParams)]
pub struct ContractAddressesQuery {
    /// Comma-separated contract address list
    pub contract_addresses: Option<String>,
}

fn require(value: Option<String>, name: &str) -> ServerResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ServerError::Validation(format!("{name} query parameter is required")))
}

/// Token contract security scan
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/token/{chain_id}",
    tag = "security",
    summary = "Scan token contracts",
    params(
        ("chain_id" = String, Path, description = "Upstream chain identifier"),
        ContractAddressesQuery,
    ),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn token_security_handler(
    State(state): State<ServerState>,
    Path(chain_id): Path<String>,
    Query(query): Query<ContractAddressesQuery>,
) -> ServerResult<Json<Value>> {
    let addresses = require(query.contract_addresses, "contract_addresses")?;
    let body = state.goplus().token_security(&chain_id, &addresses).await?;
    Ok(Json(body))
}

/// Query parameters for address scans
#[derive(Debug, Deserialize, IntoParams)]
pub struct AddressSecurityQuery {
    /// Upstream chain identifier
    pub chain_id: Option<String>,
}

/// Malicious-address scan
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/address/{address}",
    tag = "security",
    summary = "Scan an address",
    params(
        ("address" = String, Path, description = "Address to scan"),
        AddressSecurityQuery,
    ),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn address_security_handler(
    State(state): State<ServerState>,
    Path(address): Path<String>,
    Query(query): Query<AddressSecurityQuery>,
) -> ServerResult<Json<Value>> {
    let chain_id = require(query.chain_id, "chain_id")?;
    let body = state.goplus().address_security(&address, &chain_id).await?;
    Ok(Json(body))
}

/// Approval-contract security scan
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/approval/{chain_id}",
    tag = "security",
    summary = "Scan approval contracts",
    params(
        ("chain_id" = String, Path, description = "Upstream chain identifier"),
        ContractAddressesQuery,
    ),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn approval_security_handler(
    State(state): State<ServerState>,
    Path(chain_id): Path<String>,
    Query(query): Query<ContractAddressesQuery>,
) -> ServerResult<Json<Value>> {
    let addresses = require(query.contract_addresses, "contract_addresses")?;
    let body = state
        .goplus()
        .approval_security(&chain_id, &addresses)
        .await?;
    Ok(Json(body))
}

/// Query parameters for NFT scans
#[derive(Debug, Deserialize, IntoParams)]
pub struct NftSecurityQuery {
    /// Comma-separated contract address list
    pub contract_addresses: Option<String>,
    /// Optional token id within the collection
    pub token_id: Option<String>,
}

/// NFT contract security scan
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/nft/{chain_id}",
    tag = "security",
    summary = "Scan NFT contracts",
    params(
        ("chain_id" = String, Path, description = "Upstream chain identifier"),
        NftSecurityQuery,
    ),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn nft_security_handler(
    State(state): State<ServerState>,
    Path(chain_id): Path<String>,
    Query(query): Query<NftSecurityQuery>,
) -> ServerResult<Json<Value>> {
    let addresses = require(query.contract_addresses, "contract_addresses")?;
    let body = state
        .goplus()
        .nft_security(&chain_id, &addresses, query.token_id.as_deref())
        .await?;
    Ok(Json(body))
}

/// Query parameters carrying a URL to check
#[derive(Debug, Deserialize, IntoParams)]
pub struct UrlQuery {
    /// URL to scan
    pub url: Option<String>,
}

/// dApp security scan by URL
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/dapp",
    tag = "security",
    summary = "Scan a dApp URL",
    params(UrlQuery),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn dapp_security_handler(
    State(state): State<ServerState>,
    Query(query): Query<UrlQuery>,
) -> ServerResult<Json<Value>> {
    let url = require(query.url, "url")?;
    let body = state.goplus().dapp_security(&url).await?;
    Ok(Json(body))
}

/// Phishing-site check by URL
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/phishing",
    tag = "security",
    summary = "Check a URL for phishing",
    params(UrlQuery),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn phishing_site_handler(
    State(state): State<ServerState>,
    Query(query): Query<UrlQuery>,
) -> ServerResult<Json<Value>> {
    let url = require(query.url, "url")?;
    let body = state.goplus().phishing_site(&url).await?;
    Ok(Json(body))
}

/// Rug-pull risk detection
#[utoipa::path(
    get,
    path = "/v1/blockchain/security/rugpull/{chain_id}",
    tag = "security",
    summary = "Detect rug-pull risk",
    params(
        ("chain_id" = String, Path, description = "Upstream chain identifier"),
        ContractAddressesQuery,
    ),
    responses(
        (status = 200, description = "Upstream scan result", body = Object),
        (status = 422, description = "Missing parameters or upstream failure", body = Object)
    )
)]
pub async fn rugpull_handler(
    State(state): State<ServerState>,
    Path(chain_id): Path<String>,
    Query(query): Query<ContractAddressesQuery>,
) -> ServerResult<Json<Value>> {
    let addresses = require(query.contract_addresses, "contract_addresses")?;
    let body = state
        .goplus()
        .rugpull_detecting(&chain_id, &addresses)
        .await?;
    Ok(Json(body))
}

/// Transaction input decoding
#[utoipa::path(
    post,
    path = "/v1/blockchain/security/input-decode",
    tag = "security",
    summary = "Decode transaction input data",
    request_body = Object,
    responses(
        (status = 200, description = "Upstream decode result", body = Object),
        (status = 422, description = "Invalid body or upstream failure", body = Object)
    )
)]
pub async fn input_decode_handler(
    State(state): State<ServerState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> ServerResult<Json<Value>> {
    let body = state.goplus().input_decode(body).await?;
    Ok(Json(body))
}

fn form_store(state: &ServerState) -> ServerResult<&form_store::FormStore> {
    state.forms().ok_or_else(|| ServerError::Dependency {
        message: "form store is not enabled".to_string(),
    })
}

/// Submit an intake form
#[utoipa::path(
    post,
    path = "/v1/extera/forms",
    tag = "forms",
    summary = "Submit an intake form",
    request_body = NewForm,
    responses(
        (status = 200, description = "Stored form document", body = FormRecord),
        (status = 422, description = "Validation failure", body = Object),
        (status = 503, description = "Form store unavailable", body = Object)
    )
)]
pub async fn create_form_handler(
    State(state): State<ServerState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    JsonExtractor(form): JsonExtractor<NewForm>,
) -> ServerResult<Json<FormRecord>> {
    let record = form_store(&state)?
        .create_form(form, remote.ip().to_string())
        .await?;
    Ok(Json(record))
}

/// Query parameters for form listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct FormsQuery {
    /// Substring matched against stored emails; empty matches everything
    pub uid: Option<String>,
    /// 1-based page number, 20 forms per page
    pub page: Option<usize>,
}

/// List stored intake forms
#[utoipa::path(
    get,
    path = "/v1/extera/forms",
    tag = "forms",
    summary = "List intake forms",
    params(FormsQuery),
    responses(
        (status = 200, description = "One page of matching forms", body = Vec<FormRecord>),
        (status = 503, description = "Form store unavailable", body = Object)
    )
)]
pub async fn list_forms_handler(
    State(state): State<ServerState>,
    Query(query): Query<FormsQuery>,
) -> ServerResult<Json<Vec<FormRecord>>> {
    let records = form_store(&state)?
        .get_forms(query.uid.as_deref().unwrap_or(""), query.page.unwrap_or(1))
        .await?;
    Ok(Json(records))
}
