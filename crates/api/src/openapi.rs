// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` documentation module
//!
//! `OpenAPI` specification and `Swagger UI` endpoints for API documentation.

use axum::{Json, http::StatusCode, response::Html};
use utoipa::OpenApi;

use crate::routes::handlers;

/// `OpenAPI` document for the gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chain Gateway API",
        description = "HTTP gateway aggregating blockchain token lists, contract-security scans, and swap quotes"
    ),
    paths(
        handlers::health_handler,
        handlers::tokens_handler,
        handlers::swap_quote_handler,
        handlers::swap_price_handler,
        handlers::token_security_handler,
        handlers::address_security_handler,
        handlers::approval_security_handler,
        handlers::nft_security_handler,
        handlers::dapp_security_handler,
        handlers::phishing_site_handler,
        handlers::rugpull_handler,
        handlers::input_decode_handler,
        handlers::create_form_handler,
        handlers::list_forms_handler,
    ),
    components(schemas(
        shared_types::Token,
        form_store::NewForm,
        form_store::FormRecord,
        crate::state::HealthCheck,
        crate::state::HealthStatus,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "tokens", description = "Token registry search"),
        (name = "swap", description = "0x swap relay"),
        (name = "security", description = "GoPlus security relays"),
        (name = "forms", description = "Intake forms"),
    )
)]
pub struct ApiDoc;

/// `OpenAPI` specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI endpoint
pub async fn swagger_ui() -> Result<Html<&'static str>, StatusCode> {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Chain Gateway API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css" />
    <style>
        html { box-sizing: border-box; overflow: -moz-scrollbars-vertical; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin:0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/api-doc/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        }
    </script>
</body>
</html>
"#;
    Ok(Html(html))
}
