// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// CORS middleware for HTTP API

use axum::http::HeaderValue;
use genogate_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Create CORS layer from the `[cors]` config section
///
/// Methods and headers mirror the preflight request, which tower-http
/// allows together with credentials (a wildcard would not be).
/// A `"*"` origin allows any origin and turns credentials off.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any).allow_credentials(false);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(target: "genogate-api", "Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(config.allow_credentials)
}
