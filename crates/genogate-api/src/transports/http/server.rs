// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// This module sets up the HTTP API server with Axum, including routing,
// middleware, and state management.

use axum::{
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use genogate_config::CorsConfig;
use genogate_services::AnalysisService;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::common::ApiError;
use crate::endpoints::{analyze, health};
use crate::middleware::{create_cors_layer, log_request_response_bodies};
use crate::openapi::ApiDoc;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub analysis_service: Arc<dyn AnalysisService + Send + Sync>,
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(health::get_root))
        .route("/health", get(health::get_health))
        .route("/api/analyze", post(analyze::post_analyze))
        // OpenAPI spec endpoint
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        // Catch-all route for debugging unmatched requests
        .fallback(|uri: Uri| async move {
            tracing::warn!(target: "genogate-api", "⚠️ Unmatched request - 404 Not Found: {}", uri);
            (StatusCode::NOT_FOUND, ApiError::not_found(uri.path())).into_response()
        })
        .with_state(state)
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(create_cors_layer(cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "genogate-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "genogate-api", "📥 Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "genogate-api",
                        "📤 Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|_error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "genogate-api", "❌ Request failed, latency={:?}", latency);
                }),
        )
}
