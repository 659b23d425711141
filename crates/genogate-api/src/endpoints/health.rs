// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Root and health endpoints

use crate::transports::http::server::ApiState;
use crate::v1::dtos::{HealthCheckResponseV1, RootInfoV1};
use axum::extract::State;
use axum::response::Json;

/// Service banner and model availability
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = RootInfoV1)
    ),
    tag = "health"
)]
pub async fn get_root(State(state): State<ApiState>) -> Json<RootInfoV1> {
    Json(RootInfoV1 {
        message: "genogate API Server".to_string(),
        status: "running".to_string(),
        model_available: state.analysis_service.model_available(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health snapshot", body = HealthCheckResponseV1)
    ),
    tag = "health"
)]
pub async fn get_health(State(state): State<ApiState>) -> Json<HealthCheckResponseV1> {
    let model_available = state.analysis_service.model_available();
    Json(HealthCheckResponseV1 {
        status: if model_available { "healthy" } else { "degraded" }.to_string(),
        model_available,
        version: crate::VERSION.to_string(),
    })
}
