// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Analysis endpoint

use crate::common::{AnalyzeResponse, ApiError, ApiJson, ApiResult};
use crate::transports::http::server::ApiState;
use crate::v1::dtos::AnalysisRequestV1;
use axum::extract::State;
use axum::response::Json;
use genogate_services::{AnalysisQuery, AnalysisResult};

pub const SUCCESS_MESSAGE: &str = "Analysis completed using the sequence model API";

/// Classify the request, run one model call and return the assembled result.
///
/// The branch is chosen by which fields are present: variant + interval,
/// then interval alone, then sequence.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalysisRequestV1,
    responses(
        (status = 200, description = "Analysis completed"),
        (status = 400, description = "Nothing to analyze in the request", body = ApiError),
        (status = 422, description = "Request body is not a valid analysis request", body = ApiError),
        (status = 500, description = "Model unavailable or model call failed", body = ApiError)
    ),
    tag = "analysis"
)]
pub async fn post_analyze(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<AnalysisRequestV1>,
) -> ApiResult<Json<AnalyzeResponse<AnalysisResult>>> {
    let query = AnalysisQuery::from(request);

    let result = state.analysis_service.analyze(query).await.map_err(|e| {
        tracing::error!(target: "genogate-api", "Analysis failed: {:?}", e);
        ApiError::from(e)
    })?;

    Ok(Json(AnalyzeResponse::success(result, SUCCESS_MESSAGE)))
}
