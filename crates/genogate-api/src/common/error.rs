// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    InvalidInput,
    UnprocessableEntity,
    ServiceUnavailable,
    ModelError,
}

/// API error type (FastAPI error format: uses "detail" field)
#[derive(Debug, Error, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error detail message
    pub detail: String,

    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ApiErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(format!("Not Found: {}", path.into())).with_code(ApiErrorCode::NotFound)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::InvalidInput)
    }

    /// A request body that could not be read as the endpoint's JSON type
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::UnprocessableEntity)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::ServiceUnavailable)
    }

    /// A failed model call, reported with the underlying description
    pub fn model(description: impl fmt::Display) -> Self {
        Self::new(format!("Model API error: {}", description)).with_code(ApiErrorCode::ModelError)
    }

    /// HTTP status for this error's code
    pub fn status_code(&self) -> u16 {
        match self.code {
            Some(ApiErrorCode::NotFound) => 404,
            Some(ApiErrorCode::InvalidInput) => 400,
            Some(ApiErrorCode::UnprocessableEntity) => 422,
            _ => 500,
        }
    }
}

/// Convert service layer errors to API errors
impl From<genogate_services::ServiceError> for ApiError {
    fn from(err: genogate_services::ServiceError) -> Self {
        use genogate_services::ServiceError;

        match err {
            ServiceError::Unavailable(msg) => ApiError::service_unavailable(msg),
            ServiceError::InvalidInput(msg) => ApiError::invalid_input(msg),
            ServiceError::Model(msg) => ApiError::model(msg),
            err @ ServiceError::Internal(_) => ApiError::model(err),
        }
    }
}

/// Body rejections (bad JSON, missing fields, wrong content type) all map to 422
#[cfg(feature = "http")]
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

#[cfg(feature = "http")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
