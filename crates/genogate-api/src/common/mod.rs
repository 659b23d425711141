// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Common types used across endpoints

pub mod error;
#[cfg(feature = "http")]
pub mod request;
pub mod response;

pub use error::{ApiError, ApiErrorCode};
#[cfg(feature = "http")]
pub use request::ApiJson;
pub use response::AnalyzeResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
