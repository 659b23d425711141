// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// genogate REST API Layer
//
// This crate exposes the analysis service over HTTP (Axum). Endpoint handlers
// translate v1 DTOs to service queries and service errors to HTTP errors.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
#[cfg(feature = "http")]
pub mod endpoints;
#[cfg(feature = "http")]
pub mod middleware;
#[cfg(feature = "http")]
pub mod openapi;
#[cfg(feature = "http")]
pub mod transports;
pub mod v1;

// Re-export commonly used types
pub use common::{AnalyzeResponse, ApiError, ApiErrorCode, ApiResult};
#[cfg(feature = "http")]
pub use transports::http::server::{create_http_server, ApiState};
