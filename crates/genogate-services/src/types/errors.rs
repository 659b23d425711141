// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that adapters map onto their own status codes.
*/

use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The model client could not be set up at startup
    #[error("{0}")]
    Unavailable(String),

    /// The request cannot be classified or is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model client rejected the call or failed while making it
    #[error("{0}")]
    Model(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
