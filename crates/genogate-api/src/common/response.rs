// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

/// Analysis response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Assembled analysis result
    pub data: T,

    pub message: String,
}

impl<T> AnalyzeResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}
