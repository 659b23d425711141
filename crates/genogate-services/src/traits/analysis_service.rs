// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Analysis service trait.
*/

use crate::types::*;
use async_trait::async_trait;

/// Classifies a request, makes one model call and shapes the result (transport-agnostic)
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Run one analysis request
    ///
    /// # Errors
    /// * `ServiceError::Unavailable` - no model backend was configured
    /// * `ServiceError::InvalidInput` - nothing in the request selects a branch
    /// * `ServiceError::Model` - the model call failed
    ///
    async fn analyze(&self, query: AnalysisQuery) -> ServiceResult<AnalysisResult>;

    /// Whether the model backend was set up at startup
    fn model_available(&self) -> bool;
}
