// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service trait definitions.

The stable boundary between the HTTP adapter, the analysis service and
whatever backend produces predictions.
*/

pub mod analysis_service;
pub mod model;

// Re-export for convenience
pub use analysis_service::AnalysisService;
pub use model::{DnaModel, ModelBackend, ModelCapability, MODEL_UNAVAILABLE_MESSAGE};
