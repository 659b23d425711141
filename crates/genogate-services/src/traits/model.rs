// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Sequence model client boundary.

A `ModelBackend` is decided once at startup. If none exists the service runs
with an unavailable capability and every analysis request fails the same way.
*/

use crate::types::*;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Returned to clients when no model backend was configured
pub const MODEL_UNAVAILABLE_MESSAGE: &str =
    "Sequence model client is not available. Configure a model endpoint and restart the service.";

/// A client bound to one API key
#[async_trait]
pub trait DnaModel: Send + Sync {
    /// Predict tracks for a raw sequence whose length the model supports
    async fn predict_sequence(
        &self,
        sequence: &str,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<Output>;

    /// Predict tracks for a reference genome region
    async fn predict_interval(
        &self,
        interval: &Interval,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<Output>;

    /// Predict reference and alternate tracks for a variant inside `interval`
    async fn predict_variant(
        &self,
        interval: &Interval,
        variant: &Variant,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<VariantOutput>;

    /// Run the given scorers over a variant, returning one row per gene/track/scorer
    async fn score_variant(
        &self,
        interval: &Interval,
        variant: &Variant,
        scorers: &[VariantScorer],
        organism: Organism,
    ) -> ServiceResult<DataTable>;
}

/// Factory for per-request model clients
pub trait ModelBackend: Send + Sync {
    fn create_client(&self, api_key: &str) -> ServiceResult<Arc<dyn DnaModel>>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Whether a model backend exists for this process
#[derive(Clone, Default)]
pub struct ModelCapability {
    backend: Option<Arc<dyn ModelBackend>>,
}

impl ModelCapability {
    pub fn available(backend: Arc<dyn ModelBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> ServiceResult<&Arc<dyn ModelBackend>> {
        self.backend
            .as_ref()
            .ok_or_else(|| ServiceError::Unavailable(MODEL_UNAVAILABLE_MESSAGE.to_string()))
    }
}

impl fmt::Debug for ModelCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Some(backend) => write!(f, "ModelCapability(available: {})", backend.name()),
            None => write!(f, "ModelCapability(unavailable)"),
        }
    }
}
