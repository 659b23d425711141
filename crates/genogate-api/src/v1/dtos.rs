// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - Data Transfer Objects
// Request field names and defaults are the ones the web front end sends.

use genogate_services::{AnalysisQuery, IntervalSpec, VariantSpec};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_organism() -> String {
    "human".to_string()
}

fn default_output_types() -> Vec<String> {
    vec!["RNA_SEQ".to_string()]
}

fn default_ontology_terms() -> Vec<String> {
    vec!["UBERON:0002048".to_string()]
}

/// Variant input (1-based position)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VariantInputV1 {
    #[schema(example = "chr22")]
    pub chromosome: String,
    #[schema(example = 36201698)]
    pub position: i64,
    #[schema(example = "A")]
    pub reference_bases: String,
    #[schema(example = "C")]
    pub alternate_bases: String,
}

/// Half-open genomic interval
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IntervalInputV1 {
    #[schema(example = "chr22")]
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
}

/// Analysis request body for `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequestV1 {
    /// Forwarded to the model client unchanged
    pub api_key: String,

    /// `score_variant` selects variant scoring; other values do not affect dispatch
    #[schema(example = "variant_effect")]
    pub analysis_type: String,

    /// `mouse` or `human`; anything else is treated as human
    #[serde(default = "default_organism")]
    #[schema(example = "human")]
    pub organism: String,

    #[serde(default)]
    pub sequence: Option<String>,

    #[serde(default)]
    pub variant: Option<VariantInputV1>,

    #[serde(default)]
    pub interval: Option<IntervalInputV1>,

    #[serde(default = "default_output_types")]
    pub output_types: Vec<String>,

    #[serde(default = "default_ontology_terms")]
    pub ontology_terms: Vec<String>,

    /// Score the variant with the recommended scorers instead of predicting tracks
    #[serde(default)]
    pub use_scoring: bool,
}

impl From<AnalysisRequestV1> for AnalysisQuery {
    fn from(request: AnalysisRequestV1) -> Self {
        AnalysisQuery {
            api_key: request.api_key,
            analysis_type: request.analysis_type,
            organism: request.organism,
            sequence: request.sequence,
            variant: request.variant.map(|v| VariantSpec {
                chromosome: v.chromosome,
                position: v.position,
                reference_bases: v.reference_bases,
                alternate_bases: v.alternate_bases,
            }),
            interval: request.interval.map(|i| IntervalSpec {
                chromosome: i.chromosome,
                start: i.start,
                end: i.end,
            }),
            output_types: request.output_types,
            ontology_terms: request.ontology_terms,
            use_scoring: request.use_scoring,
        }
    }
}

/// Root info response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootInfoV1 {
    #[schema(example = "genogate API Server")]
    pub message: String,

    #[schema(example = "running")]
    pub status: String,

    /// Whether a model backend was configured at startup
    pub model_available: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponseV1 {
    /// `healthy` with a model backend, `degraded` without one
    #[schema(example = "healthy")]
    pub status: String,

    pub model_available: bool,

    #[schema(example = "0.1.0")]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request: AnalysisRequestV1 = serde_json::from_value(json!({
            "api_key": "k",
            "analysis_type": "sequence_prediction",
            "sequence": "ACGT"
        }))
        .unwrap();

        assert_eq!(request.organism, "human");
        assert_eq!(request.output_types, vec!["RNA_SEQ"]);
        assert_eq!(request.ontology_terms, vec!["UBERON:0002048"]);
        assert!(!request.use_scoring);
        assert!(request.variant.is_none());
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = serde_json::from_value::<AnalysisRequestV1>(json!({"analysis_type": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_query() {
        let request: AnalysisRequestV1 = serde_json::from_value(json!({
            "api_key": "k",
            "analysis_type": "score_variant",
            "organism": "mouse",
            "variant": {"chromosome": "chr1", "position": 10, "reference_bases": "A", "alternate_bases": "T"},
            "interval": {"chromosome": "chr1", "start": 0, "end": 100}
        }))
        .unwrap();

        let query = AnalysisQuery::from(request);
        assert!(query.wants_scoring());
        assert_eq!(query.organism, "mouse");
        assert_eq!(query.variant.unwrap().position, 10);
        assert_eq!(query.interval.unwrap().end, 100);
    }
}
