// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic types for the service layer.
*/

pub mod errors;
pub mod genome;
pub mod output_type;
pub mod query;
pub mod results;
pub mod scorers;
pub mod track;

// Re-export for convenience
pub use errors::{ServiceError, ServiceResult};
pub use genome::{Interval, Organism, Variant};
pub use output_type::OutputType;
pub use query::{AnalysisPlan, AnalysisQuery, IntervalSpec, VariantSpec, SCORE_VARIANT_ANALYSIS};
pub use results::{
    AnalysisResult, IntervalResult, ScoreSummary, SequenceResult, TrackMap, TrackSummary,
    VariantEffectResult, VariantScoringResult,
};
pub use scorers::{recommended_variant_scorers, AggregationType, VariantScorer};
pub use track::{DataTable, Output, TrackData, VariantOutput};
