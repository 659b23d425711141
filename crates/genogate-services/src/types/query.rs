// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Analysis request as seen by the service layer, and its classification into
one of the three prediction modes.
*/

use super::{Interval, ServiceError, ServiceResult, Variant};
use serde::{Deserialize, Serialize};

/// `analysis_type` value that selects variant scoring
pub const SCORE_VARIANT_ANALYSIS: &str = "score_variant";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    pub chromosome: String,
    pub position: i64,
    pub reference_bases: String,
    pub alternate_bases: String,
}

impl VariantSpec {
    pub fn to_variant(&self) -> Variant {
        Variant::new(
            self.chromosome.clone(),
            self.position,
            self.reference_bases.clone(),
            self.alternate_bases.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSpec {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
}

impl IntervalSpec {
    pub fn to_interval(&self) -> Interval {
        Interval::new(self.chromosome.clone(), self.start, self.end)
    }
}

/// One incoming analysis request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisQuery {
    /// Forwarded untouched to the model client
    pub api_key: String,
    pub analysis_type: String,
    pub organism: String,
    pub sequence: Option<String>,
    pub variant: Option<VariantSpec>,
    pub interval: Option<IntervalSpec>,
    pub output_types: Vec<String>,
    pub ontology_terms: Vec<String>,
    pub use_scoring: bool,
}

impl AnalysisQuery {
    pub fn wants_scoring(&self) -> bool {
        self.use_scoring || self.analysis_type == SCORE_VARIANT_ANALYSIS
    }
}

/// Which model operation a request maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPlan {
    VariantEffect {
        variant: Variant,
        interval: Interval,
        scoring: bool,
    },
    IntervalOnly {
        interval: Interval,
    },
    SequenceOnly {
        sequence: String,
    },
}

impl AnalysisPlan {
    /// Precedence: variant + interval, then interval, then sequence.
    ///
    /// A variant without an interval does not select a branch on its own.
    pub fn classify(query: &AnalysisQuery) -> ServiceResult<Self> {
        if let (Some(variant), Some(interval)) = (&query.variant, &query.interval) {
            return Ok(AnalysisPlan::VariantEffect {
                variant: variant.to_variant(),
                interval: interval.to_interval(),
                scoring: query.wants_scoring(),
            });
        }

        if let Some(interval) = &query.interval {
            return Ok(AnalysisPlan::IntervalOnly {
                interval: interval.to_interval(),
            });
        }

        match query.sequence.as_deref() {
            Some(sequence) if !sequence.is_empty() => Ok(AnalysisPlan::SequenceOnly {
                sequence: sequence.to_string(),
            }),
            _ => Err(ServiceError::InvalidInput(
                "request must include a sequence, an interval, or a variant with an interval"
                    .to_string(),
            )),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisPlan::VariantEffect { scoring: true, .. } => "variant_scoring",
            AnalysisPlan::VariantEffect { scoring: false, .. } => "variant_effect",
            AnalysisPlan::IntervalOnly { .. } => "interval",
            AnalysisPlan::SequenceOnly { .. } => "sequence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_spec() -> VariantSpec {
        VariantSpec {
            chromosome: "chr1".to_string(),
            position: 1_000_000,
            reference_bases: "A".to_string(),
            alternate_bases: "G".to_string(),
        }
    }

    fn interval_spec() -> IntervalSpec {
        IntervalSpec {
            chromosome: "chr1".to_string(),
            start: 999_000,
            end: 1_001_000,
        }
    }

    #[test]
    fn test_variant_wins_when_everything_is_present() {
        let query = AnalysisQuery {
            sequence: Some("ACGT".to_string()),
            variant: Some(variant_spec()),
            interval: Some(interval_spec()),
            ..Default::default()
        };
        let plan = AnalysisPlan::classify(&query).unwrap();
        assert!(matches!(plan, AnalysisPlan::VariantEffect { scoring: false, .. }));
    }

    #[test]
    fn test_interval_wins_over_sequence() {
        let query = AnalysisQuery {
            sequence: Some("ACGT".to_string()),
            interval: Some(interval_spec()),
            ..Default::default()
        };
        assert_eq!(
            AnalysisPlan::classify(&query).unwrap(),
            AnalysisPlan::IntervalOnly {
                interval: Interval::new("chr1", 999_000, 1_001_000)
            }
        );
    }

    #[test]
    fn test_variant_without_interval_falls_through_to_sequence() {
        let query = AnalysisQuery {
            sequence: Some("ACGT".to_string()),
            variant: Some(variant_spec()),
            ..Default::default()
        };
        assert_eq!(AnalysisPlan::classify(&query).unwrap().label(), "sequence");
    }

    #[test]
    fn test_nothing_to_analyze_is_invalid_input() {
        let empty = AnalysisQuery::default();
        assert!(matches!(
            AnalysisPlan::classify(&empty),
            Err(ServiceError::InvalidInput(_))
        ));

        let blank_sequence = AnalysisQuery {
            sequence: Some(String::new()),
            variant: Some(variant_spec()),
            ..Default::default()
        };
        assert!(AnalysisPlan::classify(&blank_sequence).is_err());
    }

    #[test]
    fn test_scoring_selected_by_flag_or_analysis_type() {
        let mut query = AnalysisQuery {
            variant: Some(variant_spec()),
            interval: Some(interval_spec()),
            use_scoring: true,
            ..Default::default()
        };
        assert_eq!(AnalysisPlan::classify(&query).unwrap().label(), "variant_scoring");

        query.use_scoring = false;
        query.analysis_type = SCORE_VARIANT_ANALYSIS.to_string();
        assert_eq!(AnalysisPlan::classify(&query).unwrap().label(), "variant_scoring");

        query.analysis_type = "predict_variant".to_string();
        assert_eq!(AnalysisPlan::classify(&query).unwrap().label(), "variant_effect");
    }
}
