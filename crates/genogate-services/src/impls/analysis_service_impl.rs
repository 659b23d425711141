// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Analysis service implementation: request classification, dispatch to the
model client and response assembly.
*/

use crate::assemble::ResponseAssembler;
use crate::normalize::{normalize_interval, normalize_sequence};
use crate::output_types::{dedup_names, resolve_all};
use crate::traits::{AnalysisService, ModelCapability};
use crate::types::*;
use async_trait::async_trait;
use tracing::{debug, info};

/// Default implementation of AnalysisService
pub struct AnalysisServiceImpl {
    capability: ModelCapability,
    assembler: ResponseAssembler,
}

impl AnalysisServiceImpl {
    pub fn new(capability: ModelCapability, assembler: ResponseAssembler) -> Self {
        Self {
            capability,
            assembler,
        }
    }
}

#[async_trait]
impl AnalysisService for AnalysisServiceImpl {
    async fn analyze(&self, query: AnalysisQuery) -> ServiceResult<AnalysisResult> {
        let backend = self.capability.backend()?;
        let plan = AnalysisPlan::classify(&query)?;
        debug!(target: "genogate-services", "Dispatching {} analysis", plan.label());

        let organism = Organism::from_tag(&query.organism);
        let output_types = dedup_names(&query.output_types);
        let requested = resolve_all(&output_types);
        let requested_outputs: Vec<OutputType> =
            requested.iter().map(|resolved| resolved.output_type).collect();

        let model = backend.create_client(&query.api_key)?;

        match plan {
            AnalysisPlan::VariantEffect {
                variant,
                interval,
                scoring: true,
            } => {
                let interval = normalize_interval(interval)?;
                let scorers: Vec<VariantScorer> = recommended_variant_scorers()
                    .into_iter()
                    .map(|(_, scorer)| scorer)
                    .collect();
                info!(target: "genogate-services", "Scoring variant {} with {} scorers", variant, scorers.len());

                let scores = model
                    .score_variant(&interval, &variant, &scorers, organism)
                    .await?;
                debug!(target: "genogate-services", "Scoring returned {} rows", scores.len());

                Ok(AnalysisResult::VariantScoring(
                    self.assembler.variant_scoring(&variant, &interval, &scores),
                ))
            }
            AnalysisPlan::VariantEffect {
                variant,
                interval,
                scoring: false,
            } => {
                let interval = normalize_interval(interval)?;
                info!(target: "genogate-services", "Predicting variant {} in {}", variant, interval);

                let outputs = model
                    .predict_variant(
                        &interval,
                        &variant,
                        organism,
                        &requested_outputs,
                        &query.ontology_terms,
                    )
                    .await?;

                Ok(AnalysisResult::VariantEffect(self.assembler.variant_effect(
                    &variant,
                    &interval,
                    &requested,
                    output_types,
                    &outputs,
                )))
            }
            AnalysisPlan::IntervalOnly { interval } => {
                let interval = normalize_interval(interval)?;
                info!(target: "genogate-services", "Predicting interval {}", interval);

                let output = model
                    .predict_interval(&interval, organism, &requested_outputs, &query.ontology_terms)
                    .await?;

                Ok(AnalysisResult::Interval(self.assembler.interval(
                    &interval,
                    &requested,
                    output_types,
                    &output,
                )))
            }
            AnalysisPlan::SequenceOnly { sequence } => {
                let sequence = normalize_sequence(&sequence);
                let sequence_length = sequence.chars().count();
                info!(target: "genogate-services", "Predicting sequence of {} bp", sequence_length);

                let output = model
                    .predict_sequence(&sequence, organism, &requested_outputs, &query.ontology_terms)
                    .await?;

                Ok(AnalysisResult::Sequence(self.assembler.sequence(
                    sequence_length,
                    &requested,
                    output_types,
                    &output,
                )))
            }
        }
    }

    fn model_available(&self) -> bool {
        self.capability.is_available()
    }
}
