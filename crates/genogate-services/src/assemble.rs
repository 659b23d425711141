// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Response assembly: model results flattened into the per-branch result records.
*/

use crate::output_types::ResolvedOutput;
use crate::types::*;
use ndarray::{ArrayD, ArrayViewD, Axis, Slice};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Default number of rows kept in `values_sample`
pub const DEFAULT_SAMPLE_ROWS: usize = 100;

/// Builds result records from model outputs
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    sample_rows: usize,
}

impl Default for ResponseAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_ROWS)
    }
}

impl ResponseAssembler {
    pub fn new(sample_rows: usize) -> Self {
        Self { sample_rows }
    }

    pub fn sample_rows(&self) -> usize {
        self.sample_rows
    }

    pub fn summarize_track(&self, track: &TrackData, with_sample: bool) -> TrackSummary {
        TrackSummary {
            shape: track.shape().to_vec(),
            metadata: track.metadata.to_records(),
            values_sample: with_sample.then(|| values_sample(&track.values, self.sample_rows)),
        }
    }

    /// Both alleles carry a track only when both predictions returned it
    pub fn variant_effect(
        &self,
        variant: &Variant,
        interval: &Interval,
        requested: &[ResolvedOutput],
        output_types: Vec<String>,
        outputs: &VariantOutput,
    ) -> VariantEffectResult {
        let mut reference = TrackMap::new();
        let mut alternate = TrackMap::new();

        for resolved in requested {
            let ref_track = outputs.reference.track(resolved.output_type);
            let alt_track = outputs.alternate.track(resolved.output_type);
            match (ref_track, alt_track) {
                (Some(ref_track), Some(alt_track)) => {
                    debug!(target: "genogate-services", "Extracted {} data: {:?}", resolved.name, ref_track.shape());
                    reference.insert(resolved.attribute.clone(), self.summarize_track(ref_track, true));
                    alternate.insert(resolved.attribute.clone(), self.summarize_track(alt_track, true));
                }
                _ => {
                    debug!(target: "genogate-services", "No data for {} in variant predictions", resolved.name);
                }
            }
        }

        VariantEffectResult {
            reference,
            alternate,
            variant: variant.to_string(),
            interval: interval.to_string(),
            interval_length: interval.width(),
            output_types,
        }
    }

    pub fn variant_scoring(
        &self,
        variant: &Variant,
        interval: &Interval,
        scores: &DataTable,
    ) -> VariantScoringResult {
        VariantScoringResult {
            variant: variant.to_string(),
            interval: interval.to_string(),
            interval_length: interval.width(),
            scoring_results: scores.to_records(),
            output_types: vec!["SCORING".to_string()],
            score_summary: summarize_scores(scores),
        }
    }

    pub fn interval(
        &self,
        interval: &Interval,
        requested: &[ResolvedOutput],
        output_types: Vec<String>,
        output: &Output,
    ) -> IntervalResult {
        IntervalResult {
            interval: interval.to_string(),
            interval_length: interval.width(),
            output_types,
            tracks: self.region_tracks(requested, output),
        }
    }

    pub fn sequence(
        &self,
        sequence_length: usize,
        requested: &[ResolvedOutput],
        output_types: Vec<String>,
        output: &Output,
    ) -> SequenceResult {
        SequenceResult {
            sequence_length,
            output_types,
            tracks: self.region_tracks(requested, output),
        }
    }

    fn region_tracks(&self, requested: &[ResolvedOutput], output: &Output) -> TrackMap {
        let mut tracks = TrackMap::new();
        for resolved in requested {
            match output.track(resolved.output_type) {
                Some(track) => tracks.insert(resolved.attribute.clone(), self.summarize_track(track, false)),
                None => {
                    debug!(target: "genogate-services", "No data for {}", resolved.name);
                }
            }
        }
        tracks
    }
}

/// First `rows` entries along axis 0, every other axis kept whole, as nested JSON arrays
///
/// A 0-d array has no rows and yields an empty array.
pub fn values_sample(values: &ArrayD<f32>, rows: usize) -> Value {
    if values.ndim() == 0 {
        return Value::Array(Vec::new());
    }
    let keep = rows.min(values.len_of(Axis(0)));
    nested_json(values.slice_axis(Axis(0), Slice::from(0..keep)))
}

fn nested_json(view: ArrayViewD<'_, f32>) -> Value {
    if view.ndim() == 0 {
        return view.iter().next().map_or(Value::Null, |v| json_number(*v));
    }
    if view.ndim() == 1 {
        return Value::Array(view.iter().map(|v| json_number(*v)).collect());
    }
    Value::Array(view.outer_iter().map(nested_json).collect())
}

/// Non-finite values become `null`
fn json_number(value: f32) -> Value {
    serde_json::Number::from_f64(f64::from(value)).map_or(Value::Null, Value::Number)
}

/// Gene, row and scorer counts over a tidy scores table
pub fn summarize_scores(scores: &DataTable) -> ScoreSummary {
    let total_genes = scores
        .column("gene_symbol")
        .map(|genes| {
            genes
                .filter(|gene| !gene.is_null())
                .map(Value::to_string)
                .collect::<HashSet<_>>()
                .len()
        })
        .unwrap_or(0);

    let scorers_used = scores
        .column("variant_scorer")
        .map(|scorers| {
            let mut seen = HashSet::new();
            scorers
                .filter(|scorer| seen.insert(scorer.to_string()))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    ScoreSummary {
        total_genes,
        total_tracks: scores.len(),
        scorers_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output_types::resolve_all;
    use ndarray::{Array, IxDyn};
    use serde_json::json;

    fn metadata(channels: usize) -> DataTable {
        DataTable::new(
            vec!["name".to_string(), "ontology_curie".to_string()],
            (0..channels)
                .map(|i| vec![json!(format!("track_{}", i)), json!("UBERON:0002048")])
                .collect(),
        )
    }

    fn track(rows: usize, channels: usize, fill: f32) -> TrackData {
        TrackData::new(
            Array::from_elem(IxDyn(&[rows, channels]), fill),
            metadata(channels),
        )
    }

    fn requested(names: &[&str]) -> Vec<ResolvedOutput> {
        resolve_all(&names.iter().map(|n| n.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_values_sample_caps_first_axis() {
        let values = Array::from_shape_fn(IxDyn(&[2048, 3]), |idx| idx[0] as f32);
        let sample = values_sample(&values, 100);

        let rows = sample.as_array().unwrap();
        assert_eq!(rows.len(), 100);
        assert_eq!(rows[0], json!([0.0, 0.0, 0.0]));
        assert_eq!(rows[99].as_array().unwrap().len(), 3);
        assert_eq!(rows[99][0], json!(99.0));
    }

    #[test]
    fn test_values_sample_short_and_odd_shapes() {
        let short = Array::from_elem(IxDyn(&[5, 2]), 1.5f32);
        assert_eq!(values_sample(&short, 100).as_array().unwrap().len(), 5);

        let vector = Array::from_elem(IxDyn(&[300]), 0.25f32);
        assert_eq!(values_sample(&vector, 100).as_array().unwrap().len(), 100);

        let cube = Array::from_elem(IxDyn(&[150, 4, 2]), 0.0f32);
        let sample = values_sample(&cube, 100);
        assert_eq!(sample.as_array().unwrap().len(), 100);
        assert_eq!(sample[0], json!([[0.0, 0.0], [0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]));

        let scalar = Array::from_elem(IxDyn(&[]), 2.0f32);
        assert_eq!(values_sample(&scalar, 100), json!([]));
    }

    #[test]
    fn test_non_finite_values_become_null() {
        let values = Array::from_shape_vec(IxDyn(&[1, 3]), vec![f32::NAN, 1.0, f32::INFINITY]).unwrap();
        assert_eq!(values_sample(&values, 100), json!([[null, 1.0, null]]));
    }

    #[test]
    fn test_variant_effect_requires_both_alleles() {
        let outputs = VariantOutput {
            reference: Output::default()
                .with_track(OutputType::RnaSeq, track(2048, 2, 1.0))
                .with_track(OutputType::Dnase, track(2048, 1, 1.0)),
            alternate: Output::default().with_track(OutputType::RnaSeq, track(2048, 2, 2.0)),
        };
        let variant = Variant::new("chr1", 1_000_000, "A", "G");
        let interval = Interval::new("chr1", 998_976, 1_001_024);

        let result = ResponseAssembler::default().variant_effect(
            &variant,
            &interval,
            &requested(&["RNA_SEQ", "DNASE", "CAGE"]),
            vec!["RNA_SEQ".to_string(), "DNASE".to_string(), "CAGE".to_string()],
            &outputs,
        );

        assert_eq!(result.reference.keys().collect::<Vec<_>>(), vec!["rna_seq"]);
        assert_eq!(result.alternate.keys().collect::<Vec<_>>(), vec!["rna_seq"]);
        assert_eq!(result.interval_length, 2048);
        assert_eq!(result.variant, "chr1:1000000:A>G");

        let alt = result.alternate.get("rna_seq").unwrap();
        assert_eq!(alt.shape, vec![2048, 2]);
        assert_eq!(alt.metadata.len(), 2);
        let sample = alt.values_sample.as_ref().unwrap().as_array().unwrap();
        assert_eq!(sample.len(), 100);
        assert_eq!(sample[0], json!([2.0, 2.0]));
    }

    #[test]
    fn test_region_tracks_have_no_sample() {
        let output = Output::default().with_track(OutputType::Atac, track(16384, 4, 0.0));
        let result = ResponseAssembler::default().sequence(
            16384,
            &requested(&["ATAC", "CAGE"]),
            vec!["ATAC".to_string(), "CAGE".to_string()],
            &output,
        );

        assert_eq!(result.tracks.len(), 1);
        let atac = result.tracks.get("atac").unwrap();
        assert_eq!(atac.shape, vec![16384, 4]);
        assert!(atac.values_sample.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["atac"].get("values_sample").is_none());
        assert_eq!(json["sequence_length"], 16384);
    }

    #[test]
    fn test_score_summary() {
        let scores = DataTable::new(
            vec![
                "variant_id".to_string(),
                "gene_symbol".to_string(),
                "variant_scorer".to_string(),
                "raw_score".to_string(),
            ],
            vec![
                vec![json!("v"), json!("TP53"), json!("GeneMaskLFCScorer"), json!(0.1)],
                vec![json!("v"), json!("TP53"), json!("GeneMaskLFCScorer"), json!(0.2)],
                vec![json!("v"), json!("WRAP53"), json!("GeneMaskLFCScorer"), json!(0.3)],
                vec![json!("v"), Value::Null, json!("CenterMaskScorer"), json!(0.4)],
            ],
        );

        let summary = summarize_scores(&scores);
        assert_eq!(summary.total_genes, 2);
        assert_eq!(summary.total_tracks, 4);
        assert_eq!(
            summary.scorers_used,
            vec![json!("GeneMaskLFCScorer"), json!("CenterMaskScorer")]
        );
    }

    #[test]
    fn test_null_gene_symbols_are_not_a_gene() {
        let scores = DataTable::new(
            vec!["gene_symbol".to_string(), "variant_scorer".to_string()],
            vec![
                vec![Value::Null, json!("CenterMaskScorer")],
                vec![Value::Null, json!("CenterMaskScorer")],
            ],
        );

        let summary = summarize_scores(&scores);
        assert_eq!(summary.total_genes, 0);
        assert_eq!(summary.total_tracks, 2);
    }

    #[test]
    fn test_score_summary_without_columns() {
        let scores = DataTable::new(vec!["raw_score".to_string()], vec![vec![json!(1.0)]]);
        let summary = summarize_scores(&scores);
        assert_eq!(summary.total_genes, 0);
        assert_eq!(summary.total_tracks, 1);
        assert!(summary.scorers_used.is_empty());
    }

    #[test]
    fn test_scoring_result_shape() {
        let scores = DataTable::new(vec!["gene_symbol".to_string()], vec![vec![json!("BRCA1")]]);
        let result = ResponseAssembler::default().variant_scoring(
            &Variant::new("chr17", 43_044_295, "T", "C"),
            &Interval::new("chr17", 42_520_007, 43_568_583),
            &scores,
        );
        let json = serde_json::to_value(AnalysisResult::VariantScoring(result)).unwrap();
        assert_eq!(json["output_types"], json!(["SCORING"]));
        assert_eq!(json["scoring_results"], json!([{"gene_symbol": "BRCA1"}]));
        assert_eq!(json["score_summary"]["total_genes"], 1);
        assert_eq!(json["interval_length"], 1_048_576);
    }
}
