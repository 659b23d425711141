// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Result records, one per dispatch branch. They serialize to the flat JSON
objects the web front end reads under `data`.
*/

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Shape, metadata and (for allele predictions) a bounded value preview of one track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub shape: Vec<usize>,
    pub metadata: Vec<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_sample: Option<Value>,
}

/// Track summaries keyed by attribute name, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMap(Vec<(String, TrackSummary)>);

impl TrackMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing entry with the same key, keeping its position
    pub fn insert(&mut self, attribute: impl Into<String>, summary: TrackSummary) {
        let attribute = attribute.into();
        match self.0.iter_mut().find(|(key, _)| *key == attribute) {
            Some(entry) => entry.1 = summary,
            None => self.0.push((attribute, summary)),
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&TrackSummary> {
        self.0
            .iter()
            .find(|(key, _)| key == attribute)
            .map(|(_, summary)| summary)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TrackMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, summary) in &self.0 {
            map.serialize_entry(key, summary)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantEffectResult {
    pub reference: TrackMap,
    pub alternate: TrackMap,
    pub variant: String,
    pub interval: String,
    pub interval_length: i64,
    pub output_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    /// Distinct non-null `gene_symbol` values.
    ///
    /// A missing symbol is not counted as a gene of its own: rows without one
    /// (intergenic scorers) add nothing, so an all-null column reports 0.
    pub total_genes: usize,
    /// Rows in the tidy table
    pub total_tracks: usize,
    /// Distinct `variant_scorer` values, first-seen order
    pub scorers_used: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantScoringResult {
    pub variant: String,
    pub interval: String,
    pub interval_length: i64,
    pub scoring_results: Vec<Map<String, Value>>,
    pub output_types: Vec<String>,
    pub score_summary: ScoreSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalResult {
    pub interval: String,
    pub interval_length: i64,
    pub output_types: Vec<String>,
    #[serde(flatten)]
    pub tracks: TrackMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResult {
    pub sequence_length: usize,
    pub output_types: Vec<String>,
    #[serde(flatten)]
    pub tracks: TrackMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    VariantEffect(VariantEffectResult),
    VariantScoring(VariantScoringResult),
    Interval(IntervalResult),
    Sequence(SequenceResult),
}
