// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Prediction payloads returned by the sequence model: numeric tracks with
row-wise metadata, and plain tables (tidy variant scores).
*/

use super::OutputType;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Column-ordered table of JSON cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column, `None` when the table has no such column.
    /// Short rows yield `Value::Null`.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value> + 'a> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(index).unwrap_or(&NULL)),
        )
    }

    /// One mapping per row, keys in column order
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| (column.clone(), row.get(i).cloned().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect()
    }
}

/// N-dimensional values plus one metadata row per channel
#[derive(Debug, Clone, PartialEq)]
pub struct TrackData {
    pub values: ArrayD<f32>,
    pub metadata: DataTable,
}

impl TrackData {
    pub fn new(values: ArrayD<f32>, metadata: DataTable) -> Self {
        Self { values, metadata }
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }
}

/// Model output for one sequence, region or allele
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub atac: Option<TrackData>,
    pub cage: Option<TrackData>,
    pub dnase: Option<TrackData>,
    pub rna_seq: Option<TrackData>,
    pub chip_histone: Option<TrackData>,
    pub chip_tf: Option<TrackData>,
    pub splice_sites: Option<TrackData>,
    pub splice_site_usage: Option<TrackData>,
    pub splice_junctions: Option<TrackData>,
    pub contact_maps: Option<TrackData>,
    pub procap: Option<TrackData>,
}

impl Output {
    /// Track for `output_type`, `None` when the model did not return it
    pub fn track(&self, output_type: OutputType) -> Option<&TrackData> {
        match output_type {
            OutputType::Atac => self.atac.as_ref(),
            OutputType::Cage => self.cage.as_ref(),
            OutputType::Dnase => self.dnase.as_ref(),
            OutputType::RnaSeq => self.rna_seq.as_ref(),
            OutputType::ChipHistone => self.chip_histone.as_ref(),
            OutputType::ChipTf => self.chip_tf.as_ref(),
            OutputType::SpliceSites => self.splice_sites.as_ref(),
            OutputType::SpliceSiteUsage => self.splice_site_usage.as_ref(),
            OutputType::SpliceJunctions => self.splice_junctions.as_ref(),
            OutputType::ContactMaps => self.contact_maps.as_ref(),
            OutputType::Procap => self.procap.as_ref(),
        }
    }

    pub fn set_track(&mut self, output_type: OutputType, track: TrackData) {
        let slot = match output_type {
            OutputType::Atac => &mut self.atac,
            OutputType::Cage => &mut self.cage,
            OutputType::Dnase => &mut self.dnase,
            OutputType::RnaSeq => &mut self.rna_seq,
            OutputType::ChipHistone => &mut self.chip_histone,
            OutputType::ChipTf => &mut self.chip_tf,
            OutputType::SpliceSites => &mut self.splice_sites,
            OutputType::SpliceSiteUsage => &mut self.splice_site_usage,
            OutputType::SpliceJunctions => &mut self.splice_junctions,
            OutputType::ContactMaps => &mut self.contact_maps,
            OutputType::Procap => &mut self.procap,
        };
        *slot = Some(track);
    }

    pub fn with_track(mut self, output_type: OutputType, track: TrackData) -> Self {
        self.set_track(output_type, track);
        self
    }
}

/// Reference and alternate allele predictions over the same interval
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantOutput {
    pub reference: Output,
    pub alternate: Output,
}
