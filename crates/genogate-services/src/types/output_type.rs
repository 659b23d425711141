// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal track categories the sequence model predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    Atac,
    Cage,
    Dnase,
    RnaSeq,
    ChipHistone,
    ChipTf,
    SpliceSites,
    SpliceSiteUsage,
    SpliceJunctions,
    ContactMaps,
    Procap,
}

impl OutputType {
    pub const ALL: [OutputType; 11] = [
        OutputType::Atac,
        OutputType::Cage,
        OutputType::Dnase,
        OutputType::RnaSeq,
        OutputType::ChipHistone,
        OutputType::ChipTf,
        OutputType::SpliceSites,
        OutputType::SpliceSiteUsage,
        OutputType::SpliceJunctions,
        OutputType::ContactMaps,
        OutputType::Procap,
    ];

    /// Canonical upper-case name (`RNA_SEQ`)
    pub fn name(self) -> &'static str {
        match self {
            OutputType::Atac => "ATAC",
            OutputType::Cage => "CAGE",
            OutputType::Dnase => "DNASE",
            OutputType::RnaSeq => "RNA_SEQ",
            OutputType::ChipHistone => "CHIP_HISTONE",
            OutputType::ChipTf => "CHIP_TF",
            OutputType::SpliceSites => "SPLICE_SITES",
            OutputType::SpliceSiteUsage => "SPLICE_SITE_USAGE",
            OutputType::SpliceJunctions => "SPLICE_JUNCTIONS",
            OutputType::ContactMaps => "CONTACT_MAPS",
            OutputType::Procap => "PROCAP",
        }
    }

    /// Exact, case-sensitive match on the canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ot| ot.name() == name)
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_serde() {
        for ot in OutputType::ALL {
            let json = serde_json::to_value(ot).unwrap();
            assert_eq!(json, serde_json::Value::String(ot.name().to_string()));
            assert_eq!(OutputType::from_name(ot.name()), Some(ot));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(OutputType::from_name("rna_seq"), None);
        assert_eq!(OutputType::from_name("POLYADENYLATION"), None);
    }
}
