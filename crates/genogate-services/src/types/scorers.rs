// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Variant scorer descriptors understood by the model's scoring operation.
*/

use super::OutputType;
use serde::{Deserialize, Serialize};

/// How a center-mask scorer aggregates reference/alternate differences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    DiffMean,
    DiffSum,
    DiffSumLog2,
    DiffLog2Sum,
    L2DiffLog1p,
    ActiveMean,
    ActiveSum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scorer", rename_all = "snake_case")]
pub enum VariantScorer {
    CenterMask {
        requested_output: OutputType,
        width: Option<u32>,
        aggregation_type: AggregationType,
    },
    ContactMap,
    GeneMaskLfc {
        requested_output: OutputType,
    },
    GeneMaskActive {
        requested_output: OutputType,
    },
    GeneMaskSplicing {
        requested_output: OutputType,
        width: Option<u32>,
    },
    SpliceJunction,
    Polyadenylation,
}

fn center_mask(output: OutputType, width: u32, aggregation_type: AggregationType) -> VariantScorer {
    VariantScorer::CenterMask {
        requested_output: output,
        width: Some(width),
        aggregation_type,
    }
}

/// The complete recommended scorer battery, keyed the way the model names it
pub fn recommended_variant_scorers() -> Vec<(&'static str, VariantScorer)> {
    use AggregationType::{ActiveSum, DiffLog2Sum};
    use OutputType::*;

    vec![
        ("ATAC", center_mask(Atac, 501, DiffLog2Sum)),
        ("ATAC_ACTIVE", center_mask(Atac, 501, ActiveSum)),
        ("CAGE", center_mask(Cage, 501, DiffLog2Sum)),
        ("CAGE_ACTIVE", center_mask(Cage, 501, ActiveSum)),
        ("CHIP_HISTONE", center_mask(ChipHistone, 2001, DiffLog2Sum)),
        ("CHIP_HISTONE_ACTIVE", center_mask(ChipHistone, 2001, ActiveSum)),
        ("CHIP_TF", center_mask(ChipTf, 501, DiffLog2Sum)),
        ("CHIP_TF_ACTIVE", center_mask(ChipTf, 501, ActiveSum)),
        ("CONTACT_MAPS", VariantScorer::ContactMap),
        ("DNASE", center_mask(Dnase, 501, DiffLog2Sum)),
        ("DNASE_ACTIVE", center_mask(Dnase, 501, ActiveSum)),
        ("POLYADENYLATION", VariantScorer::Polyadenylation),
        ("PROCAP", center_mask(Procap, 501, DiffLog2Sum)),
        ("PROCAP_ACTIVE", center_mask(Procap, 501, ActiveSum)),
        (
            "RNA_SEQ",
            VariantScorer::GeneMaskLfc {
                requested_output: RnaSeq,
            },
        ),
        (
            "RNA_SEQ_ACTIVE",
            VariantScorer::GeneMaskActive {
                requested_output: RnaSeq,
            },
        ),
        ("SPLICE_JUNCTIONS", VariantScorer::SpliceJunction),
        (
            "SPLICE_SITES",
            VariantScorer::GeneMaskSplicing {
                requested_output: SpliceSites,
                width: None,
            },
        ),
        (
            "SPLICE_SITE_USAGE",
            VariantScorer::GeneMaskSplicing {
                requested_output: SpliceSiteUsage,
                width: None,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recommended_keys_are_unique() {
        let scorers = recommended_variant_scorers();
        let keys: HashSet<&str> = scorers.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), scorers.len());
    }

    #[test]
    fn test_every_output_type_has_a_scorer() {
        let scorers = recommended_variant_scorers();
        for ot in OutputType::ALL {
            assert!(
                scorers.iter().any(|(key, _)| *key == ot.name()),
                "missing scorer for {}",
                ot
            );
        }
    }

    #[test]
    fn test_scorer_wire_format() {
        let json = serde_json::to_value(VariantScorer::GeneMaskLfc {
            requested_output: OutputType::RnaSeq,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"scorer": "gene_mask_lfc", "requested_output": "RNA_SEQ"})
        );
    }
}
