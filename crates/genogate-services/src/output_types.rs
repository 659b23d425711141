// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Output type resolution: requested names to model enum values and the
attribute names used as response keys.
*/

use crate::types::OutputType;
use tracing::debug;

/// Canonical output-type name -> response attribute
const OUTPUT_ATTRIBUTES: &[(&str, &str)] = &[
    ("RNA_SEQ", "rna_seq"),
    ("DNASE", "dnase"),
    ("ATAC", "atac"),
    ("CAGE", "cage"),
    ("CHIP_HISTONE", "chip_histone"),
    ("CHIP_TF", "chip_tf"),
    ("PROCAP", "procap"),
    ("SPLICE_SITES", "splice_sites"),
    ("SPLICE_SITE_USAGE", "splice_site_usage"),
    ("SPLICE_JUNCTIONS", "splice_junctions"),
    ("CONTACT_MAPS", "contact_maps"),
];

/// A requested name the model understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    pub name: String,
    pub output_type: OutputType,
    pub attribute: String,
}

/// Mapped attribute for known names, the lower-cased name otherwise
pub fn attribute_name(name: &str) -> String {
    OUTPUT_ATTRIBUTES
        .iter()
        .find(|(canonical, _)| *canonical == name)
        .map(|(_, attribute)| attribute.to_string())
        .unwrap_or_else(|| name.to_lowercase())
}

/// `None` when the model has no output type with this name
pub fn resolve(name: &str) -> Option<ResolvedOutput> {
    let output_type = OutputType::from_name(name)?;
    Some(ResolvedOutput {
        name: name.to_string(),
        output_type,
        attribute: attribute_name(name),
    })
}

/// Drop repeated names, keeping the first occurrence
pub fn dedup_names(names: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(name) {
            unique.push(name.clone());
        }
    }
    unique
}

/// Resolve every name, silently skipping the ones the model does not know
pub fn resolve_all(names: &[String]) -> Vec<ResolvedOutput> {
    dedup_names(names)
        .iter()
        .filter_map(|name| {
            let resolved = resolve(name);
            if resolved.is_none() {
                debug!(target: "genogate-services", "Dropping unknown output type '{}'", name);
            }
            resolved
        })
        .collect()
}
