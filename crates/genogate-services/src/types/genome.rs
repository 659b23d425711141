// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genomic value objects handed to the sequence model.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organism whose reference genome the model should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Organism {
    #[default]
    HomoSapiens,
    MusMusculus,
}

impl Organism {
    /// `"mouse"` selects mouse; every other tag falls back to human
    pub fn from_tag(tag: &str) -> Self {
        if tag == "mouse" {
            Organism::MusMusculus
        } else {
            Organism::HomoSapiens
        }
    }
}

/// Single-position substitution (1-based position)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    chromosome: String,
    position: i64,
    reference_bases: String,
    alternate_bases: String,
}

impl Variant {
    pub fn new(
        chromosome: impl Into<String>,
        position: i64,
        reference_bases: impl Into<String>,
        alternate_bases: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            position,
            reference_bases: reference_bases.into(),
            alternate_bases: alternate_bases.into(),
        }
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn reference_bases(&self) -> &str {
        &self.reference_bases
    }

    pub fn alternate_bases(&self) -> &str {
        &self.alternate_bases
    }
}

/// `chr1:1000000:A>G`
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}>{}",
            self.chromosome, self.position, self.reference_bases, self.alternate_bases
        )
    }
}

/// Half-open `[start, end)` range on a chromosome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    chromosome: String,
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(chromosome: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
        }
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Saturates at the `i64` bounds; see [`Interval::checked_width`]
    pub fn width(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    pub fn checked_width(&self) -> Option<i64> {
        self.end.checked_sub(self.start)
    }

    /// Midpoint, rounded towards negative infinity. Never overflows.
    pub fn center(&self) -> i64 {
        let carry = (self.start.rem_euclid(2) + self.end.rem_euclid(2)) / 2;
        self.start.div_euclid(2) + self.end.div_euclid(2) + carry
    }

    /// Same center, new width. The extra base of an odd width goes to the right.
    ///
    /// `None` when the resized coordinates do not fit in `i64`.
    pub fn resize(&self, width: i64) -> Option<Interval> {
        let start = self.center().checked_sub(width.div_euclid(2))?;
        let end = start.checked_add(width)?;
        Some(Interval {
            chromosome: self.chromosome.clone(),
            start,
            end,
        })
    }
}

/// `chr1:998976-1001024`
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}
