// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Length normalization: regions and sequences are widened (or, past the
model's context window, cut) to one of the widths the model accepts.
*/

use crate::types::{Interval, ServiceError, ServiceResult};
use tracing::info;

/// Input widths the model accepts, ascending
pub const SUPPORTED_LENGTHS: [usize; 5] = [2048, 16384, 131072, 524288, 1048576];

/// Largest context window the model accepts
pub const MAX_SUPPORTED_LENGTH: usize = SUPPORTED_LENGTHS[SUPPORTED_LENGTHS.len() - 1];

/// Filler for positions outside the caller's sequence
pub const UNKNOWN_BASE: char = 'N';

/// Smallest supported length `>= length`, capped at [`MAX_SUPPORTED_LENGTH`]
pub fn nearest_supported_length(length: usize) -> usize {
    SUPPORTED_LENGTHS
        .iter()
        .copied()
        .find(|&supported| length <= supported)
        .unwrap_or(MAX_SUPPORTED_LENGTH)
}

/// Resize `interval` around its center to the nearest supported width.
///
/// Coordinates whose width or resized bounds do not fit in `i64` are rejected
/// as invalid input.
pub fn normalize_interval(interval: Interval) -> ServiceResult<Interval> {
    let width = interval
        .checked_width()
        .ok_or_else(|| out_of_range(&interval))?;
    let current = usize::try_from(width).unwrap_or(0);
    let target = nearest_supported_length(current);
    if current == target {
        return Ok(interval);
    }

    info!(target: "genogate-services", "Resizing interval from {} to {} bp", current, target);
    // Supported lengths fit comfortably in i64
    interval
        .resize(target as i64)
        .ok_or_else(|| out_of_range(&interval))
}

fn out_of_range(interval: &Interval) -> ServiceError {
    ServiceError::InvalidInput(format!(
        "interval {} is outside the supported coordinate range",
        interval
    ))
}

/// Pad (centered, with `N`) or truncate (keep the prefix) to the nearest supported length
pub fn normalize_sequence(sequence: &str) -> String {
    let current = sequence.chars().count();
    let target = nearest_supported_length(current);
    if current != target {
        info!(target: "genogate-services", "Fitting sequence from {} to {} bp", current, target);
    }
    fit_sequence(sequence, target)
}

/// Fit `sequence` to exactly `target` characters.
///
/// Shorter input is centered with [`UNKNOWN_BASE`] on both sides (an odd
/// remainder goes to the right). Longer input keeps its first `target`
/// characters; it is not centered.
pub fn fit_sequence(sequence: &str, target: usize) -> String {
    let current = sequence.chars().count();
    if current >= target {
        return sequence.chars().take(target).collect();
    }

    let padding = target - current;
    let left = padding / 2;
    let right = padding - left;

    let mut fitted = String::with_capacity(target);
    fitted.extend(std::iter::repeat(UNKNOWN_BASE).take(left));
    fitted.push_str(sequence);
    fitted.extend(std::iter::repeat(UNKNOWN_BASE).take(right));
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(nearest_supported_length(1), 2048);
        assert_eq!(nearest_supported_length(2048), 2048);
        assert_eq!(nearest_supported_length(2049), 16384);
        assert_eq!(nearest_supported_length(131_073), 524_288);
        assert_eq!(nearest_supported_length(1_048_576), 1_048_576);
        assert_eq!(nearest_supported_length(2_000_000), 1_048_576);
    }

    #[test]
    fn test_range_properties() {
        let probes = (1..=4096)
            .chain((16_000..16_500).step_by(7))
            .chain([131_071, 131_072, 131_073, 524_287, 524_288, 1_048_575, 1_048_577, 5_000_000]);

        let mut previous = 0;
        for length in probes {
            let normalized = nearest_supported_length(length);
            assert!(SUPPORTED_LENGTHS.contains(&normalized), "{} -> {}", length, normalized);
            assert_eq!(nearest_supported_length(normalized), normalized);
            assert!(normalized >= previous, "not monotonic at {}", length);
            if length <= MAX_SUPPORTED_LENGTH {
                assert!(normalized >= length);
            } else {
                assert_eq!(normalized, MAX_SUPPORTED_LENGTH);
            }
            previous = normalized;
        }
    }

    #[test]
    fn test_pad_is_centered() {
        let sequence: String = "ACGT".repeat(510);
        assert_eq!(sequence.len(), 2040);

        let fitted = normalize_sequence(&sequence);
        assert_eq!(fitted.len(), 2048);
        assert_eq!(&fitted[..4], "NNNN");
        assert_eq!(&fitted[2044..], "NNNN");
        assert_eq!(&fitted[4..2044], sequence);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let sequence: String = "ACGTTGCA".repeat(375);
        assert_eq!(sequence.len(), 3000);

        let fitted = normalize_sequence(&sequence);
        assert_eq!(fitted.len(), 16384);
        assert!(fitted.contains(&sequence));

        let truncated = fit_sequence(&sequence, 2048);
        assert_eq!(truncated, sequence[..2048]);
    }

    #[test]
    fn test_oversized_sequence_is_cut_to_window() {
        let sequence = "A".repeat(MAX_SUPPORTED_LENGTH + 10);
        let fitted = normalize_sequence(&sequence);
        assert_eq!(fitted.len(), MAX_SUPPORTED_LENGTH);
    }

    #[test]
    fn test_odd_padding_goes_right() {
        assert_eq!(fit_sequence("ACG", 6), "NACGNN");
    }

    #[test]
    fn test_exact_length_is_untouched() {
        let sequence = "C".repeat(2048);
        assert_eq!(normalize_sequence(&sequence), sequence);

        let interval = Interval::new("chrX", 10_000, 12_048);
        assert_eq!(normalize_interval(interval.clone()).unwrap(), interval);
    }

    #[test]
    fn test_interval_is_resized_around_center() {
        let interval = normalize_interval(Interval::new("chr1", 999_000, 1_001_000)).unwrap();
        assert_eq!(interval, Interval::new("chr1", 998_976, 1_001_024));
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        let interval = Interval::new("chr1", 9_000_000_000_000_000_000, 9_000_000_000_000_002_000);
        let resized = normalize_interval(interval).unwrap();
        assert_eq!(resized.start(), 8_999_999_999_999_999_976);
        assert_eq!(resized.width(), 2048);
    }

    #[test]
    fn test_unrepresentable_interval_is_invalid_input() {
        for interval in [
            Interval::new("chr1", i64::MAX - 10, i64::MAX),
            Interval::new("chr1", i64::MIN, i64::MAX),
        ] {
            match normalize_interval(interval) {
                Err(ServiceError::InvalidInput(message)) => {
                    assert!(message.contains("outside the supported coordinate range"))
                }
                other => panic!("expected invalid input, got {:?}", other),
            }
        }
    }
}
