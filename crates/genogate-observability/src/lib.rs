// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # genogate-observability
//!
//! Logging setup shared by the genogate crates, with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: daily-rotated JSON log files next to the console output

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Log targets / crate names accepted by `--debug-{crate}`
///
/// `EnvFilter` matches targets by prefix, so no entry may be a prefix of another.
pub const KNOWN_CRATES: &[&str] = &[
    "genogate-server",
    "genogate-api",
    "genogate-services",
    "genogate-config",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_crates_are_not_prefixes() {
        for a in KNOWN_CRATES {
            for b in KNOWN_CRATES {
                if a != b {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }
}
