// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

/// Install a console subscriber filtered by `debug_flags` on top of `base_level`
///
/// `RUST_LOG`, when set, replaces the computed filter.
pub fn init_logging(debug_flags: &CrateDebugFlags, base_level: &str) -> Result<()> {
    let env_filter = build_env_filter(debug_flags, base_level)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter);

    Registry::default()
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

fn build_env_filter(debug_flags: &CrateDebugFlags, base_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = debug_flags.to_filter_string(base_level);
    EnvFilter::try_new(&directive).map_err(|e| anyhow!("Invalid log filter '{}': {}", directive, e))
}

#[cfg(feature = "file-logging")]
pub use file::{init_file_logging, LoggingGuard};

#[cfg(feature = "file-logging")]
mod file {
    use super::*;
    use anyhow::Context;
    use chrono::{DateTime, Utc};
    use std::path::{Path, PathBuf};
    use tracing_appender::rolling;

    /// Keeps the non-blocking writer alive; logs are flushed on drop
    pub struct LoggingGuard {
        _file_guard: tracing_appender::non_blocking::WorkerGuard,
        log_dir: PathBuf,
    }

    impl LoggingGuard {
        pub fn log_dir(&self) -> &Path {
            &self.log_dir
        }
    }

    /// Console output plus a daily-rotated JSON file under `{log_dir}/run_{timestamp}/`
    pub fn init_file_logging(
        debug_flags: &CrateDebugFlags,
        base_level: &str,
        log_dir: Option<PathBuf>,
    ) -> Result<LoggingGuard> {
        let run_folder = create_run_folder(log_dir.as_deref(), Utc::now())?;

        let console_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(build_env_filter(debug_flags, base_level)?);

        let (non_blocking, guard) =
            tracing_appender::non_blocking(rolling::daily(&run_folder, "genogate.log"));
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .with_filter(build_env_filter(debug_flags, base_level)?);

        Registry::default()
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

        Ok(LoggingGuard {
            _file_guard: guard,
            log_dir: run_folder,
        })
    }

    /// Create `{base}/run_{YYYYmmdd_HHMMSS}`, with `base` defaulting to `./logs`
    pub(super) fn create_run_folder(base: Option<&Path>, started: DateTime<Utc>) -> Result<PathBuf> {
        let base = base.unwrap_or_else(|| Path::new("./logs"));
        let run_folder = base.join(format!("run_{}", started.format("%Y%m%d_%H%M%S")));
        std::fs::create_dir_all(&run_folder)
            .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;
        Ok(run_folder)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_run_folder_is_timestamped() {
            let base = tempfile::tempdir().unwrap();
            let started = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();

            let folder = create_run_folder(Some(base.path()), started).unwrap();
            assert_eq!(folder, base.path().join("run_20250314_092653"));
            assert!(folder.is_dir());

            // A second run in the same second reuses the folder
            assert_eq!(create_run_folder(Some(base.path()), started).unwrap(), folder);
        }

        #[test]
        fn test_unwritable_base_is_reported() {
            let base = tempfile::tempdir().unwrap();
            let blocker = base.path().join("not-a-dir");
            std::fs::write(&blocker, b"").unwrap();

            let err = create_run_folder(Some(&blocker), Utc::now()).unwrap_err();
            assert!(err.to_string().contains("Failed to create log directory"));
        }
    }
}
