// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! genogate server
//!
//! Run with: `genogate [--config=PATH] [--api-host=HOST] [--api-port=PORT]
//! [--model-endpoint=URL] [--log-level=LEVEL] [--log-dir=PATH] [--cors-origins=A,B] [--debug-all]`

use anyhow::Context;
use genogate::prelude::*;
use genogate_config::parse_cli_args;
use genogate_observability::{debug_flags_help, parse_debug_flags};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let cli_overrides = parse_cli_args(args.iter().cloned());
    let config_path = cli_overrides.get("config").map(PathBuf::from);
    let config = load_config(config_path.as_deref(), Some(&cli_overrides))
        .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let debug_flags = parse_debug_flags();
    #[cfg(feature = "file-logging")]
    let _log_guard = {
        let guard = genogate_observability::init_file_logging(
            &debug_flags,
            &config.logging.log_level,
            config.logging.log_dir.clone(),
        )?;
        info!(target: "genogate-server", "Writing logs to {}", guard.log_dir().display());
        guard
    };
    #[cfg(not(feature = "file-logging"))]
    genogate_observability::init_logging(&debug_flags, &config.logging.log_level)?;

    let capability = model_capability(&config)?;
    if !capability.is_available() {
        warn!(target: "genogate-server", "No model endpoint configured; analysis requests will fail until one is set");
    }

    let service = AnalysisServiceImpl::new(
        capability,
        ResponseAssembler::new(config.analysis.values_sample_rows),
    );
    let app = create_http_server(
        ApiState {
            analysis_service: Arc::new(service),
        },
        &config.cors,
    );

    let bind_address = config.api.bind_address();
    let listener = tokio::net::TcpListener::bind(bind_address.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!(target: "genogate-server", "🚀 genogate {} listening on http://{}", genogate::VERSION, bind_address);
    info!(target: "genogate-server", "Frontend should connect to: http://{}/api/analyze", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(target: "genogate-server", "Server stopped");
    Ok(())
}

#[cfg(feature = "remote-model")]
fn model_capability(config: &GatewayConfig) -> anyhow::Result<ModelCapability> {
    use genogate_services::RemoteModelBackend;

    match config.model.endpoint.as_deref() {
        Some(endpoint) => {
            let backend = RemoteModelBackend::new(endpoint)?;
            info!(target: "genogate-server", "Using model server at {}", backend.endpoint());
            Ok(ModelCapability::available(Arc::new(backend)))
        }
        None => Ok(ModelCapability::unavailable()),
    }
}

#[cfg(not(feature = "remote-model"))]
fn model_capability(_config: &GatewayConfig) -> anyhow::Result<ModelCapability> {
    Ok(ModelCapability::unavailable())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "genogate-server", "Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!(target: "genogate-server", "Shutdown signal received");
}

fn print_help() {
    println!(
        r#"genogate {}

Usage: genogate [OPTIONS]

Options:
  --config=PATH                  Configuration file (default: search for genogate.toml)
  --api-host=HOST                Bind host
  --api-port=PORT                Bind port
  --model-endpoint=URL           Model server base URL
  --log-level=LEVEL              Base log level
  --log-dir=PATH                 Log folder base (file-logging builds)
  --cors-origins=A,B             Allowed CORS origins

{}"#,
        genogate::VERSION,
        debug_flags_help()
    );
}
