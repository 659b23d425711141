// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # genogate - HTTP gateway for a genomic sequence-prediction model
//!
//! genogate accepts variant, interval and raw-sequence analysis requests as
//! JSON, normalizes them to the context lengths the model accepts, makes one
//! model call per request and returns the predicted tracks (or variant
//! scores) in a uniform JSON shape.
//!
//! ## Crates
//!
//! - [`config`]: TOML configuration with environment and CLI overrides
//! - [`observability`]: logging setup and per-crate debug flags
//! - [`services`]: request classification, length normalization, response assembly
//! - [`api`]: axum router, endpoints and OpenAPI document
//!
//! ## Feature Flags
//!
//! - **`remote-model`** (default): JSON-over-HTTP model backend
//! - **`file-logging`**: daily-rotated JSON log files
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genogate::prelude::*;
//!
//! let service = AnalysisServiceImpl::new(capability, ResponseAssembler::default());
//! let app = create_http_server(
//!     ApiState { analysis_service: Arc::new(service) },
//!     &config.cors,
//! );
//! ```

pub use genogate_api as api;
pub use genogate_config as config;
pub use genogate_observability as observability;
pub use genogate_services as services;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude with the types needed to assemble a server
pub mod prelude {
    pub use genogate_api::{create_http_server, ApiState};
    pub use genogate_config::{load_config, validate_config, GatewayConfig};
    pub use genogate_services::{
        AnalysisService, AnalysisServiceImpl, ModelBackend, ModelCapability, ResponseAssembler,
    };
}
