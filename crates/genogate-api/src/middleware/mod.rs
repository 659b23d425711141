// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Middleware for HTTP requests

pub mod cors;
pub mod logging;

pub use cors::create_cors_layer;
pub use logging::log_request_response_bodies;
