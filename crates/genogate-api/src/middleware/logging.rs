// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Request/response body logging (debug level)

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

/// Responses at or above this size are not logged
const MAX_LOGGED_RESPONSE_BYTES: usize = 10_000;

const REDACTED: &str = "***";

/// Middleware to log request and response bodies for debugging
pub async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    // Only log bodies for POST/PUT/PATCH requests
    let should_log_request = matches!(parts.method.as_str(), "POST" | "PUT" | "PATCH");

    let body_bytes = if should_log_request {
        let bytes = body
            .collect()
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .to_bytes();
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if !body_str.is_empty() {
                tracing::debug!(target: "genogate-api", "📥 Request body: {}", redact_api_key(body_str));
            }
        }
        bytes
    } else {
        Bytes::new()
    };

    // Reconstruct request with original body
    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .to_bytes();

    if bytes.len() < MAX_LOGGED_RESPONSE_BYTES {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if body_str.starts_with('{') {
                tracing::debug!(target: "genogate-api", "📤 Response body: {}", body_str);
            }
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Replace a top-level `api_key` string in a JSON body
///
/// Bodies that are not JSON objects are returned unchanged.
pub fn redact_api_key(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(mut map)) => {
            if let Some(key) = map.get_mut("api_key") {
                *key = serde_json::Value::String(REDACTED.to_string());
            }
            serde_json::Value::Object(map).to_string()
        }
        _ => body.to_string(),
    }
}
