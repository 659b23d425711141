// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use super::ApiError;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON request body whose rejections are reported as [`ApiError`]
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!(target: "genogate-api", "Rejected request body: {}", rejection.body_text());
                Err(ApiError::from(rejection))
            }
        }
    }
}
