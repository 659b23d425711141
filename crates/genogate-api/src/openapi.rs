// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// Generated at compile time with utoipa from the endpoint annotations.

use utoipa::OpenApi;

use crate::{
    common::{ApiError, ApiErrorCode},
    v1::dtos::{
        AnalysisRequestV1, HealthCheckResponseV1, IntervalInputV1, RootInfoV1, VariantInputV1,
    },
};

/// OpenAPI documentation for the genogate REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "genogate REST API",
        version = "0.1.0",
        description = "HTTP JSON adapter over a genomic sequence-prediction model",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::endpoints::health::get_root,
        crate::endpoints::health::get_health,
        crate::endpoints::analyze::post_analyze,
    ),
    components(
        schemas(
            AnalysisRequestV1,
            VariantInputV1,
            IntervalInputV1,
            RootInfoV1,
            HealthCheckResponseV1,
            ApiError,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Server status and model availability"),
        (name = "analysis", description = "Variant, interval and sequence analysis")
    )
)]
pub struct ApiDoc;
