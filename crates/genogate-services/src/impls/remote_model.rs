// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
HTTP client for a remote model server.

Each model operation is one `POST {endpoint}/v1/{operation}` with a JSON body
and the caller's key in the `x-api-key` header. Tracks come back as
`{shape, data, metadata: {columns, rows}}` with `data` flattened row-major;
`null` entries are read as NaN.
*/

use crate::traits::{DnaModel, ModelBackend};
use crate::types::*;
use async_trait::async_trait;
use ndarray::{ArrayD, IxDyn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Creates per-key clients sharing one connection pool
#[derive(Debug, Clone)]
pub struct RemoteModelBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteModelBackend {
    pub fn new(endpoint: impl Into<String>) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ServiceError::Internal(format!("could not build model client: {}", e)))?;
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ModelBackend for RemoteModelBackend {
    fn create_client(&self, api_key: &str) -> ServiceResult<Arc<dyn DnaModel>> {
        Ok(Arc::new(RemoteDnaModel {
            endpoint: self.endpoint.clone(),
            client: self.client.clone(),
            api_key: api_key.to_string(),
        }))
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// A model client bound to one API key
pub struct RemoteDnaModel {
    endpoint: String,
    client: reqwest::Client,
    api_key: String,
}

impl RemoteDnaModel {
    async fn call<B, R>(&self, operation: &str, body: &B) -> ServiceResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/v1/{}", self.endpoint, operation);
        debug!(target: "genogate-services", "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Model(format!("{} request failed: {}", operation, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(target: "genogate-services", "{} returned {}", operation, status);
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(target: "genogate-services", "Could not read {} error body: {}", operation, e);
                    String::new()
                }
            };
            return Err(ServiceError::Model(format!(
                "{} failed (status={}): {}",
                operation,
                status,
                text.trim()
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ServiceError::Model(format!("{} returned an unreadable body: {}", operation, e)))
    }
}

#[derive(Serialize)]
struct SequenceRequest<'a> {
    sequence: &'a str,
    organism: Organism,
    requested_outputs: &'a [OutputType],
    ontology_terms: &'a [String],
}

#[derive(Serialize)]
struct IntervalRequest<'a> {
    interval: &'a Interval,
    organism: Organism,
    requested_outputs: &'a [OutputType],
    ontology_terms: &'a [String],
}

#[derive(Serialize)]
struct VariantRequest<'a> {
    interval: &'a Interval,
    variant: &'a Variant,
    organism: Organism,
    requested_outputs: &'a [OutputType],
    ontology_terms: &'a [String],
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    interval: &'a Interval,
    variant: &'a Variant,
    variant_scorers: &'a [VariantScorer],
    organism: Organism,
}

#[derive(Deserialize)]
struct WireTrack {
    shape: Vec<usize>,
    data: Vec<Option<f32>>,
    #[serde(default)]
    metadata: DataTable,
}

impl WireTrack {
    fn into_track(self, name: &str) -> ServiceResult<TrackData> {
        let data = self.data.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect();
        let values = ArrayD::from_shape_vec(IxDyn(&self.shape), data).map_err(|e| {
            ServiceError::Model(format!("{} track does not match shape {:?}: {}", name, self.shape, e))
        })?;
        Ok(TrackData::new(values, self.metadata))
    }
}

/// Keyed by canonical output-type name
#[derive(Deserialize)]
#[serde(transparent)]
struct WireOutput(HashMap<String, WireTrack>);

impl WireOutput {
    fn into_output(self) -> ServiceResult<Output> {
        let mut output = Output::default();
        for (name, track) in self.0 {
            match OutputType::from_name(&name) {
                Some(output_type) => output.set_track(output_type, track.into_track(&name)?),
                None => {
                    debug!(target: "genogate-services", "Ignoring unknown output '{}' from model", name);
                }
            }
        }
        Ok(output)
    }
}

#[derive(Deserialize)]
struct WireVariantOutput {
    reference: WireOutput,
    alternate: WireOutput,
}

#[async_trait]
impl DnaModel for RemoteDnaModel {
    async fn predict_sequence(
        &self,
        sequence: &str,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<Output> {
        let body = SequenceRequest {
            sequence,
            organism,
            requested_outputs,
            ontology_terms,
        };
        self.call::<_, WireOutput>("predict_sequence", &body)
            .await?
            .into_output()
    }

    async fn predict_interval(
        &self,
        interval: &Interval,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<Output> {
        let body = IntervalRequest {
            interval,
            organism,
            requested_outputs,
            ontology_terms,
        };
        self.call::<_, WireOutput>("predict_interval", &body)
            .await?
            .into_output()
    }

    async fn predict_variant(
        &self,
        interval: &Interval,
        variant: &Variant,
        organism: Organism,
        requested_outputs: &[OutputType],
        ontology_terms: &[String],
    ) -> ServiceResult<VariantOutput> {
        let body = VariantRequest {
            interval,
            variant,
            organism,
            requested_outputs,
            ontology_terms,
        };
        let wire: WireVariantOutput = self.call("predict_variant", &body).await?;
        Ok(VariantOutput {
            reference: wire.reference.into_output()?,
            alternate: wire.alternate.into_output()?,
        })
    }

    async fn score_variant(
        &self,
        interval: &Interval,
        variant: &Variant,
        scorers: &[VariantScorer],
        organism: Organism,
    ) -> ServiceResult<DataTable> {
        let body = ScoreRequest {
            interval,
            variant,
            variant_scorers: scorers,
            organism,
        };
        self.call("score_variant", &body).await
    }
}
