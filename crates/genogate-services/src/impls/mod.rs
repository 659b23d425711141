// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service implementations.
*/

pub mod analysis_service_impl;
#[cfg(feature = "remote-model")]
pub mod remote_model;

pub use analysis_service_impl::AnalysisServiceImpl;
#[cfg(feature = "remote-model")]
pub use remote_model::{RemoteDnaModel, RemoteModelBackend};
