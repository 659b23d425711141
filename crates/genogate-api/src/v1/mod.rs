// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - DTOs

pub mod dtos;

// Re-export for convenience
pub use dtos::*;
