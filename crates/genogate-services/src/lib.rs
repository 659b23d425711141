// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# genogate Service Layer

The transport-agnostic core of genogate: it turns one analysis request into
exactly one model call and shapes the result for JSON.

## Architecture

```text
┌──────────────────────────────────────────────────────────┐
│                 TRANSPORT ADAPTER                        │
│  genogate-api (axum/REST)                                │
└────────────────────────────┬─────────────────────────────┘
                             ↓
┌──────────────────────────────────────────────────────────┐
│              SERVICE LAYER (This Crate)                  │
│  • AnalysisService   - classify, dispatch, assemble      │
│  • normalize         - supported context lengths         │
│  • output_types      - output names to model enums       │
│  • assemble          - tracks/tables to result records   │
└────────────────────────────┬─────────────────────────────┘
                             ↓
┌──────────────────────────────────────────────────────────┐
│                  MODEL BACKEND                           │
│  ModelBackend / DnaModel (remote HTTP client, mocks)     │
└──────────────────────────────────────────────────────────┘
```

## Usage

```rust,ignore
use genogate_services::{AnalysisService, AnalysisServiceImpl, ModelCapability, ResponseAssembler};

let backend = Arc::new(RemoteModelBackend::new("http://localhost:9100")?);
let service = AnalysisServiceImpl::new(
    ModelCapability::available(backend),
    ResponseAssembler::default(),
);
let result = service.analyze(query).await?;
```

## Features

- `remote-model` (default): `RemoteModelBackend`, a JSON-over-HTTP model client
*/

pub mod assemble;
pub mod impls;
pub mod normalize;
pub mod output_types;
pub mod traits;
pub mod types;

// Re-export everything for convenience
pub use assemble::{ResponseAssembler, DEFAULT_SAMPLE_ROWS};
pub use impls::*;
pub use normalize::{nearest_supported_length, SUPPORTED_LENGTHS};
pub use output_types::ResolvedOutput;
pub use traits::*;
pub use types::*;
