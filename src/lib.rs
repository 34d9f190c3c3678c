//! # catcher-sim - HTTP Traffic Corpus Emitter
//!
//! Fires a fixed, hand-curated catalog of real-world HTTP request shapes at
//! a running request-catcher service, so a human can check the catcher's
//! capture and rendering fidelity by eye.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                          EmitterEngine                             │
//! │                                                                    │
//! │  CheckingTarget ──► ProvisioningBucket ──► EmittingScenarios ──►   │
//! │        │                    │                     │      Reporting │
//! │        ▼                    ▼                     ▼                │
//! │  GET /api/buckets   POST /api/create/{b}   {method} /{b}{path}     │
//! │  (2xx or abort)     (2xx/409 or abort)     (any outcome accepted)  │
//! │                                                                    │
//! │  Catalog categories:                                               │
//! │  ├── methods    (GET..CONNECT, CUSTOM)                             │
//! │  ├── bodies     (JSON, forms, multipart, binary, XML, RPC)        │
//! │  ├── headers    (auth, conditional, ranges, CORS, proxies)        │
//! │  ├── paths      (%XX, //, dot segments, long queries)             │
//! │  └── encodings  (UTF-8/Latin-1/UTF-16, burst)                     │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Catalog is data** - scenarios are literal descriptor values in
//!    category modules. Adding coverage means adding an entry, never a new
//!    code path in the delivery machinery.
//!
//! 2. **Literal fidelity** - descriptor paths and headers are emitted
//!    byte-for-byte. The emitter never normalizes, re-encodes, or validates
//!    them; the unusual shape IS the scenario.
//!
//! 3. **Asymmetric error policy** - preflight and bucket provisioning
//!    failures abort the run; scenario delivery tolerates every outcome.
//!    The tolerated variants are enumerated in [`crate::core::DeliveryOutcome`]
//!    rather than swallowed, so the policy stays visible and testable.
//!
//! 4. **Sequential and deterministic** - one logical task, one request in
//!    flight, a finite fixed sequence, and an emission counter threaded
//!    through the run instead of shared ambient state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use catcher_sim::client::CatcherClient;
//! use catcher_sim::core::BucketHandle;
//! use catcher_sim::engine::EmitterEngine;
//! use catcher_sim::scenarios;
//!
//! # async fn demo() -> Result<(), catcher_sim::error::EmitError> {
//! let client = CatcherClient::new("http://localhost:9090", Duration::from_secs(10))?;
//! let bucket = BucketHandle::new("ui-test-bucket", "test123");
//! let mut engine = EmitterEngine::new(client, bucket);
//!
//! let summary = engine.run(&scenarios::catalog()).await?;
//! println!("{} scenarios emitted - view at {}", summary.emitted, summary.viewer_url);
//! # Ok(())
//! # }
//! ```

// Core types - single source of truth
pub mod core;

// Fatal error classes
pub mod error;

// Catcher HTTP client (preflight, provisioning, delivery)
pub mod client;

// Scenario catalog - fixed, ordered request corpus
pub mod scenarios;

// Run orchestration state machine
pub mod engine;

// Re-exports for convenience
pub use crate::core::{BucketHandle, DeliveryOutcome, RunSummary, ScenarioRequest};

pub use crate::client::CatcherClient;

pub use crate::engine::{EmitterEngine, RunPhase};

pub use crate::error::EmitError;

pub use crate::scenarios::{catalog, list_categories};
