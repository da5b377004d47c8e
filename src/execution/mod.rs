//! Query Execution Module
//!
//! This module provides the execution backends that evaluate a jq statement
//! against a JSON document.
//!
//! # Components
//!
//! - **QueryEngine** - The shared execution contract both backends satisfy
//! - **ProcessEngine** - Spawns the provisioned external binary per query
//! - **EmbeddedEngine** - Evaluates in-process with the jaq crates
//! - **QueryOutcome** - The tagged success/failure result of one execution
//!
//! # Architecture
//!
//! The backend is selected once at configuration time; everything above the
//! selection point talks to `dyn QueryEngine` and never branches on backend
//! identity. Both backends resolve every failure into
//! [`QueryOutcome::Failure`] rather than an error channel, so one call
//! settles to exactly one terminal outcome.
//!
//! # Example
//!
//! ```ignore
//! use sift::execution::{ProcessEngine, QueryEngine};
//!
//! let engine = ProcessEngine::new("bin/jq");
//! let document = serde_json::json!({"a": [1, 2, 3]});
//! let outcome = engine.execute(".a | length", &document).await;
//! ```

pub mod contract;
pub mod embedded_engine;
pub mod process_engine;

// Re-export main types for convenience
pub use contract::{QueryEngine, QueryOutcome, QueryRequest};
pub use embedded_engine::EmbeddedEngine;
pub use process_engine::ProcessEngine;
