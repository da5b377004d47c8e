//! Engine Provisioning Module
//!
//! This module guarantees that a usable query engine exists before any query
//! is dispatched.
//!
//! # Components
//!
//! - **Provisioner** - Idempotent one-time acquisition of the external
//!   engine binary (directory creation, platform-keyed download, permission
//!   bits)
//!
//! # Behavior
//!
//! Provisioning cost is paid at most once across the artifact's lifetime:
//! when the binary is already on disk, `ensure_ready` returns immediately
//! with no network access, no rewrite and no re-chmod. For the embedded
//! evaluator configuration the whole step is a constant-time success.
//!
//! # Example
//!
//! ```ignore
//! use sift::engine::{BinarySources, EngineArtifact};
//! use sift::provisioning::Provisioner;
//! use std::sync::Arc;
//!
//! let artifact = Arc::new(EngineArtifact::external("bin", BinarySources::jq_release()));
//! let provisioner = Provisioner::new(artifact);
//! provisioner.ensure_ready().await?;
//! ```

pub mod provisioner;

// Re-export main types for convenience
pub use provisioner::Provisioner;
