//! # Sift
//!
//! Sift runs jq query-language statements over JSON documents taken from an
//! editing surface and routes the result to a shared output channel.
//!
//! The pipeline has two halves. The provisioning half guarantees a usable
//! query engine before the first statement runs: on configurations that use
//! an external `jq` binary it resolves the right release artifact for the
//! platform, downloads it once, persists it and marks it executable; on
//! configurations that use the embedded evaluator it is a constant-time
//! pass-through. The execution half feeds a statement and a parsed JSON
//! document to whichever backend is configured and produces exactly one
//! tagged outcome, success or failure.
//!
//! ## Features
//!
//! - One-time provisioning of a platform-specific `jq` release binary
//! - Two interchangeable execution backends behind a single trait:
//!   external process and embedded (jaq) evaluation
//! - Editor-style input acquisition (selection, current line, whole
//!   document) and an append-only named output channel
//!
//! ## Example
//!
//! ```rust
//! use sift::execution::{EmbeddedEngine, QueryEngine, QueryOutcome};
//!
//! # async fn example() {
//! let engine = EmbeddedEngine::new();
//! let document = serde_json::json!({"a": [1, 2, 3]});
//! match engine.execute(".a | length", &document).await {
//!     QueryOutcome::Success(text) => println!("{}", text),
//!     QueryOutcome::Failure(message) => eprintln!("{}", message),
//! }
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

/// Engine artifact data model and platform classification
pub mod engine;

/// One-time acquisition of the external query engine binary
pub mod provisioning;

/// Query execution backends and the shared execution contract
pub mod execution;

/// Input acquisition, output channel and orchestration
pub mod dialogue;

pub mod error {
    //! Error types and result definitions

    use std::fmt;

    /// Result type alias for sift operations
    pub type Result<T> = std::result::Result<T, Error>;

    /// Main error type for sift
    #[derive(Debug)]
    pub enum Error {
        /// Engine provisioning error (directory, download or permission step)
        Provision(String),
        /// Document text is not well-formed JSON
        Parse(String),
        /// No document is available on the editing surface
        NoDocument,
        /// IO error
        Io(std::io::Error),
        /// HTTP fetch error
        Http(reqwest::Error),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::Provision(msg) => write!(f, "Provisioning error: {}", msg),
                Error::Parse(msg) => write!(f, "Parse error: {}", msg),
                Error::NoDocument => write!(f, "No document available to query"),
                Error::Io(err) => write!(f, "IO error: {}", err),
                Error::Http(err) => write!(f, "HTTP error: {}", err),
            }
        }
    }

    impl std::error::Error for Error {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Error::Io(err) => Some(err),
                Error::Http(err) => Some(err),
                _ => None,
            }
        }
    }

    impl From<std::io::Error> for Error {
        fn from(err: std::io::Error) -> Self {
            Error::Io(err)
        }
    }

    impl From<reqwest::Error> for Error {
        fn from(err: reqwest::Error) -> Self {
            Error::Http(err)
        }
    }
}

// Re-export commonly used types
pub use error::{Error, Result};
