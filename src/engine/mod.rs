//! Engine Artifact Module
//!
//! This module holds the data model for the query engine artifact: which kind
//! of engine is in use, where the external binary lives on disk, and which
//! release URI serves each platform.
//!
//! # Components
//!
//! - **EngineKind** - External binary vs embedded evaluator
//! - **BinarySources** - Platform-keyed download URIs for the engine binary
//! - **EngineArtifact** - The process-wide artifact description and its
//!   readiness flag
//!
//! The artifact is constructed once at startup from explicit configuration
//! and shared behind an `Arc` for the process lifetime. Tests inject their
//! own paths and URIs instead of relying on ambient global state.
//!
//! # Example
//!
//! ```rust
//! use sift::engine::{BinarySources, EngineArtifact};
//!
//! let artifact = EngineArtifact::external("bin", BinarySources::jq_release());
//! assert!(!artifact.is_ready());
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Release builds of jq 1.6, one per platform class.
const JQ_WINDOWS: &str = "https://github.com/stedolan/jq/releases/download/jq-1.6/jq-win64.exe";
const JQ_MAC: &str = "https://github.com/stedolan/jq/releases/download/jq-1.6/jq-osx-amd64";
const JQ_LINUX: &str = "https://github.com/stedolan/jq/releases/download/jq-1.6/jq-linux64";

/// The kind of query engine behind the execution contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// A provisioned external binary, spawned per query
    ExternalBinary,
    /// The in-process jaq evaluator, always available
    EmbeddedEvaluator,
}

/// Download URIs for the external engine binary, keyed by platform class.
#[derive(Debug, Clone, Deserialize)]
pub struct BinarySources {
    /// URI for platforms whose identifier begins with `win`
    pub windows: String,
    /// URI for `darwin`/`macos` platforms
    pub mac: String,
    /// URI for every other platform, recognized or not
    pub linux: String,
}

impl BinarySources {
    /// The jq 1.6 release artifacts used by default.
    pub fn jq_release() -> Self {
        Self {
            windows: JQ_WINDOWS.to_string(),
            mac: JQ_MAC.to_string(),
            linux: JQ_LINUX.to_string(),
        }
    }

    /// Select the download URI for a platform identifier.
    ///
    /// The classification is three-way: identifiers beginning with `win`
    /// select the Windows artifact, `darwin` (and Rust's `macos`) select the
    /// macOS artifact, and everything else falls back to the Linux/Unix
    /// artifact. Unrecognized platforms deliberately get the Unix build.
    pub fn for_platform(&self, platform: &str) -> &str {
        if platform.starts_with("win") {
            &self.windows
        } else if platform.starts_with("darwin") || platform.starts_with("mac") {
            &self.mac
        } else {
            &self.linux
        }
    }
}

/// Filename of the engine binary for a platform identifier.
pub fn binary_filename(platform: &str) -> &'static str {
    if platform.starts_with("win") {
        "jq.exe"
    } else {
        "jq"
    }
}

/// Description of the concrete way queries are evaluated in this process.
///
/// For [`EngineKind::ExternalBinary`] the artifact names a binary inside
/// `bin_dir` plus the per-platform sources to fetch it from. For
/// [`EngineKind::EmbeddedEvaluator`] the paths are unused and provisioning
/// is a pass-through. `ready` flips to true after one successful
/// provisioning pass and stays true for the process lifetime.
#[derive(Debug)]
pub struct EngineArtifact {
    kind: EngineKind,
    bin_dir: PathBuf,
    local_path: PathBuf,
    sources: BinarySources,
    ready: AtomicBool,
}

impl EngineArtifact {
    /// An artifact backed by an external binary under `bin_dir`.
    ///
    /// The binary filename is platform-conditional (`jq.exe` on Windows,
    /// `jq` elsewhere), resolved from the running platform.
    pub fn external(bin_dir: impl Into<PathBuf>, sources: BinarySources) -> Self {
        Self::external_for_platform(bin_dir, sources, std::env::consts::OS)
    }

    /// Same as [`EngineArtifact::external`] with an explicit platform
    /// identifier, used by tests.
    pub fn external_for_platform(
        bin_dir: impl Into<PathBuf>,
        sources: BinarySources,
        platform: &str,
    ) -> Self {
        let bin_dir = bin_dir.into();
        let local_path = bin_dir.join(binary_filename(platform));
        Self {
            kind: EngineKind::ExternalBinary,
            bin_dir,
            local_path,
            sources,
            ready: AtomicBool::new(false),
        }
    }

    /// An artifact backed by the embedded evaluator; always provisionable.
    pub fn embedded() -> Self {
        Self {
            kind: EngineKind::EmbeddedEvaluator,
            bin_dir: PathBuf::new(),
            local_path: PathBuf::new(),
            sources: BinarySources::jq_release(),
            ready: AtomicBool::new(false),
        }
    }

    /// Build an artifact from a deserialized [`EngineConfig`].
    pub fn from_config(config: EngineConfig) -> Self {
        match config.kind {
            EngineKind::EmbeddedEvaluator => Self::embedded(),
            EngineKind::ExternalBinary => {
                let sources = config.sources.unwrap_or_else(BinarySources::jq_release);
                Self::external(config.bin_dir.unwrap_or_else(|| PathBuf::from("bin")), sources)
            }
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Directory holding the external binary.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Filesystem location of the external binary.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn sources(&self) -> &BinarySources {
        &self.sources
    }

    /// Whether a provisioning pass has succeeded for this artifact.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub(crate) fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }
}

/// Engine configuration as loaded from a JSON config file.
///
/// ```json
/// {
///   "kind": "external_binary",
///   "bin_dir": "bin",
///   "sources": { "windows": "...", "mac": "...", "linux": "..." }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Which execution backend to use
    pub kind: EngineKind,
    /// Directory for the external binary, defaults to `bin`
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,
    /// Per-platform download URIs, defaults to the jq 1.6 release
    #[serde(default)]
    pub sources: Option<BinarySources>,
}
