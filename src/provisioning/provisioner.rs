//! Idempotent acquisition of the external query engine binary.

use crate::engine::{EngineArtifact, EngineKind};
use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Guarantees the query engine artifact is present and executable.
///
/// `ensure_ready` is safe to call on every invocation; only the first call
/// for a missing binary performs network and filesystem work. There is no
/// internal retry: a failed pass surfaces as an error and the caller must
/// not proceed to execute queries.
pub struct Provisioner {
    artifact: Arc<EngineArtifact>,
    client: reqwest::Client,
}

impl Provisioner {
    pub fn new(artifact: Arc<EngineArtifact>) -> Self {
        Self { artifact, client: reqwest::Client::new() }
    }

    /// The artifact this provisioner manages.
    pub fn artifact(&self) -> &Arc<EngineArtifact> {
        &self.artifact
    }

    /// Ensure the engine is ready to execute queries.
    ///
    /// For the embedded evaluator this is a constant-time success. For the
    /// external binary it creates the storage directory, short-circuits if
    /// the binary already exists, and otherwise downloads the platform
    /// artifact and marks it executable (non-Windows only).
    pub async fn ensure_ready(&self) -> Result<()> {
        if self.artifact.kind() == EngineKind::EmbeddedEvaluator {
            self.artifact.mark_ready();
            return Ok(());
        }

        // Directory creation failure is fatal to provisioning.
        tokio::fs::create_dir_all(self.artifact.bin_dir()).await.map_err(|err| {
            Error::Provision(format!(
                "could not create {}: {}",
                self.artifact.bin_dir().display(),
                err
            ))
        })?;

        if tokio::fs::try_exists(self.artifact.local_path()).await? {
            debug!(path = %self.artifact.local_path().display(), "engine binary already present");
            self.artifact.mark_ready();
            return Ok(());
        }

        self.fetch_binary(std::env::consts::OS).await?;
        self.artifact.mark_ready();
        Ok(())
    }

    /// Download the platform artifact and persist it at the local path.
    async fn fetch_binary(&self, platform: &str) -> Result<()> {
        let uri = self.artifact.sources().for_platform(platform);
        info!(%uri, "fetching query engine binary");

        let response = self.client.get(uri).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tokio::fs::write(self.artifact.local_path(), &bytes).await.map_err(|err| {
            Error::Provision(format!(
                "could not write {}: {}",
                self.artifact.local_path().display(),
                err
            ))
        })?;

        // Windows needs no permission bit; everywhere else the downloaded
        // file must be marked executable before it can be spawned.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o777);
            tokio::fs::set_permissions(self.artifact.local_path(), permissions).await?;
        }

        info!(path = %self.artifact.local_path().display(), "query engine binary provisioned");
        Ok(())
    }
}
