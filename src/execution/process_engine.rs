//! External-process query engine backend.
//!
//! Spawns the provisioned binary once per query, feeds it the serialized
//! document on stdin and collects stdout/stderr concurrently. The engine
//! imposes no timeout of its own; whatever the operating environment
//! enforces is the boundary.

use crate::execution::contract::{QueryEngine, QueryOutcome};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Runs queries by spawning an external engine binary per invocation.
pub struct ProcessEngine {
    binary_path: PathBuf,
}

impl ProcessEngine {
    /// An engine backed by the binary at `binary_path`. The path is expected
    /// to have gone through provisioning before the first `execute` call.
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self { binary_path: binary_path.into() }
    }

    pub fn binary_path(&self) -> &std::path::Path {
        &self.binary_path
    }
}

#[async_trait]
impl QueryEngine for ProcessEngine {
    async fn execute(&self, statement: &str, document: &Value) -> QueryOutcome {
        let payload = match serde_json::to_vec(document) {
            Ok(payload) => payload,
            Err(err) => {
                return QueryOutcome::Failure(format!("could not serialize document: {}", err))
            }
        };

        debug!(binary = %self.binary_path.display(), statement, "dispatching query");

        let mut child = match Command::new(&self.binary_path)
            .arg(statement)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                return QueryOutcome::Failure(format!(
                    "could not spawn {}: {}",
                    self.binary_path.display(),
                    err
                ))
            }
        };

        let Some(mut stdin) = child.stdin.take() else {
            return QueryOutcome::Failure("engine process has no input stream".to_string());
        };

        // The input stream must be closed after the write or a child that
        // reads to end-of-input never terminates.
        let feed_input = async move {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await?;
            drop(stdin);
            Ok::<(), std::io::Error>(())
        };

        // Output collection runs concurrently with the input write; a child
        // producing more than a pipe buffer before reading its input would
        // otherwise deadlock.
        let (write_result, output) = tokio::join!(feed_input, child.wait_with_output());

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                return QueryOutcome::Failure(format!("engine process failed: {}", err));
            }
        };

        // Any error-stream content wins over a partial success payload.
        if !output.stderr.is_empty() {
            return QueryOutcome::Failure(String::from_utf8_lossy(&output.stderr).into_owned());
        }

        // A child that exits before draining its input (broken pipe) only
        // matters when it also produced no diagnostics.
        if let Err(err) = write_result {
            return QueryOutcome::Failure(format!("could not write document to engine: {}", err));
        }

        QueryOutcome::Success(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
