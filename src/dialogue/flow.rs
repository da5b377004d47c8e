//! Per-invocation control flow from prompt to output channel.

use crate::dialogue::editor::{EditorBuffer, StatementPrompt};
use crate::dialogue::output_channel::OutputSink;
use crate::execution::{QueryEngine, QueryRequest};
use crate::provisioning::Provisioner;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates one query invocation end to end.
///
/// The dialogue assumes at most one query in flight at a time; it holds no
/// internal mutual exclusion, so concurrent invocations are the caller's
/// to serialize or accept as independent.
pub struct Dialogue {
    provisioner: Provisioner,
    engine: Box<dyn QueryEngine>,
    sink: Arc<dyn OutputSink>,
}

impl Dialogue {
    pub fn new(
        provisioner: Provisioner,
        engine: Box<dyn QueryEngine>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self { provisioner, engine, sink }
    }

    /// Run one invocation: provision, prompt, acquire, parse, execute,
    /// report.
    ///
    /// Provisioning failures propagate as `Err` and no query is dispatched.
    /// Every later failure (missing document, malformed JSON, engine
    /// failure) terminates in a visible message in the output channel and
    /// the call returns `Ok`.
    pub async fn run(
        &self,
        editor: Option<&EditorBuffer>,
        prompt: &dyn StatementPrompt,
        current_line_only: bool,
    ) -> Result<()> {
        self.provisioner.ensure_ready().await?;

        let Some(statement) = prompt.ask("Enter a jq statement.") else {
            debug!("statement prompt cancelled");
            return Ok(());
        };

        let Some(editor) = editor else {
            // The editing surface can hide large documents from us; there is
            // nothing to query in that case.
            self.report("No document available to query.");
            return Ok(());
        };

        let text = editor.grab_text(current_line_only);
        let document = match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(err) => {
                self.report(&err.to_string());
                return Ok(());
            }
        };

        let Some(request) = QueryRequest::new(statement, document) else {
            debug!("empty statement rejected before dispatch");
            return Ok(());
        };

        let outcome = self.engine.execute(&request.statement, &request.document).await;
        self.report(outcome.text());
        Ok(())
    }

    fn report(&self, message: &str) {
        self.sink.append(message);
        self.sink.show();
    }
}
