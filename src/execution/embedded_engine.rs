//! Embedded query engine backend built on the jaq evaluator.
//!
//! Statements are loaded and compiled per invocation with the jaq standard
//! and JSON definitions available, run against the document as a
//! [`jaq_json::Val`], and every produced value is pretty-printed as JSON.
//! Load, compile and runtime errors all resolve to
//! [`QueryOutcome::Failure`].

use crate::execution::contract::{QueryEngine, QueryOutcome};
use async_trait::async_trait;
use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;
use tracing::debug;

/// Runs queries in-process with the jaq evaluator. Always available, so
/// provisioning is a pass-through for this backend.
pub struct EmbeddedEngine {}

impl EmbeddedEngine {
    pub fn new() -> Self {
        EmbeddedEngine {}
    }

    /// Synchronous evaluation core: compile the statement, run it over the
    /// document, render each produced value.
    fn evaluate(statement: &str, document: &Value) -> Result<String, String> {
        let program = File { code: statement, path: () };
        let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
        let arena = Arena::default();

        let modules = loader
            .load(&arena, program)
            .map_err(|errors| format!("jq: could not parse statement: {}", describe(errors)))?;

        let filter = Compiler::default()
            .with_funs(jaq_std::funs().chain(jaq_json::funs()))
            .compile(modules)
            .map_err(|errors| format!("jq: could not compile statement: {}", describe(errors)))?;

        // No additional inputs beyond the document itself.
        let inputs = RcIter::new(core::iter::empty());
        let mut rendered = Vec::new();
        for produced in filter.run((Ctx::new([], &inputs), Val::from(document.clone()))) {
            match produced {
                Ok(value) => {
                    let value = Value::from(value);
                    let text = serde_json::to_string_pretty(&value)
                        .map_err(|err| format!("jq: could not render output: {}", err))?;
                    rendered.push(text);
                }
                Err(err) => return Err(format!("jq: error: {}", err)),
            }
        }
        Ok(rendered.join("\n"))
    }
}

/// Flatten per-file load/compile diagnostics into one message line.
fn describe<T: std::fmt::Debug>(errors: impl IntoIterator<Item = T>) -> String {
    errors.into_iter().map(|error| format!("{:?}", error)).collect::<Vec<_>>().join("; ")
}

#[async_trait]
impl QueryEngine for EmbeddedEngine {
    async fn execute(&self, statement: &str, document: &Value) -> QueryOutcome {
        debug!(statement, "evaluating statement with embedded engine");
        match Self::evaluate(statement, document) {
            Ok(text) => QueryOutcome::Success(text),
            Err(message) => QueryOutcome::Failure(message),
        }
    }
}
