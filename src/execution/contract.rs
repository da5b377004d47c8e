//! The execution contract shared by both query engine backends.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// One accepted user invocation: a non-empty statement plus the JSON value
/// it runs against. Immutable and discarded after execution.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// User-supplied query-language source text
    pub statement: String,
    /// The JSON value the statement is evaluated against
    pub document: Value,
}

impl QueryRequest {
    /// Build a request, rejecting empty or whitespace-only statements.
    ///
    /// Empty statements are a caller error caught here at the orchestration
    /// precondition; the engines themselves never re-check.
    pub fn new(statement: impl Into<String>, document: Value) -> Option<Self> {
        let statement = statement.into();
        if statement.trim().is_empty() {
            return None;
        }
        Some(Self { statement, document })
    }
}

/// The tagged result of one query execution.
///
/// Exactly one variant is produced per request, exactly once. An engine
/// never resolves the same invocation twice and never leaves it unsettled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QueryOutcome {
    /// Engine output, ready to print
    Success(String),
    /// Error text from the engine or the dispatch path
    Failure(String),
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success(_))
    }

    /// The payload text, success or failure alike.
    pub fn text(&self) -> &str {
        match self {
            QueryOutcome::Success(text) | QueryOutcome::Failure(text) => text,
        }
    }
}

/// A query engine backend.
///
/// Implementations must not panic and must not mutate `document`; every
/// failure, including dispatch failures such as a missing binary, resolves
/// to [`QueryOutcome::Failure`]. One call settles exactly once
/// (`Idle -> Dispatched -> {Succeeded | Failed}`; terminal states are
/// final). No cancellation or timeout is provided: a hanging external
/// process stalls the call until the operating environment intervenes.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Evaluate `statement` against `document`.
    async fn execute(&self, statement: &str, document: &Value) -> QueryOutcome;
}
