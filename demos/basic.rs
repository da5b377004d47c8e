//! Basic example demonstrating the sift query pipeline.
//!
//! Runs a handful of statements against an in-memory document with the
//! embedded engine, so no provisioning or network access is needed.
//!
//! Run this example with:
//! ```
//! cargo run --example basic
//! ```

use sift::execution::{EmbeddedEngine, QueryEngine, QueryOutcome};

#[tokio::main]
async fn main() {
    println!("=== Sift Basic Example ===\n");

    let engine = EmbeddedEngine::new();
    let document = serde_json::json!({
        "name": "sift",
        "versions": [1, 2, 3],
        "tags": {"kind": "query-pipeline"}
    });

    for statement in [".name", ".versions | length", ".tags.kind", ".versions[]", "..!!"] {
        println!("$ jq '{}'", statement);
        match engine.execute(statement, &document).await {
            QueryOutcome::Success(text) => println!("{}\n", text),
            QueryOutcome::Failure(message) => println!("(failed) {}\n", message),
        }
    }

    println!("Example completed successfully!");
}
