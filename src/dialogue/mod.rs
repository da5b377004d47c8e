//! Dialogue Module
//!
//! This module hosts the orchestration layer around the execution pipeline:
//! acquiring a statement and a JSON document from the editing surface,
//! running the query, and routing the outcome to the shared output channel.
//!
//! # Components
//!
//! - **EditorBuffer** - Document text plus selection state, with the
//!   selection/current-line/whole-document acquisition rule
//! - **StatementPrompt** - One line of free text from the user
//! - **OutputSink** / **OutputChannel** - The append-only named channel both
//!   success and failure text land in
//! - **Dialogue** - The per-invocation control flow
//!
//! # Control flow
//!
//! 1. Ask the provisioner to ensure a ready engine
//! 2. Prompt for a statement (a cancelled or empty prompt aborts silently)
//! 3. Acquire document text from the buffer
//! 4. Parse the text as JSON
//! 5. Hand (statement, document) to the engine
//! 6. Append the outcome to the channel and show it
//!
//! Every failure past provisioning terminates in a visible message in the
//! channel; provisioning failures propagate to the caller instead, which
//! must not dispatch queries without a ready engine.

pub mod editor;
pub mod output_channel;

mod flow;

// Re-export main types for convenience
pub use editor::{EditorBuffer, PresetPrompt, StatementPrompt, StdinPrompt};
pub use flow::Dialogue;
pub use output_channel::{ConsoleChannel, OutputChannel, OutputSink, OUTPUT_NAME};
