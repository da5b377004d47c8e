//! Tests for input acquisition, the output channel and the dialogue flow.

use async_trait::async_trait;
use serde_json::Value;
use sift::dialogue::{
    Dialogue, EditorBuffer, OutputChannel, OutputSink, PresetPrompt, StatementPrompt, OUTPUT_NAME,
};
use sift::engine::EngineArtifact;
use sift::execution::{QueryEngine, QueryOutcome};
use sift::provisioning::Provisioner;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Engine double that returns a canned outcome and counts dispatches.
#[derive(Clone)]
struct FakeEngine {
    outcome: QueryOutcome,
    calls: Arc<AtomicUsize>,
}

impl FakeEngine {
    fn success(text: &str) -> Self {
        Self {
            outcome: QueryOutcome::Success(text.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryEngine for FakeEngine {
    async fn execute(&self, _statement: &str, _document: &Value) -> QueryOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Prompt double that simulates a cancelled input box.
struct CancelledPrompt;

impl StatementPrompt for CancelledPrompt {
    fn ask(&self, _prompt: &str) -> Option<String> {
        None
    }
}

fn dialogue_with(
    engine: Box<dyn QueryEngine>,
    channel: &Arc<OutputChannel>,
) -> Dialogue {
    let provisioner = Provisioner::new(Arc::new(EngineArtifact::embedded()));
    let sink: Arc<dyn OutputSink> = Arc::clone(channel) as Arc<dyn OutputSink>;
    Dialogue::new(provisioner, engine, sink)
}

#[test]
fn test_selection_wins_over_every_mode() {
    let buffer = EditorBuffer::new("line one\nline two").with_selection("{\"sel\": true}");

    assert_eq!(buffer.grab_text(false), "{\"sel\": true}");
    assert_eq!(buffer.grab_text(true), "{\"sel\": true}", "selection wins even in line-only mode");
}

#[test]
fn test_line_only_mode_takes_the_active_line() {
    let buffer = EditorBuffer::new("{\"a\": 1}\n{\"b\": 2}\n{\"c\": 3}").with_active_line(1);

    assert_eq!(buffer.grab_text(true), "{\"b\": 2}");
}

#[test]
fn test_empty_selection_falls_back_to_whole_document() {
    let text = "{\"a\": 1}\n{\"b\": 2}";
    let buffer = EditorBuffer::new(text).with_selection("");

    assert_eq!(buffer.grab_text(false), text, "empty selection means no selection");
}

#[test]
fn test_output_channel_is_append_only() {
    let channel = OutputChannel::new(OUTPUT_NAME);

    channel.append("first run\n");
    channel.append("second run\n");
    channel.show();

    assert_eq!(channel.contents(), "first run\nsecond run\n", "appends accumulate, never clear");
    assert!(channel.is_visible());
    assert_eq!(channel.name(), "jq output");
}

#[tokio::test]
async fn test_success_payload_lands_in_the_channel() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let dialogue = dialogue_with(Box::new(FakeEngine::success("\"result\"")), &channel);
    let buffer = EditorBuffer::new("{\"a\": 1}");

    dialogue.run(Some(&buffer), &PresetPrompt(".a".to_string()), false).await.unwrap();

    assert_eq!(channel.contents(), "\"result\"");
    assert!(channel.is_visible(), "the channel is shown after each append");
}

#[tokio::test]
async fn test_parse_failure_reports_the_raw_parser_error() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let engine = Box::new(FakeEngine::success("unreachable"));
    let dialogue = dialogue_with(engine, &channel);
    let buffer = EditorBuffer::new("this is not json");

    dialogue.run(Some(&buffer), &PresetPrompt(".".to_string()), false).await.unwrap();

    let contents = channel.contents();
    assert!(!contents.is_empty(), "the parser error must be visible in the channel");
    assert!(!contents.contains("unreachable"), "no query must be dispatched on a parse failure");
}

#[tokio::test]
async fn test_missing_editor_reports_no_document() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let dialogue = dialogue_with(Box::new(FakeEngine::success("unreachable")), &channel);

    dialogue.run(None, &PresetPrompt(".".to_string()), false).await.unwrap();

    assert!(channel.contents().contains("No document"), "got: {}", channel.contents());
}

#[tokio::test]
async fn test_cancelled_prompt_aborts_silently() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let dialogue = dialogue_with(Box::new(FakeEngine::success("unreachable")), &channel);
    let buffer = EditorBuffer::new("{\"a\": 1}");

    dialogue.run(Some(&buffer), &CancelledPrompt, false).await.unwrap();

    assert!(channel.contents().is_empty(), "a cancelled prompt produces no output");
}

#[tokio::test]
async fn test_empty_statement_is_rejected_before_dispatch() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let engine = FakeEngine::success("unreachable");
    let probe = engine.clone();
    let dialogue = dialogue_with(Box::new(engine), &channel);
    let buffer = EditorBuffer::new("{\"a\": 1}");

    dialogue.run(Some(&buffer), &PresetPrompt("   ".to_string()), false).await.unwrap();

    assert_eq!(probe.calls(), 0, "a whitespace-only statement must never reach the engine");
    assert!(channel.contents().is_empty());
}

#[tokio::test]
async fn test_repeated_runs_append_to_the_same_channel() {
    let channel = Arc::new(OutputChannel::new(OUTPUT_NAME));
    let dialogue = dialogue_with(Box::new(FakeEngine::success("out\n")), &channel);
    let buffer = EditorBuffer::new("{\"a\": 1}");

    dialogue.run(Some(&buffer), &PresetPrompt(".a".to_string()), false).await.unwrap();
    dialogue.run(Some(&buffer), &PresetPrompt(".a".to_string()), false).await.unwrap();

    assert_eq!(channel.contents(), "out\nout\n", "two runs append, nothing clears the channel");
}
