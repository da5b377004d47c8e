//! Sift CLI - Run a jq statement over a JSON document.
//!
//! Usage:
//!   sift '.a | length' --file data/input.json
//!   sift '.[0]' --file data/input.json --current-line --line 2
//!   cat data/input.json | sift '.' --engine embedded
//!   sift --file data/input.json            # prompts for the statement

use clap::Parser;
use sift::dialogue::{
    ConsoleChannel, Dialogue, EditorBuffer, PresetPrompt, StatementPrompt, StdinPrompt,
};
use sift::engine::{BinarySources, EngineArtifact, EngineConfig};
use sift::execution::{EmbeddedEngine, ProcessEngine, QueryEngine};
use sift::provisioning::Provisioner;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Run jq query-language statements over JSON documents")]
struct Args {
    /// The jq statement to run; prompted for interactively when omitted
    statement: Option<String>,

    /// JSON document file; standard input is read when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Text to treat as the active selection (wins over the other modes)
    #[arg(long)]
    selection: Option<String>,

    /// Query only the active line instead of the whole document
    #[arg(long)]
    current_line: bool,

    /// Zero-based active line for --current-line
    #[arg(long, default_value = "0")]
    line: usize,

    /// Execution backend: process or embedded
    #[arg(short, long, default_value = "process")]
    engine: String,

    /// Directory for the provisioned engine binary
    #[arg(long, default_value = "bin")]
    bin_dir: PathBuf,

    /// JSON engine configuration file, overrides --engine and --bin-dir
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let artifact = Arc::new(match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let config: EngineConfig = serde_json::from_str(&raw)?;
            EngineArtifact::from_config(config)
        }
        None => match args.engine.as_str() {
            "process" => EngineArtifact::external(&args.bin_dir, BinarySources::jq_release()),
            "embedded" => EngineArtifact::embedded(),
            other => {
                eprintln!("Error: Unknown engine backend: {}", other);
                eprintln!("Valid options: process, embedded");
                std::process::exit(1);
            }
        },
    });

    // The backend selection point; everything past here is agnostic.
    let engine: Box<dyn QueryEngine> = match artifact.kind() {
        sift::engine::EngineKind::ExternalBinary => {
            Box::new(ProcessEngine::new(artifact.local_path()))
        }
        sift::engine::EngineKind::EmbeddedEvaluator => Box::new(EmbeddedEngine::new()),
    };

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            if args.statement.is_none() {
                eprintln!("Error: A statement argument is required when reading the document from standard input");
                std::process::exit(1);
            }
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut editor = EditorBuffer::new(text).with_active_line(args.line);
    if let Some(selection) = &args.selection {
        editor = editor.with_selection(selection.clone());
    }

    let prompt: Box<dyn StatementPrompt> = match args.statement {
        Some(statement) => Box::new(PresetPrompt(statement)),
        None => Box::new(StdinPrompt),
    };

    let provisioner = Provisioner::new(artifact);
    let dialogue = Dialogue::new(provisioner, engine, Arc::new(ConsoleChannel));
    dialogue.run(Some(&editor), prompt.as_ref(), args.current_line).await?;

    Ok(())
}
