//! The append-only named output channel.
//!
//! Success and failure payloads share one channel name, so repeated
//! invocations append to what is already there. The channel is never
//! cleared between runs; that is observable behavior callers rely on, not
//! an oversight to fix.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// The shared channel name, historically named for the tool.
pub const OUTPUT_NAME: &str = "jq output";

/// An append-only output destination that can be brought into view.
pub trait OutputSink: Send + Sync {
    /// Append plain text to the channel.
    fn append(&self, text: &str);

    /// Bring the channel into view.
    fn show(&self);
}

/// In-memory named channel. Accumulates appended text for the process
/// lifetime and records whether it has been shown.
pub struct OutputChannel {
    name: String,
    contents: Mutex<String>,
    visible: AtomicBool,
}

impl OutputChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), contents: Mutex::new(String::new()), visible: AtomicBool::new(false) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything appended so far, across invocations.
    pub fn contents(&self) -> String {
        self.contents.lock().expect("output channel lock poisoned").clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }
}

impl OutputSink for OutputChannel {
    fn append(&self, text: &str) {
        self.contents.lock().expect("output channel lock poisoned").push_str(text);
    }

    fn show(&self) {
        self.visible.store(true, Ordering::Release);
    }
}

/// Channel that forwards appended text straight to standard output, for the
/// command-line surface.
pub struct ConsoleChannel;

impl OutputSink for ConsoleChannel {
    fn append(&self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn show(&self) {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}
