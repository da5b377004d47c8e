//! Input acquisition from the editing surface.

use std::io::{BufRead, Write};

/// A snapshot of the editing surface: the full document text, the active
/// selection (if any) and the line the cursor is on.
#[derive(Debug, Clone, Default)]
pub struct EditorBuffer {
    text: String,
    selection: Option<String>,
    active_line: usize,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), selection: None, active_line: 0 }
    }

    /// Set the active selection text.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Set the zero-based line the cursor is on.
    pub fn with_active_line(mut self, line: usize) -> Self {
        self.active_line = line;
        self
    }

    /// The document text to query, per the acquisition rule: a non-empty
    /// selection wins regardless of mode; otherwise current-line-only mode
    /// takes the active line; otherwise the whole document.
    pub fn grab_text(&self, current_line_only: bool) -> String {
        if let Some(selection) = &self.selection {
            if !selection.is_empty() {
                return selection.clone();
            }
        }
        if current_line_only {
            return self.text.lines().nth(self.active_line).unwrap_or_default().to_string();
        }
        self.text.clone()
    }
}

/// One line of free text from the user. Returns `None` when the user
/// cancels (end of input) or submits nothing.
pub trait StatementPrompt {
    fn ask(&self, prompt: &str) -> Option<String>;
}

/// Interactive prompt reading a single line from standard input.
pub struct StdinPrompt;

impl StatementPrompt for StdinPrompt {
    fn ask(&self, prompt: &str) -> Option<String> {
        print!("{} ", prompt);
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']);
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            }
        }
    }
}

/// A prompt answered ahead of time, used when the statement arrives as a
/// command-line argument.
pub struct PresetPrompt(pub String);

impl StatementPrompt for PresetPrompt {
    fn ask(&self, _prompt: &str) -> Option<String> {
        Some(self.0.clone())
    }
}
