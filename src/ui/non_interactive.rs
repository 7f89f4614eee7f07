//! Line-oriented UI for piped input.

use std::io::{BufRead, BufReader};

use crate::error::{GuidanceError, Result};

use super::prompts::match_option;
use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Every prompt consumes one line of input; questions are not echoed.
/// Select prompts accept an option value or its 1-based position.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI reading answers from standard input.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, BufReader::new(std::io::stdin()))
    }

    /// Create a UI reading answers from `input` (for testing).
    pub fn with_input(mode: OutputMode, input: impl BufRead + 'static) -> Self {
        Self {
            mode,
            input: Box::new(input),
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GuidanceError::InputClosed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        Ok(trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string())
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self.read_line()?;
        Ok(match &prompt.prompt_type {
            PromptType::Input => PromptResult::Text(answer),
            PromptType::Select { options } => PromptResult::Choice(match_option(options, &answer)),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
