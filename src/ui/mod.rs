//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped input
//! - [`MockUI`] for scripted tests
//!
//! # Example
//!
//! ```
//! use guidance_log::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("command", vec!["enter 123"]);
//!
//! let answer = ui.prompt(&Prompt::input("command", "ID #")).unwrap();
//! assert_eq!(answer.into_text(), "enter 123");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{match_option, prompt_user};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GuidanceTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display text as-is. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a prompt and get the answer.
    ///
    /// Fails with [`GuidanceError::InputClosed`](crate::GuidanceError::InputClosed)
    /// once there is no more input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

impl Prompt {
    /// Free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
        }
    }

    /// Pick-one prompt.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input. Empty answers are allowed.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Option whose label is its value.
    pub fn plain(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Text typed at an input prompt, possibly empty.
    Text(String),
    /// Value of the chosen option, or `None` when the user backed out or
    /// the answer matched no option.
    Choice(Option<String>),
}

impl PromptResult {
    /// The answer as text. A missing choice is the empty string.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Choice(c) => c.unwrap_or_default(),
        }
    }

    /// The chosen value, if any.
    pub fn into_choice(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Choice(c) => c,
        }
    }
}
