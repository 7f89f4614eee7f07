//! Interactive prompts.

use std::io::ErrorKind;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::{GuidanceError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors, treating end of input as a closed stream.
fn map_dialoguer_err(e: dialoguer::Error) -> GuidanceError {
    let e: std::io::Error = e.into();
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::Interrupted => GuidanceError::InputClosed,
        _ => GuidanceError::Io(e),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let text = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Text(text))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    // Esc / q give None
    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(0)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Choice(
        selection.and_then(|i| options.get(i)).map(|o| o.value.clone()),
    ))
}

/// Resolve a typed answer against select options.
///
/// Accepts an option value or its 1-based position. A blank answer, or one
/// that matches nothing, chooses nothing.
pub fn match_option(options: &[PromptOption], answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    if let Some(opt) = options.iter().find(|o| o.value == answer) {
        return Some(opt.value.clone());
    }

    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(|o| o.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<PromptOption> {
        vec![PromptOption::plain("100"), PromptOption::plain("2")]
    }

    #[test]
    fn match_by_value() {
        assert_eq!(match_option(&options(), "100").as_deref(), Some("100"));
    }

    #[test]
    fn value_wins_over_position() {
        assert_eq!(match_option(&options(), "2").as_deref(), Some("2"));
    }

    #[test]
    fn match_by_position() {
        assert_eq!(match_option(&options(), "1").as_deref(), Some("100"));
    }

    #[test]
    fn out_of_range_matches_nothing() {
        assert_eq!(match_option(&options(), "0"), None);
        assert_eq!(match_option(&options(), "9"), None);
        assert_eq!(match_option(&options(), "nobody"), None);
    }

    #[test]
    fn blank_matches_nothing() {
        assert_eq!(match_option(&options(), ""), None);
        assert_eq!(match_option(&options(), "  "), None);
    }

    #[test]
    fn blank_value_reachable_by_position() {
        let options = vec![PromptOption::plain(""), PromptOption::plain("7")];
        assert_eq!(match_option(&options, "1").as_deref(), Some(""));
        assert_eq!(match_option(&options, ""), None);
    }

    #[test]
    fn eof_maps_to_input_closed() {
        let err = dialoguer::Error::from(std::io::Error::from(ErrorKind::UnexpectedEof));
        assert!(matches!(map_dialoguer_err(err), GuidanceError::InputClosed));
    }

    #[test]
    fn other_io_errors_pass_through() {
        let err = dialoguer::Error::from(std::io::Error::from(ErrorKind::BrokenPipe));
        assert!(matches!(map_dialoguer_err(err), GuidanceError::Io(_)));
    }
}
