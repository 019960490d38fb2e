//! Interactive prompts.

use std::io::ErrorKind;

use console::Term;
use dialoguer::{Confirm, Input};

use crate::error::{NdxError, Result};

use super::{Prompt, PromptType};

/// Convert dialoguer errors, treating an interrupted read as an abort.
fn map_dialoguer_err(e: dialoguer::Error) -> Result<Option<String>> {
    let err: std::io::Error = e.into();
    if err.kind() == ErrorKind::Interrupted {
        Ok(None)
    } else {
        Err(NdxError::Io(err))
    }
}

/// Prompt the user for a single answer.
///
/// Returns `None` if the user aborted the prompt.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<Option<String>> {
    match prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<Option<String>> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(true);

    match Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on_opt(term)
    {
        Ok(answer) => Ok(answer.map(|b| b.to_string())),
        Err(e) => map_dialoguer_err(e),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<Option<String>> {
    let mut input = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true);

    if let Some(default) = &prompt.default {
        input = input
            .default(default.clone())
            .show_default(!default.is_empty());
    }

    match input.interact_on(term) {
        Ok(answer) => Ok(Some(normalize_input(&answer))),
        Err(e) => map_dialoguer_err(e),
    }
}

/// Strip surrounding whitespace from typed text.
///
/// A whitespace-only answer becomes empty and so counts as not provided.
fn normalize_input(answer: &str) -> String {
    answer.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_error_is_an_abort() {
        let err = dialoguer::Error::IO(std::io::Error::new(ErrorKind::Interrupted, "ctrl-c"));
        assert_eq!(map_dialoguer_err(err).unwrap(), None);
    }

    #[test]
    fn typed_text_is_trimmed() {
        assert_eq!(normalize_input("  Parser \t"), "Parser");
        assert_eq!(normalize_input("   "), "");
    }

    #[test]
    fn other_errors_propagate() {
        let err = dialoguer::Error::IO(std::io::Error::new(ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(map_dialoguer_err(err), Err(NdxError::Io(_))));
    }
}
