//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait combining output and the prompt gateway
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! Prompts are asked as an ordered batch through [`UserInterface::ask`].
//! The answers come back as [`Responses`], keyed by prompt name in the
//! order the prompts were given. If the user aborts part way through, the
//! current and all remaining prompts resolve to [`Answer::Cancelled`].
//!
//! # Example
//!
//! ```
//! use ndx::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("componentName", "Button");
//!
//! let responses = ui
//!     .ask(&[Prompt::input("componentName", "Component name?")])
//!     .unwrap();
//! assert_eq!(responses.text("componentName"), Some("Button"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, NdxTheme};

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

static KEYWORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,]+").unwrap());

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask the given prompts in order and collect the answers.
    fn ask(&mut self, prompts: &[Prompt]) -> Result<Responses>;
}

/// Formatter applied to a non-empty text answer.
pub type Formatter = fn(&str) -> Vec<String>;

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Field name the answer is stored under.
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Initial value offered to the user.
    pub default: Option<String>,
    /// Turns a non-empty text answer into a list.
    pub format: Option<Formatter>,
}

/// The type of prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
}

impl Prompt {
    /// Create a free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: None,
            format: None,
        }
    }

    /// Create a yes/no prompt.
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
            format: None,
        }
    }

    /// Set the initial value.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Set the formatter for text answers.
    pub fn with_format(mut self, format: Formatter) -> Self {
        self.format = Some(format);
        self
    }

    /// Convert raw user input into an [`Answer`] for this prompt.
    ///
    /// Confirm prompts accept `true`, `yes`, `y` and `1` as yes. Formatted
    /// text prompts produce an empty list for empty input without running
    /// the formatter.
    pub fn answer(&self, raw: &str) -> Answer {
        match self.prompt_type {
            PromptType::Confirm => Answer::Confirm(parse_bool(raw)),
            PromptType::Input => match self.format {
                Some(_) if raw.is_empty() => Answer::List(Vec::new()),
                Some(format) => Answer::List(format(raw)),
                None => Answer::Text(raw.to_string()),
            },
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// A single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to a text prompt.
    Text(String),
    /// Answer to a confirm prompt.
    Confirm(bool),
    /// Formatted answer to a text prompt.
    List(Vec<String>),
    /// The user aborted before this prompt was answered.
    Cancelled,
}

/// Answers to a batch of prompts, in prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    answers: Vec<(String, Answer)>,
}

impl Responses {
    /// Create an empty response map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer.
    pub fn push(&mut self, key: &str, answer: Answer) {
        self.answers.push((key.to_string(), answer));
    }

    /// Get the answer for a key.
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, answer)| answer)
    }

    /// Get a non-empty text answer.
    ///
    /// Empty text counts as not provided, the same as a cancelled prompt.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Answer::Text(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether a confirm prompt was answered with yes.
    pub fn confirmed(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Answer::Confirm(true)))
    }

    /// Get a list answer. Missing or cancelled answers give an empty list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Answer::List(items)) => items.clone(),
            Some(Answer::Text(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// Keys in prompt order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(|(k, _)| k.as_str())
    }
}

/// Ask prompts one by one until the user aborts.
///
/// `ask_one` returns `None` when the user aborted; from then on every
/// remaining prompt is recorded as [`Answer::Cancelled`] without asking.
pub(crate) fn collect_answers<F>(prompts: &[Prompt], mut ask_one: F) -> Result<Responses>
where
    F: FnMut(&Prompt) -> Result<Option<String>>,
{
    let mut responses = Responses::new();
    let mut aborted = false;

    for prompt in prompts {
        if aborted {
            responses.push(&prompt.key, Answer::Cancelled);
            continue;
        }

        match ask_one(prompt)? {
            Some(raw) => responses.push(&prompt.key, prompt.answer(&raw)),
            None => {
                tracing::debug!("Prompt session aborted at '{}'", prompt.key);
                aborted = true;
                responses.push(&prompt.key, Answer::Cancelled);
            }
        }
    }

    Ok(responses)
}

/// Split a keyword string on commas and whitespace, dropping empty tokens.
pub fn split_on_comma_or_whitespace(value: &str) -> Vec<String> {
    KEYWORD_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_answer_is_text() {
        let prompt = Prompt::input("name", "Name?");
        assert_eq!(prompt.answer("pkg"), Answer::Text("pkg".to_string()));
    }

    #[test]
    fn confirm_answer_parses_bool() {
        let prompt = Prompt::confirm("ok", "Ok?");
        assert_eq!(prompt.answer("true"), Answer::Confirm(true));
        assert_eq!(prompt.answer("Y"), Answer::Confirm(true));
        assert_eq!(prompt.answer("no"), Answer::Confirm(false));
        assert_eq!(prompt.answer(""), Answer::Confirm(false));
    }

    #[test]
    fn formatter_runs_on_non_empty_input() {
        let prompt =
            Prompt::input("keywords", "Keywords?").with_format(split_on_comma_or_whitespace);
        assert_eq!(
            prompt.answer("eeg, lsl  ble"),
            Answer::List(vec!["eeg".into(), "lsl".into(), "ble".into()])
        );
    }

    #[test]
    fn formatter_skipped_for_empty_input() {
        fn exploding(_: &str) -> Vec<String> {
            panic!("formatter must not run on empty input");
        }
        let prompt = Prompt::input("keywords", "Keywords?").with_format(exploding);
        assert_eq!(prompt.answer(""), Answer::List(Vec::new()));
    }

    #[test]
    fn split_drops_empty_tokens() {
        assert_eq!(
            split_on_comma_or_whitespace(",a,,b , c,"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(split_on_comma_or_whitespace(" , ").is_empty());
    }

    #[test]
    fn responses_preserve_order() {
        let mut responses = Responses::new();
        responses.push("b", Answer::Text("2".into()));
        responses.push("a", Answer::Text("1".into()));
        assert_eq!(responses.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn responses_text_hides_empty() {
        let mut responses = Responses::new();
        responses.push("name", Answer::Text(String::new()));
        assert_eq!(responses.text("name"), None);
        assert_eq!(responses.list("name"), Vec::<String>::new());
    }

    #[test]
    fn collect_answers_cancels_remaining_after_abort() {
        let prompts = vec![
            Prompt::input("first", "First?"),
            Prompt::input("second", "Second?"),
            Prompt::input("third", "Third?"),
        ];
        let mut asked = Vec::new();

        let responses = collect_answers(&prompts, |prompt| {
            asked.push(prompt.key.clone());
            if prompt.key == "second" {
                Ok(None)
            } else {
                Ok(Some("value".to_string()))
            }
        })
        .unwrap();

        assert_eq!(asked, vec!["first", "second"]);
        assert_eq!(responses.text("first"), Some("value"));
        assert_eq!(responses.get("second"), Some(&Answer::Cancelled));
        assert_eq!(responses.get("third"), Some(&Answer::Cancelled));
        assert_eq!(responses.text("third"), None);
    }
}
