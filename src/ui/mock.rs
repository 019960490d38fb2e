//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses and with a prompt at which the user
//! "aborts" the session.
//!
//! # Example
//!
//! ```
//! use ndx::ui::{Answer, MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("interfaceName", "Parser");
//! ui.cancel_at("implName");
//!
//! let responses = ui
//!     .ask(&[
//!         Prompt::input("interfaceName", "Interface?"),
//!         Prompt::input("implName", "Implementation?"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(responses.text("interfaceName"), Some("Parser"));
//! assert_eq!(responses.get("implName"), Some(&Answer::Cancelled));
//! assert_eq!(ui.asked(), &[vec!["interfaceName".to_string(), "implName".to_string()]]);
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{collect_answers, Prompt, PromptType, Responses, UserInterface};

/// Mock UI implementation for testing.
///
/// Unconfigured prompts fall back to their initial value, then to an empty
/// answer (which is falsy for both text and confirm prompts).
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    cancel_at: Option<String>,
    asked: Vec<Vec<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Set multiple prompt responses at once.
    pub fn with_prompt_responses(mut self, responses: &[(&str, &str)]) -> Self {
        for (key, response) in responses {
            self.set_prompt_response(key, response);
        }
        self
    }

    /// Simulate the user aborting when this prompt is reached.
    pub fn cancel_at(&mut self, key: &str) {
        self.cancel_at = Some(key.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Prompt keys of every `ask` call, in call order.
    pub fn asked(&self) -> &[Vec<String>] {
        &self.asked
    }

    /// Get all prompts that were actually shown (by key).
    ///
    /// Prompts skipped after an abort are not included.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    fn response_for(&self, prompt: &Prompt) -> Option<String> {
        if self.cancel_at.as_deref() == Some(prompt.key.as_str()) {
            return None;
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Some(response.clone());
        }

        if let Some(default) = &prompt.default {
            return Some(default.clone());
        }

        // Type-appropriate empty answer as a last resort
        match prompt.prompt_type {
            PromptType::Confirm => Some("false".to_string()),
            PromptType::Input => Some(String::new()),
        }
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn ask(&mut self, prompts: &[Prompt]) -> Result<Responses> {
        self.asked
            .push(prompts.iter().map(|p| p.key.clone()).collect());

        let mut shown = Vec::new();
        let responses = collect_answers(prompts, |prompt| {
            shown.push(prompt.key.clone());
            Ok(self.response_for(prompt))
        })?;
        self.prompts_shown.extend(shown);

        Ok(responses)
    }
}
