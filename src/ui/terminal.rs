//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    collect_answers, prompt_user, should_use_colors, NdxTheme, NonInteractiveUI, Prompt,
    Responses, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: NdxTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            NdxTheme::new()
        } else {
            NdxTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn ask(&mut self, prompts: &[Prompt]) -> Result<Responses> {
        let term = &self.term;
        collect_answers(prompts, |prompt| prompt_user(prompt, term))
    }
}

/// Create the appropriate UI based on interactivity.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn create_ui_non_interactive_answers_from_defaults() {
        let mut ui = create_ui(false);
        let responses = ui
            .ask(&[Prompt::confirm("ndxTerminalTest", "Proceed?").with_default("true")])
            .unwrap();
        assert!(responses.confirmed("ndxTerminalTest"));
    }
}
