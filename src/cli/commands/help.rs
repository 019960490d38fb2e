//! Help command implementation.
//!
//! `ndx help` (or `--help`, `-h`) prints the command listing. It never
//! touches the project or the toolkit.

use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult, COMMANDS};

/// The help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        ctx.ui.message(&help_text());
        Ok(CommandResult::completed())
    }
}

/// The help text, built from the command table.
pub fn help_text() -> String {
    let rows: Vec<(String, &str)> = COMMANDS
        .iter()
        .map(|entry| (entry.tokens.join(", "), entry.description))
        .collect();
    let width = rows.iter().map(|(tokens, _)| tokens.len()).max().unwrap_or(0);

    let mut text = String::from("ndx CLI (Command Line Interface)\n\nAvailable commands:\n\n");
    for (tokens, description) in &rows {
        text.push_str(&format!("  - {:<width$}  {}\n", tokens, description, width = width));
    }
    text.push_str("\nUsage:\n\n  - ndx <command>\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockToolkit;
    use crate::host::MockHost;
    use crate::ui::MockUI;

    #[test]
    fn lists_every_command() {
        let text = help_text();
        for entry in COMMANDS {
            assert!(text.contains(entry.tokens[0]), "missing {}", entry.tokens[0]);
            assert!(text.contains(entry.description));
        }
        assert!(text.contains("help, --help, -h"));
    }

    #[test]
    fn descriptions_are_aligned() {
        let text = help_text();
        let columns: Vec<usize> = text
            .lines()
            .filter(|line| line.starts_with("  - ") && !line.contains("ndx <command>"))
            .map(|line| {
                let description = COMMANDS
                    .iter()
                    .map(|e| e.description)
                    .find(|d| line.ends_with(d))
                    .unwrap();
                line.len() - description.len()
            })
            .collect();

        assert_eq!(columns.len(), COMMANDS.len());
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn help_prints_without_side_effects() {
        let mut ui = MockUI::new();
        let mut host = MockHost::new();
        let toolkit = MockToolkit::new();
        let args = vec!["help".to_string()];
        let mut ctx = CommandContext {
            ui: &mut ui,
            host: &mut host,
            toolkit: &toolkit,
            args: &args,
        };

        let result = HelpCommand.execute(&mut ctx).unwrap();

        assert!(result.completed);
        assert_eq!(ui.messages(), &[help_text()]);
        assert!(host.ops().is_empty());
        assert!(toolkit.constructions().is_empty());
    }
}
