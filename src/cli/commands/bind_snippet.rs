//! Bind-snippet command implementation.
//!
//! `ndx bind.snippet` asks for a snippet and a keybinding and has
//! `VscodeSnippetKeybinder` register both with vscode.

use crate::collaborators::SnippetKeybinderOptions;
use crate::error::Result;
use crate::ui::Prompt;

use super::dispatcher::{Command, CommandContext, CommandResult};

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const LINES: &str = "lines";
const KEYBINDING: &str = "keybinding";

/// Typed in place of a newline when entering snippet text.
const LINE_SEPARATOR: &str = "\\n";

/// The bind.snippet command implementation.
pub struct BindSnippetCommand;

impl BindSnippetCommand {
    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::input(NAME, "Snippet name? Example: Singleton class template"),
            Prompt::input(
                DESCRIPTION,
                "Snippet description? Example: A class template based on the singleton pattern",
            ),
            Prompt::input(
                LINES,
                "Snippet text content? Use \\n for newlines. Example: line-1\\nline-2",
            ),
            Prompt::input(KEYBINDING, "Snippet keybinding? Examples: ctrl+alt+c, f4"),
        ]
    }
}

impl Command for BindSnippetCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let responses = ctx.ui.ask(&Self::prompts())?;

        let (Some(name), Some(description), Some(lines), Some(keybinding)) = (
            responses.text(NAME),
            responses.text(DESCRIPTION),
            responses.text(LINES),
            responses.text(KEYBINDING),
        ) else {
            return Ok(CommandResult::cancelled());
        };

        let options = SnippetKeybinderOptions {
            name: name.to_string(),
            description: description.to_string(),
            lines: lines.split(LINE_SEPARATOR).map(String::from).collect(),
            keybinding: keybinding.to_string(),
        };

        let mut keybinder = ctx.toolkit.snippet_keybinder(options);
        keybinder.run()?;

        ctx.ui
            .success(&format!("Bound snippet \"{}\" to {}", name, keybinding));
        Ok(CommandResult::completed())
    }
}
