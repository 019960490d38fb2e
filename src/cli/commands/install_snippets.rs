//! Install-snippets command implementation.

use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Installs the TypeScript class snippets and their keybindings.
pub struct InstallSnippetsCommand;

impl Command for InstallSnippetsCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let mut suite = ctx.toolkit.snippet_suite();
        suite.install()?;
        Ok(CommandResult::completed())
    }
}
