//! Check-types command implementation.

use crate::error::Result;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Type checks every package of the npm workspace in the current directory.
pub struct CheckTypesCommand;

impl Command for CheckTypesCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let mut checker = ctx.toolkit.workspace_type_checker(".");
        checker.run()?;
        Ok(CommandResult::completed())
    }
}
