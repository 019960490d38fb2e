//! Create-impl command implementation.
//!
//! `ndx create.impl` asks for an interface and implementation name, creates
//! the test, module and fake directories and hands off to `ImplAutomodule`.

use crate::error::Result;
use crate::ui::Prompt;
use crate::workflows::ScaffoldDirs;

use super::dispatcher::{Command, CommandContext, CommandResult};

const INTERFACE_NAME: &str = "interfaceName";
const IMPL_NAME: &str = "implName";

/// The create.impl command implementation.
pub struct CreateImplCommand;

impl CreateImplCommand {
    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::input(
                INTERFACE_NAME,
                "What should the interface be called? Example: YourInterface",
            ),
            Prompt::input(
                IMPL_NAME,
                "What should the implementation class be called? Example: YourInterfaceImpl",
            ),
        ]
    }
}

impl Command for CreateImplCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let responses = ctx.ui.ask(&Self::prompts())?;

        let (Some(interface_name), Some(impl_name)) =
            (responses.text(INTERFACE_NAME), responses.text(IMPL_NAME))
        else {
            return Ok(CommandResult::cancelled());
        };

        let dirs = ScaffoldDirs::for_impl(interface_name);
        dirs.create(ctx.host)?;

        let mut automodule = ctx
            .toolkit
            .impl_automodule(dirs.impl_options(interface_name, impl_name));
        automodule.run()?;

        ctx.ui.success(&format!("Created {}", impl_name));
        Ok(CommandResult::completed())
    }
}
