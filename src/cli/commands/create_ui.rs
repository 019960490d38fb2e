//! Create-ui command implementation.
//!
//! `ndx create.ui` makes sure the React dependencies are installed (asking
//! first), then asks for a component name, creates the test, module and
//! fake directories and hands off to `UiAutomodule`.

use crate::error::Result;
use crate::manifest::REACT_REQUIREMENT;
use crate::ui::Prompt;
use crate::workflows::{DependencyBootstrap, ScaffoldDirs};

use super::dispatcher::{Command, CommandContext, CommandResult};

const COMPONENT_NAME: &str = "componentName";

/// The create.ui command implementation.
pub struct CreateUiCommand;

impl Command for CreateUiCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let state = DependencyBootstrap::new(REACT_REQUIREMENT).run(ctx.ui, ctx.host)?;
        tracing::debug!("React dependencies: {:?}", state);

        let responses = ctx.ui.ask(&[Prompt::input(
            COMPONENT_NAME,
            "What should the component be called? Example: YourComponent",
        )])?;

        let Some(component_name) = responses.text(COMPONENT_NAME) else {
            return Ok(CommandResult::cancelled());
        };

        let dirs = ScaffoldDirs::for_ui(component_name);
        dirs.create(ctx.host)?;

        let mut automodule = ctx.toolkit.ui_automodule(dirs.ui_options(component_name));
        automodule.run()?;

        ctx.ui.success(&format!("Created {}", component_name));
        Ok(CommandResult::completed())
    }
}
