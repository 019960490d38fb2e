//! Create-package command implementation.
//!
//! `ndx create.package` asks for a name, description and keywords and has
//! `NpmAutopackage` generate a new package from the latest template.

use crate::error::Result;
use crate::manifest::{autopackage_options, DEFAULT_KEYWORDS};
use crate::ui::{split_on_comma_or_whitespace, Prompt};

use super::dispatcher::{Command, CommandContext, CommandResult};

const PACKAGE_NAME: &str = "packageName";
const DESCRIPTION: &str = "description";
const KEYWORDS: &str = "keywords";

/// The create.package command implementation.
pub struct CreatePackageCommand;

impl CreatePackageCommand {
    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::input(
                PACKAGE_NAME,
                "What should the package be called? Example: useful-package",
            ),
            Prompt::input(
                DESCRIPTION,
                "What should the package description be? Example: A useful package.",
            ),
            Prompt::input(
                KEYWORDS,
                "Enter keywords (comma or space separated, lowercase, optional):",
            )
            .with_default("")
            .with_format(split_on_comma_or_whitespace),
        ]
    }
}

impl Command for CreatePackageCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let responses = ctx.ui.ask(&Self::prompts())?;

        let (Some(name), Some(description)) =
            (responses.text(PACKAGE_NAME), responses.text(DESCRIPTION))
        else {
            return Ok(CommandResult::cancelled());
        };

        let keywords = DEFAULT_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(responses.list(KEYWORDS))
            .collect();

        let mut autopackage = ctx
            .toolkit
            .npm_autopackage(autopackage_options(name, description, keywords));
        autopackage.run()?;

        ctx.ui.success(&format!("Created package {}", name));
        Ok(CommandResult::completed())
    }
}
