//! Propagate-latest command implementation.
//!
//! `ndx propagate.latest` publishes the current package's latest version to
//! every sibling npm repo through `NpmPropagationCoordinator`.
//!
//! Flags: `--commit` commits the dependency bumps, `--major`/`--majors`
//! also propagates major version changes.

use crate::collaborators::PropagationOptions;
use crate::error::Result;
use crate::repos::sibling_repo_paths;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The propagate.latest command implementation.
pub struct PropagateLatestCommand;

impl PropagateLatestCommand {
    fn options(ctx: &CommandContext<'_>) -> PropagationOptions {
        PropagationOptions {
            should_git_commit: ctx.has_flag(&["--commit"]),
            should_propagate_majors: ctx.has_flag(&["--major", "--majors"]),
        }
    }
}

impl Command for PropagateLatestCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult> {
        let options = Self::options(ctx);
        tracing::debug!("Propagating with {:?}", options);

        let mut coordinator =
            ctx.toolkit
                .propagation_coordinator(".", sibling_repo_paths(), options);
        coordinator.run()?;

        Ok(CommandResult::completed())
    }
}
