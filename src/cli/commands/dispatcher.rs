//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] bundling the UI, host, toolkit and raw arguments
//! - [`CommandDispatcher`] for routing the command token
//!
//! [`COMMANDS`] is the single table of supported tokens. The help listing
//! and the unsupported-command check are both derived from it.

use crate::collaborators::Toolkit;
use crate::error::{NdxError, Result};
use crate::host::Host;
use crate::ui::UserInterface;

use super::bind_snippet::BindSnippetCommand;
use super::build_labrecorder::BuildLabrecorderCommand;
use super::check_types::CheckTypesCommand;
use super::create_impl::CreateImplCommand;
use super::create_package::CreatePackageCommand;
use super::create_ui::CreateUiCommand;
use super::help::HelpCommand;
use super::install_snippets::InstallSnippetsCommand;
use super::propagate_latest::PropagateLatestCommand;
use super::upgrade_package::UpgradePackageCommand;

/// Trait for command implementations.
///
/// Each command token maps to one implementation of this trait.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ctx` - UI, host, toolkit and raw arguments for this run
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] telling whether the command ran to completion.
    /// A prompt session the user abandoned is not an error.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandResult>;
}

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    pub ui: &'a mut dyn UserInterface,
    pub host: &'a mut dyn Host,
    pub toolkit: &'a dyn Toolkit,
    /// Full argument list, command token first.
    pub args: &'a [String],
}

impl CommandContext<'_> {
    /// Whether any of `flags` appears in the arguments.
    pub fn has_flag(&self, flags: &[&str]) -> bool {
        self.args.iter().any(|arg| flags.contains(&arg.as_str()))
    }
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command ran to completion. False when a required
    /// answer was missing and the command stopped without side effects.
    pub completed: bool,
}

impl CommandResult {
    /// The command did its work.
    pub fn completed() -> Self {
        Self { completed: true }
    }

    /// The command stopped because a required answer was missing.
    pub fn cancelled() -> Self {
        Self { completed: false }
    }
}

/// A row of the command table.
pub struct CommandEntry {
    /// Tokens that select this command.
    pub tokens: &'static [&'static str],
    /// One-line description shown in the help text.
    pub description: &'static str,
    build: fn() -> Box<dyn Command>,
}

impl CommandEntry {
    /// Instantiate the command.
    pub fn command(&self) -> Box<dyn Command> {
        (self.build)()
    }
}

/// Supported commands, in help order.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        tokens: &["bind.snippet"],
        description: "Bind a text snippet to a keyboard shortcut in vscode.",
        build: || Box::new(BindSnippetCommand),
    },
    CommandEntry {
        tokens: &["build.labrecorder"],
        description: "Build and install LabRecorder from source with cmake.",
        build: || Box::new(BuildLabrecorderCommand),
    },
    CommandEntry {
        tokens: &["check.types"],
        description: "Type check every package in the npm workspace.",
        build: || Box::new(CheckTypesCommand),
    },
    CommandEntry {
        tokens: &["create.impl"],
        description: "Create implementation for interface with test and fake.",
        build: || Box::new(CreateImplCommand),
    },
    CommandEntry {
        tokens: &["create.package"],
        description: "Create npm package using latest template.",
        build: || Box::new(CreatePackageCommand),
    },
    CommandEntry {
        tokens: &["create.ui"],
        description: "Create React component with test and fake.",
        build: || Box::new(CreateUiCommand),
    },
    CommandEntry {
        tokens: &["install.snippets"],
        description: "Install text snippets with vscode keybindings.",
        build: || Box::new(InstallSnippetsCommand),
    },
    CommandEntry {
        tokens: &["propagate.latest"],
        description: "Propagate latest template to sibling npm packages (--commit, --major).",
        build: || Box::new(PropagateLatestCommand),
    },
    CommandEntry {
        tokens: &["upgrade.package"],
        description: "Upgrade existing npm package to latest template.",
        build: || Box::new(UpgradePackageCommand),
    },
    CommandEntry {
        tokens: &["help", "--help", "-h"],
        description: "Show this help text.",
        build: || Box::new(HelpCommand),
    },
];

/// Find the table entry for a token. Matching is exact.
pub fn lookup(token: &str) -> Option<&'static CommandEntry> {
    COMMANDS
        .iter()
        .find(|entry| entry.tokens.contains(&token))
}

/// Every supported token, in table order.
pub fn supported_tokens() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().flat_map(|entry| entry.tokens.iter().copied())
}

/// Dispatches the command token to its implementation.
pub struct CommandDispatcher {
    args: Vec<String>,
}

impl CommandDispatcher {
    /// Create a dispatcher for the raw argument list (program name excluded).
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// The command token, empty when no arguments were given.
    pub fn token(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }

    /// Validate the token and run its command.
    ///
    /// Unsupported tokens fail before anything is touched.
    pub fn dispatch(
        &self,
        ui: &mut dyn UserInterface,
        host: &mut dyn Host,
        toolkit: &dyn Toolkit,
    ) -> Result<CommandResult> {
        let token = self.token();
        let entry = lookup(token).ok_or_else(|| NdxError::UnsupportedCommand {
            token: token.to_string(),
        })?;

        tracing::debug!("Dispatching '{}'", token);

        let mut ctx = CommandContext {
            ui,
            host,
            toolkit,
            args: &self.args,
        };
        let result = entry.command().execute(&mut ctx)?;
        if !result.completed {
            tracing::debug!("'{}' cancelled", token);
        }
        Ok(result)
    }
}
