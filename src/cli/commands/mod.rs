//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which looks the first
//! argument up in the [`COMMANDS`] table. Commands reach the terminal, the
//! project directory and the Node toolkit only through the
//! [`CommandContext`] they are given, so every workflow runs unchanged
//! against the mocks in tests.

pub mod bind_snippet;
pub mod build_labrecorder;
pub mod check_types;
pub mod create_impl;
pub mod create_package;
pub mod create_ui;
pub mod dispatcher;
pub mod help;
pub mod install_snippets;
pub mod propagate_latest;
pub mod upgrade_package;

pub use dispatcher::{
    lookup, supported_tokens, Command, CommandContext, CommandDispatcher, CommandEntry,
    CommandResult, COMMANDS,
};
pub use help::help_text;
