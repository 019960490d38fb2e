//! Command-line interface for ndx.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command table, dispatcher and command implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{
    help_text, Command, CommandContext, CommandDispatcher, CommandResult, COMMANDS,
};
