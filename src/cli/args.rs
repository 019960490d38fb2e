//! CLI argument definitions.
//!
//! ndx takes a single command token followed by optional flags. clap's own
//! help and version handling is turned off and the arguments are captured
//! verbatim, so the dispatcher sees the raw tokens (including `--help`,
//! `-h` and `--`) and applies its exact-match rules. Runtime settings come
//! from the environment, see [`Settings::from_env`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Marks the end of options for clap; every argument after it is a value.
const END_OF_OPTIONS: &str = "--";

/// ndx - developer tooling for neurodevs packages.
#[derive(Debug, Parser)]
#[command(name = "ndx")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command token followed by its flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse a full argument vector, program name first.
    ///
    /// Nothing after the program name is interpreted by clap.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("ndx"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from(END_OF_OPTIONS)))
            .chain(argv);
        Self::parse_from(escaped)
    }

    /// Parse the process arguments.
    pub fn from_env_args() -> Self {
        Self::from_argv(std::env::args_os())
    }

    /// Runtime settings for a project root.
    pub fn settings(&self, project_root: impl Into<PathBuf>) -> Settings {
        Settings::from_env(project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::from_argv(std::iter::once("ndx").chain(args.iter().copied()))
    }

    #[test]
    fn captures_command_token() {
        let cli = parse(&["create.impl"]);
        assert_eq!(cli.args, vec!["create.impl"]);
    }

    #[test]
    fn help_flags_are_passed_through() {
        assert_eq!(parse(&["--help"]).args, vec!["--help"]);
        assert_eq!(parse(&["-h"]).args, vec!["-h"]);
    }

    #[test]
    fn command_flags_are_passed_through() {
        let cli = parse(&["propagate.latest", "--commit", "--major"]);
        assert_eq!(cli.args, vec!["propagate.latest", "--commit", "--major"]);
    }

    #[test]
    fn no_arguments_is_empty() {
        assert!(parse(&[]).args.is_empty());
    }

    #[test]
    fn option_like_first_argument_is_the_token() {
        assert_eq!(parse(&["--debug"]).args, vec!["--debug"]);
        assert_eq!(parse(&["--node"]).args, vec!["--node"]);
        assert_eq!(parse(&["--meta-node=x"]).args, vec!["--meta-node=x"]);
        assert_eq!(parse(&["--debug", "help"]).args, vec!["--debug", "help"]);
    }

    #[test]
    fn end_of_options_marker_is_the_token() {
        assert_eq!(parse(&["--"]).args, vec!["--"]);
        assert_eq!(parse(&["--", "help"]).args, vec!["--", "help"]);
    }

    #[test]
    fn settings_use_project_root() {
        let settings = parse(&["check.types"]).settings("/projects/app");
        assert_eq!(settings.project_root, PathBuf::from("/projects/app"));
    }
}
