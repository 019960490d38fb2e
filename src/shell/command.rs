//! Shell command execution.

use crate::error::{NdxError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a shell command in `cwd`.
///
/// All standard streams are inherited so package managers and `sudo`
/// can talk to the user.
pub fn execute(command: &str, cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let shell_flag = shell_flag(&shell);

    tracing::debug!("Executing `{}` with {} {}", command, shell, shell_flag);

    let status = Command::new(&shell)
        .arg(shell_flag)
        .arg(command)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| NdxError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    Ok(CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Execute a command in `cwd`, failing on a non-zero exit code.
pub fn execute_checked(command: &str, cwd: &Path) -> Result<CommandResult> {
    let result = execute(command, cwd)?;
    if !result.success {
        return Err(NdxError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        });
    }

    tracing::debug!("`{}` finished in {:?}", command, result.duration);
    Ok(result)
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lic` (interactive login shell) on Unix so version managers such
/// as nvm or volta that are activated in the user's rc files put `yarn`,
/// `npx` and `node` on the PATH. In CI, `-lc` avoids job-control errors
/// from `-i` without a TTY.
fn shell_flag(_shell: &str) -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else if super::is_ci() {
        "-lc"
    } else {
        "-lic"
    }
}
