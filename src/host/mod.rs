//! File and process side effects.
//!
//! Workflows never touch the filesystem or spawn processes directly; they go
//! through a [`Host`]. [`SystemHost`] performs the operations against a
//! project directory, [`MockHost`] keeps files in memory and records every
//! operation in order for tests.
//!
//! All paths handed to a host are relative to its project root.

pub mod mock;

pub use mock::{HostOp, MockHost};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;
use crate::shell;

/// File and process operations used by commands.
pub trait Host {
    /// Read a file as UTF-8.
    fn read_to_string(&mut self, path: &Path) -> Result<String>;

    /// Write (create or truncate) a file.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and its parents. Existing directories are fine.
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    /// Run a shell command in the project root, failing on non-zero exit.
    fn exec(&mut self, command: &str) -> Result<()>;
}

/// Host backed by the real filesystem and shell.
#[derive(Debug, Clone)]
pub struct SystemHost {
    root: PathBuf,
}

impl SystemHost {
    /// Create a host rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Host for SystemHost {
    fn read_to_string(&mut self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        let content = fs::read_to_string(&full)
            .with_context(|| format!("Failed to read {}", full.display()))?;
        Ok(content)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        tracing::debug!("Writing {}", full.display());
        fs::write(&full, contents).with_context(|| format!("Failed to write {}", full.display()))?;
        Ok(())
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        let full = self.resolve(path);
        tracing::debug!("Creating directory {}", full.display());
        fs::create_dir_all(&full)
            .with_context(|| format!("Failed to create directory {}", full.display()))?;
        Ok(())
    }

    fn exec(&mut self, command: &str) -> Result<()> {
        shell::execute_checked(command, &self.root)?;
        Ok(())
    }
}
