//! In-memory host for testing.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{NdxError, Result};

use super::Host;

/// A recorded host operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    Read(PathBuf),
    Write(PathBuf),
    CreateDir(PathBuf),
    Exec(String),
}

/// Host that keeps files in memory and records operations in order.
#[derive(Debug, Default)]
pub struct MockHost {
    files: BTreeMap<PathBuf, String>,
    dirs: Vec<PathBuf>,
    ops: Vec<HostOp>,
    failing_command: Option<String>,
    failing_dir: Option<PathBuf>,
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_string());
        self
    }

    /// Make a shell command fail with exit code 1.
    pub fn fail_command(&mut self, command: &str) {
        self.failing_command = Some(command.to_string());
    }

    /// Make creating a directory fail.
    pub fn fail_create_dir(&mut self, path: &str) {
        self.failing_dir = Some(PathBuf::from(path));
    }

    /// All operations, in order.
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Current contents of a file.
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(Path::new(path)).map(String::as_str)
    }

    /// Directories created, in order.
    pub fn created_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Shell commands run, in order.
    pub fn commands(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Exec(command) => Some(command.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Paths written, in order.
    pub fn writes(&self) -> Vec<&Path> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Write(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }
}

impl Host for MockHost {
    fn read_to_string(&mut self, path: &Path) -> Result<String> {
        self.ops.push(HostOp::Read(path.to_path_buf()));
        self.files.get(path).cloned().ok_or_else(|| {
            NdxError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.ops.push(HostOp::Write(path.to_path_buf()));
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        if self.failing_dir.as_deref() == Some(path) {
            return Err(NdxError::Io(std::io::Error::new(
                ErrorKind::PermissionDenied,
                format!("cannot create {}", path.display()),
            )));
        }
        self.ops.push(HostOp::CreateDir(path.to_path_buf()));
        if !self.dirs.iter().any(|d| d == path) {
            self.dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn exec(&mut self, command: &str) -> Result<()> {
        self.ops.push(HostOp::Exec(command.to_string()));
        if self.failing_command.as_deref() == Some(command) {
            return Err(NdxError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_operations_in_order() {
        let mut host = MockHost::new().with_file("package.json", "{}");

        host.read_to_string(Path::new("package.json")).unwrap();
        host.exec("npx tsc").unwrap();
        host.create_dir_all(Path::new("src/ui")).unwrap();
        host.write(Path::new("tsconfig.json"), "{}").unwrap();

        assert_eq!(
            host.ops(),
            &[
                HostOp::Read(PathBuf::from("package.json")),
                HostOp::Exec("npx tsc".to_string()),
                HostOp::CreateDir(PathBuf::from("src/ui")),
                HostOp::Write(PathBuf::from("tsconfig.json")),
            ]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let mut host = MockHost::new();
        let err = host.read_to_string(Path::new("package.json")).unwrap_err();
        assert!(matches!(err, NdxError::Io(e) if e.kind() == ErrorKind::NotFound));
    }

    #[test]
    fn failing_command_still_recorded() {
        let mut host = MockHost::new();
        host.fail_command("npx tsc");

        assert!(host.exec("npx tsc").is_err());
        assert_eq!(host.commands(), vec!["npx tsc"]);
    }

    #[test]
    fn failing_dir_is_not_recorded() {
        let mut host = MockHost::new();
        host.fail_create_dir("src/impl");

        assert!(host.create_dir_all(Path::new("src/impl")).is_err());
        assert!(host.created_dirs().is_empty());
    }
}
