//! Error types for ndx operations.
//!
//! This module defines [`NdxError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NdxError` for failures the user needs to recognise by message
//! - Use `anyhow::Error` (via `NdxError::Other`) for unexpected errors
//! - Cancelled prompts are not errors; commands return early instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ndx operations.
#[derive(Debug, Error)]
pub enum NdxError {
    /// The first CLI argument is not a supported command token.
    #[error("The command \"{token}\" is not supported!")]
    UnsupportedCommand { token: String },

    /// A JSON file (manifest, compiler config) could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// A JSON file parsed but lacks a field the workflow depends on.
    #[error("Invalid {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A collaborator from the Node toolkit exited unsuccessfully.
    #[error("Collaborator {class} failed with exit code {code:?}")]
    CollaboratorFailed { class: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ndx operations.
pub type Result<T> = std::result::Result<T, NdxError>;
