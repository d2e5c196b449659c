//! Unified error types for nbctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad command-line input, detected before any subprocess runs
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Error from reading or parsing a notebook document
    #[error("Notebook error: {0}")]
    Notebook(#[from] NotebookError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A single-file notebook contains stored output
    #[error("Notebook {} is not stripped (cell {cell_index} has output)", .path.display())]
    NotStripped { path: PathBuf, cell_index: usize },

    /// The external tool returned a non-zero status for a single file
    #[error("{operation} failed for {} ({})", .path.display(), describe_exit(.exit_code))]
    OperationFailed {
        operation: String,
        path: PathBuf,
        exit_code: Option<i32>,
    },

    /// At least one file in a batch did not pass
    #[error("{failed} of {total} notebook(s) failed")]
    BatchFailed { failed: usize, total: usize },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from validating command-line paths
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path does not carry the notebook extension
    #[error("{} is not a notebook (expected a .{expected} file)", .path.display())]
    WrongExtension { path: PathBuf, expected: String },

    /// Notebook file does not exist
    #[error("Notebook file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Path exists but is not a regular file
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Batch root is missing or not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A mutating operation targeted a checkpoint copy
    #[error("Refusing to {operation} checkpoint copy {}", .path.display())]
    CheckpointCopy { path: PathBuf, operation: String },

    /// Neither a file nor a directory was given
    #[error("Either --file or --directory is required")]
    MissingTarget,
}

/// Errors from loading a notebook document
#[derive(Error, Debug)]
pub enum NotebookError {
    /// The notebook file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid notebook document
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Render an exit code for error messages
pub fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
