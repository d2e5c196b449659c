//! Notebook path types
//!
//! Validation of notebook file references and the checkpoint filter.

use crate::error::ValidationError;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// File extension of notebook documents
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Directory the notebook server stores checkpoint copies in
pub const CHECKPOINT_DIR: &str = ".ipynb_checkpoints";

/// Whether a path lies inside a checkpoint directory
///
/// Matches whole path components only, so `notes.ipynb_checkpoints.bak/a.ipynb`
/// is not a checkpoint.
pub fn is_checkpoint(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == OsStr::new(CHECKPOINT_DIR)))
}

/// Whether a path carries the notebook extension
pub fn has_notebook_extension(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(NOTEBOOK_EXTENSION))
}

/// Ensure a batch root exists and is a directory
pub fn validate_directory(path: &Path) -> Result<(), ValidationError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ValidationError::NotADirectory(path.to_path_buf()))
    }
}

/// A validated path to an existing notebook file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NotebookPath(PathBuf);

impl NotebookPath {
    /// Validate a user-supplied path
    ///
    /// The extension is checked first so that a wrong extension is reported
    /// even when the file does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();

        if !has_notebook_extension(&path) {
            return Err(ValidationError::WrongExtension {
                path,
                expected: NOTEBOOK_EXTENSION.to_string(),
            });
        }

        if !path.exists() {
            return Err(ValidationError::FileNotFound(path));
        }

        if !path.is_file() {
            return Err(ValidationError::NotAFile(path));
        }

        Ok(Self(path))
    }

    /// Get the underlying path
    #[inline]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into the underlying path
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for NotebookPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for NotebookPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
