//! Per-file outcomes and batch verdicts

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Result of processing a single notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Inspection found no output, or the external tool exited with 0
    Passed,
    /// A code cell still carries stored output
    Unstripped {
        /// Index of the first offending cell, in stored order
        cell_index: usize,
    },
    /// The external tool returned a non-zero status
    Failed {
        /// Exit code, `None` when the tool was killed by a signal
        exit_code: Option<i32>,
    },
    /// The file could not be read or parsed
    Error {
        /// Human-readable cause
        message: String,
    },
}

impl FileOutcome {
    /// Whether this outcome counts toward a successful batch
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "ok"),
            Self::Unstripped { cell_index } => write!(f, "not stripped (cell {})", cell_index),
            Self::Failed {
                exit_code: Some(code),
            } => write!(f, "failed (exit code {})", code),
            Self::Failed { exit_code: None } => write!(f, "failed (terminated by signal)"),
            Self::Error { message } => write!(f, "error: {}", message),
        }
    }
}

/// Outcome of one file inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Collected outcomes of a directory-wide operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Name of the operation that produced the report
    pub operation: String,
    /// Root directory that was scanned
    pub root: PathBuf,
    /// One entry per processed file, in enumeration order
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Create an empty report
    pub fn new(operation: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            operation: operation.into(),
            root: root.into(),
            files: Vec::new(),
        }
    }

    /// Record the outcome for a file
    pub fn push(&mut self, path: impl Into<PathBuf>, outcome: FileOutcome) {
        self.files.push(FileReport {
            path: path.into(),
            outcome,
        });
    }

    /// Number of files processed
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Number of files that did not pass
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.outcome.is_passed()).count()
    }

    /// Batch verdict: success only if every file passed
    ///
    /// An empty batch succeeds.
    pub fn is_success(&self) -> bool {
        self.files.iter().all(|f| f.outcome.is_passed())
    }
}
