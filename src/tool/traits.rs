//! Trait definitions for external notebook operations
//!
//! These types abstract over the external tool to enable testing with fakes.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default bound for executing a notebook in place
pub const DEFAULT_EXECUTE_TIMEOUT: Duration = Duration::from_secs(600);

/// An operation delegated to the external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Clear all cell outputs, rewriting the notebook in place
    ClearOutput,
    /// Clear all cell outputs and write the result to stdout
    ClearToStdout,
    /// Execute the notebook in place; the tool enforces the per-cell timeout
    Execute { timeout: Duration },
    /// Render the notebook to HTML inside `output_dir`
    RenderHtml { output_dir: PathBuf },
}

impl Operation {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClearOutput => "strip",
            Self::ClearToStdout => "strip-stdout",
            Self::Execute { .. } => "run",
            Self::RenderHtml { .. } => "to-html",
        }
    }

    /// Path of the file the operation writes besides the source, if any
    ///
    /// nbconvert names rendered files after the notebook stem, so sources
    /// in different directories can map to the same output.
    pub fn output_path(&self, source: &Path) -> Option<PathBuf> {
        match self {
            Self::RenderHtml { output_dir } => {
                let mut name: OsString = source.file_stem()?.to_os_string();
                name.push(".html");
                Some(output_dir.join(name))
            }
            _ => None,
        }
    }

    /// Whether the operation rewrites the source notebook
    pub fn mutates_source(&self) -> bool {
        matches!(self, Self::ClearOutput | Self::Execute { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one external invocation
///
/// A non-zero exit is data for the caller, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationResult {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl OperationResult {
    /// A successful result with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given exit code and stderr
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the tool exited with status 0
    #[inline]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for running notebook operations
///
/// Implementations run synchronously and never retry.
pub trait NotebookTool {
    /// Run `operation` against the notebook at `source`
    fn invoke(&self, operation: &Operation, source: &Path) -> OperationResult;
}

impl<T: NotebookTool + ?Sized> NotebookTool for &T {
    fn invoke(&self, operation: &Operation, source: &Path) -> OperationResult {
        (**self).invoke(operation, source)
    }
}
