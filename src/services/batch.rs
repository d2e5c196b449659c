//! Batch runner
//!
//! Applies one per-file operation to every notebook below a root directory
//! and folds the outcomes into a single verdict. Files are processed one
//! at a time, and a failing file never stops the rest of the batch.

use crate::config::LoggingConfig;
use crate::domain::{BatchReport, FileOutcome};
use crate::error::ValidationError;
use crate::notebook::{inspect, Inspection};
use crate::services::discovery::{discover, Candidate};
use crate::tool::{NotebookTool, Operation, OperationResult};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Runs batch operations through a notebook tool
pub struct BatchRunner<T: NotebookTool> {
    tool: T,
    logging: LoggingConfig,
}

impl<T: NotebookTool> BatchRunner<T> {
    /// Create a new batch runner
    pub fn new(tool: T, logging: LoggingConfig) -> Self {
        Self { tool, logging }
    }

    /// Verify that no notebook below `root` carries stored output
    pub fn check_stripped(&self, root: &Path) -> Result<BatchReport, ValidationError> {
        self.run_each("check-stripped", root, |path| {
            log::info!("Checking {}...", path.display());
            match inspect(path) {
                Ok(Inspection::Stripped) => FileOutcome::Passed,
                Ok(Inspection::HasOutput { cell_index }) => {
                    log::error!(
                        "Notebook file {} is not stripped (cell {} has output).",
                        path.display(),
                        cell_index
                    );
                    FileOutcome::Unstripped { cell_index }
                }
                Err(e) => {
                    log::error!("{}", e);
                    FileOutcome::Error {
                        message: e.to_string(),
                    }
                }
            }
        })
    }

    /// Apply an external operation to every notebook below `root`
    pub fn apply(
        &self,
        root: &Path,
        operation: &Operation,
    ) -> Result<BatchReport, ValidationError> {
        let mut outputs = OutputTracker::default();

        self.run_each(operation.name(), root, |path| {
            if let Some((output, earlier)) = outputs.record(operation, path) {
                log::warn!(
                    "{} overwrites {} already written from {}",
                    path.display(),
                    output.display(),
                    earlier.display()
                );
            }

            log::info!("Running {} on {}...", operation, path.display());
            let result = run_operation(&self.tool, operation, path, self.logging);
            if result.success() {
                FileOutcome::Passed
            } else {
                FileOutcome::Failed {
                    exit_code: result.exit_code,
                }
            }
        })
    }

    fn run_each<F>(
        &self,
        operation: &str,
        root: &Path,
        mut per_file: F,
    ) -> Result<BatchReport, ValidationError>
    where
        F: FnMut(&Path) -> FileOutcome,
    {
        let mut report = BatchReport::new(operation, root);

        for candidate in discover(root)? {
            let outcome = match &candidate {
                Candidate::Notebook(path) => per_file(path.as_path()),
                Candidate::Unreadable { message, .. } => FileOutcome::Error {
                    message: message.clone(),
                },
            };
            report.push(candidate.path(), outcome);
        }

        if report.is_success() {
            log::info!(
                "{}: all {} notebook(s) passed under {}",
                operation,
                report.total(),
                root.display()
            );
        } else {
            log::warn!(
                "{}: {} of {} notebook(s) failed under {}",
                operation,
                report.failed(),
                report.total(),
                root.display()
            );
        }

        Ok(report)
    }
}

/// Remembers which source produced each output file in a batch
#[derive(Debug, Default)]
struct OutputTracker {
    written: HashMap<PathBuf, PathBuf>,
}

impl OutputTracker {
    /// Record the output of `source`
    ///
    /// Returns the output path and the earlier source when another file in
    /// the batch already wrote to the same output.
    fn record(&mut self, operation: &Operation, source: &Path) -> Option<(PathBuf, PathBuf)> {
        let output = operation.output_path(source)?;
        let earlier = self.written.insert(output.clone(), source.to_path_buf())?;
        Some((output, earlier))
    }
}

/// Run one operation on one file and log the captured streams
///
/// Streams of a failed run are always logged; stdout of a successful run
/// only when the logging configuration asks for it.
pub fn run_operation<T: NotebookTool>(
    tool: &T,
    operation: &Operation,
    path: &Path,
    logging: LoggingConfig,
) -> OperationResult {
    let result = tool.invoke(operation, path);

    if result.success() {
        if logging.echo_tool_output() && !result.stdout.trim().is_empty() {
            log::debug!("{} stdout:\n{}", path.display(), result.stdout.trim_end());
        }
    } else {
        log::error!(
            "{} failed for {} ({})",
            operation,
            path.display(),
            crate::error::describe_exit(&result.exit_code)
        );
        if !result.stdout.trim().is_empty() {
            log::error!("stdout:\n{}", result.stdout.trim_end());
        }
        if !result.stderr.trim().is_empty() {
            log::error!("stderr:\n{}", result.stderr.trim_end());
        }
    }

    result
}
