//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command. The
//! external tool is passed in so handlers can run against a fake.

pub mod check;
pub mod html;
pub mod run;
pub mod strip;

pub use check::run_check_stripped;
pub use html::run_to_html;
pub use run::run_execute;
pub use strip::{run_strip, run_strip_stdout};

use crate::cli::args::{OutputFormat, Target};
use crate::cli::output::{print_output, Message};
use crate::config::Config;
use crate::domain::{is_checkpoint, BatchReport, NotebookPath};
use crate::error::{AppError, Result, ValidationError};
use crate::services::{run_operation, BatchRunner};
use crate::tool::{NotebookTool, Operation};

/// Everything a command handler needs besides its own arguments
pub struct CommandContext<T: NotebookTool> {
    pub tool: T,
    pub config: Config,
    pub format: OutputFormat,
}

impl<T: NotebookTool> CommandContext<T> {
    /// Create a new context
    pub fn new(tool: T, config: Config, format: OutputFormat) -> Self {
        Self {
            tool,
            config,
            format,
        }
    }

    fn batch_runner(&self) -> BatchRunner<&T> {
        BatchRunner::new(&self.tool, self.config.logging())
    }
}

/// Dispatch an external operation to a file or a directory
fn run_target<T: NotebookTool>(
    ctx: &CommandContext<T>,
    operation: &Operation,
    target: &Target,
) -> Result<()> {
    match target {
        Target::File(path) => run_single(ctx, operation, path),
        Target::Directory(root) => {
            let report = ctx.batch_runner().apply(root, operation)?;
            finish_batch(&report, ctx.format)
        }
    }
}

/// Validate a single notebook, then run the operation on it
fn run_single<T: NotebookTool>(
    ctx: &CommandContext<T>,
    operation: &Operation,
    path: &std::path::Path,
) -> Result<()> {
    let notebook = validate_notebook(path, operation)?;
    log::info!("Running {} on {}...", operation, notebook);

    let result = run_operation(
        &ctx.tool,
        operation,
        notebook.as_path(),
        ctx.config.logging(),
    );

    if !result.success() {
        return Err(AppError::OperationFailed {
            operation: operation.to_string(),
            path: notebook.into_path_buf(),
            exit_code: result.exit_code,
        });
    }

    print_output(
        &Message {
            message: format!("{} {}", operation, notebook),
            success: true,
        },
        ctx.format,
    )?;

    Ok(())
}

/// Validate a single notebook for `operation`
///
/// Checkpoint copies are accepted only by operations that leave the source
/// untouched.
fn validate_notebook(path: &std::path::Path, operation: &Operation) -> Result<NotebookPath> {
    let notebook = NotebookPath::new(path)?;

    if operation.mutates_source() && is_checkpoint(notebook.as_path()) {
        return Err(ValidationError::CheckpointCopy {
            path: notebook.into_path_buf(),
            operation: operation.to_string(),
        }
        .into());
    }

    Ok(notebook)
}

/// Print a batch report and turn its verdict into a result
fn finish_batch(report: &BatchReport, format: OutputFormat) -> Result<()> {
    print_output(report, format)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::BatchFailed {
            failed: report.failed(),
            total: report.total(),
        })
    }
}
