//! Strip command implementation
//!
//! Clears stored outputs in place, or prints a cleared copy to stdout.

use crate::cli::args::{FileArgs, TargetArgs};
use crate::commands::{run_target, validate_notebook, CommandContext};
use crate::error::{AppError, Result};
use crate::services::run_operation;
use crate::tool::{NotebookTool, Operation};

use std::io::{self, Write};

/// Execute the strip command
pub fn run_strip<T: NotebookTool>(args: &TargetArgs, ctx: &CommandContext<T>) -> Result<()> {
    let target = args.target()?;
    run_target(ctx, &Operation::ClearOutput, &target)
}

/// Execute the strip-stdout command
pub fn run_strip_stdout<T: NotebookTool>(args: &FileArgs, ctx: &CommandContext<T>) -> Result<()> {
    let operation = Operation::ClearToStdout;
    let notebook = validate_notebook(&args.file, &operation)?;

    let result = run_operation(&ctx.tool, &operation, notebook.as_path(), ctx.config.logging());
    if !result.success() {
        return Err(AppError::OperationFailed {
            operation: operation.to_string(),
            path: notebook.into_path_buf(),
            exit_code: result.exit_code,
        });
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(result.stdout.as_bytes())?;
    handle.flush()?;

    Ok(())
}
