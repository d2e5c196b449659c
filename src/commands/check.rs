//! Check-stripped command implementation
//!
//! Verifies that notebooks carry no stored output. Runs entirely in
//! process; the external tool is never invoked.

use crate::cli::args::{CheckArgs, Target};
use crate::cli::output::{print_output, Message};
use crate::commands::{finish_batch, CommandContext};
use crate::domain::NotebookPath;
use crate::error::{AppError, Result};
use crate::notebook::{inspect, Inspection};
use crate::tool::NotebookTool;

/// Execute the check-stripped command
pub fn run_check_stripped<T: NotebookTool>(
    args: &CheckArgs,
    ctx: &CommandContext<T>,
) -> Result<()> {
    match args.target() {
        Target::File(path) => {
            let notebook = NotebookPath::new(path)?;
            match inspect(notebook.as_path())? {
                Inspection::Stripped => {
                    print_output(
                        &Message {
                            message: format!("{} is stripped", notebook),
                            success: true,
                        },
                        ctx.format,
                    )?;
                    Ok(())
                }
                Inspection::HasOutput { cell_index } => Err(AppError::NotStripped {
                    path: notebook.into_path_buf(),
                    cell_index,
                }),
            }
        }
        Target::Directory(root) => {
            let report = ctx.batch_runner().check_stripped(&root)?;
            finish_batch(&report, ctx.format)
        }
    }
}
