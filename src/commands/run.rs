//! Run command implementation
//!
//! Executes notebooks in place. The execution bound is enforced by
//! nbconvert; exceeding it shows up as a non-zero exit.

use crate::cli::args::RunArgs;
use crate::commands::{run_target, CommandContext};
use crate::error::Result;
use crate::tool::{NotebookTool, Operation};

/// Execute the run command
pub fn run_execute<T: NotebookTool>(args: &RunArgs, ctx: &CommandContext<T>) -> Result<()> {
    let target = args.target.target()?;
    let operation = Operation::Execute {
        timeout: ctx.config.tool.execute_timeout(),
    };

    run_target(ctx, &operation, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{OutputFormat, TargetArgs};
    use crate::config::Config;
    use crate::mock::FakeTool;
    use crate::error::{AppError, ValidationError};
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_run_uses_configured_timeout() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.ipynb"), "{}").unwrap();

        let ctx = CommandContext::new(FakeTool::new(), Config::default(), OutputFormat::Table);
        let args = RunArgs {
            target: TargetArgs {
                file: None,
                directory: Some(dir.path().to_path_buf()),
            },
            timeout: None,
        };

        run_execute(&args, &ctx).unwrap();
        assert_eq!(
            ctx.tool.invocations()[0].operation,
            Operation::Execute {
                timeout: Duration::from_secs(600)
            }
        );
    }

    #[test]
    fn test_checkpoint_copy_never_executed() {
        let dir = TempDir::new().unwrap();
        let checkpoints = dir.path().join(".ipynb_checkpoints");
        std::fs::create_dir(&checkpoints).unwrap();
        let path = checkpoints.join("a-checkpoint.ipynb");
        std::fs::write(&path, "{}").unwrap();

        let ctx = CommandContext::new(FakeTool::new(), Config::default(), OutputFormat::Table);
        let args = RunArgs {
            target: TargetArgs {
                file: Some(path),
                directory: None,
            },
            timeout: None,
        };

        let err = run_execute(&args, &ctx).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::CheckpointCopy { .. })
        ));
        assert_eq!(ctx.tool.call_count(), 0);
    }
}
