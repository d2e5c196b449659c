//! HTML rendering command implementation

use crate::cli::args::HtmlArgs;
use crate::commands::{run_target, CommandContext};
use crate::error::Result;
use crate::tool::{NotebookTool, Operation};

/// Execute the to-html command
///
/// `--output` wins over the configured output directory.
pub fn run_to_html<T: NotebookTool>(args: &HtmlArgs, ctx: &CommandContext<T>) -> Result<()> {
    let target = args.target.target()?;
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.render.output_dir.clone());

    run_target(ctx, &Operation::RenderHtml { output_dir }, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{OutputFormat, TargetArgs};
    use crate::config::Config;
    use crate::mock::FakeTool;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_succeeds() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::new(FakeTool::new(), Config::default(), OutputFormat::Json);
        let args = HtmlArgs {
            target: TargetArgs {
                file: None,
                directory: Some(dir.path().to_path_buf()),
            },
            output: Some(dir.path().join("site")),
        };

        run_to_html(&args, &ctx).unwrap();
        assert_eq!(ctx.tool.call_count(), 0);
    }

    #[test]
    fn test_configured_output_dir_used_by_default() {
        let dir = TempDir::new().unwrap();
        let notebook = dir.path().join("a.ipynb");
        std::fs::write(&notebook, "{}").unwrap();

        let mut config = Config::default();
        config.render.output_dir = PathBuf::from("public");
        let ctx = CommandContext::new(FakeTool::new(), config, OutputFormat::Table);
        let args = HtmlArgs {
            target: TargetArgs {
                file: Some(notebook),
                directory: None,
            },
            output: None,
        };

        run_to_html(&args, &ctx).unwrap();
        assert_eq!(
            ctx.tool.invocations()[0].operation,
            Operation::RenderHtml {
                output_dir: PathBuf::from("public")
            }
        );
    }
}
