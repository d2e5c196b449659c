//! `jupyter nbconvert` implementation
//!
//! Arguments are passed to the process directly, never through a shell, so
//! paths need no quoting.

use crate::tool::{NotebookTool, Operation, OperationResult};

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Output};

/// Exit code reported when the tool could not be started at all
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Runs operations through `jupyter nbconvert`
#[derive(Debug, Clone)]
pub struct Nbconvert {
    program: OsString,
    subcommand: Option<String>,
}

impl Nbconvert {
    /// Create an invoker for `program`, e.g. `jupyter`
    ///
    /// `subcommand` is inserted before all other arguments; use `None` when
    /// `program` is an `nbconvert` executable itself.
    pub fn new(program: impl Into<OsString>, subcommand: Option<String>) -> Self {
        Self {
            program: program.into(),
            subcommand,
        }
    }

    /// Build the argument list for an operation, without the program name
    pub fn arguments(&self, operation: &Operation, source: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        if let Some(sub) = &self.subcommand {
            args.push(sub.into());
        }

        match operation {
            Operation::ClearOutput => {
                args.push("--to".into());
                args.push("notebook".into());
                args.push("--ClearOutputPreprocessor.enabled=True".into());
                args.push("--inplace".into());
            }
            Operation::ClearToStdout => {
                args.push("--to".into());
                args.push("notebook".into());
                args.push("--ClearOutputPreprocessor.enabled=True".into());
                args.push("--stdout".into());
            }
            Operation::Execute { timeout } => {
                args.push("--to".into());
                args.push("notebook".into());
                args.push("--execute".into());
                args.push("--inplace".into());
                args.push(format!("--ExecutePreprocessor.timeout={}", timeout.as_secs()).into());
            }
            Operation::RenderHtml { output_dir } => {
                args.push("--to".into());
                args.push("html".into());
                let mut flag = OsString::from("--output-dir=");
                flag.push(output_dir.as_os_str());
                args.push(flag);
            }
        }

        args.push(source.as_os_str().to_os_string());
        args
    }

    /// Build the command for an operation
    pub fn command(&self, operation: &Operation, source: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.arguments(operation, source));
        cmd
    }
}

impl Default for Nbconvert {
    fn default() -> Self {
        Self::new("jupyter", Some("nbconvert".to_string()))
    }
}

impl NotebookTool for Nbconvert {
    fn invoke(&self, operation: &Operation, source: &Path) -> OperationResult {
        let mut cmd = self.command(operation, source);
        log::debug!("Running {:?}", cmd);

        into_result(cmd.output(), &self.program)
    }
}

fn into_result(output: io::Result<Output>, program: &OsString) -> OperationResult {
    match output {
        Ok(output) => OperationResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => {
            log::debug!("Failed to spawn {}: {}", program.to_string_lossy(), e);
            OperationResult::failed(
                SPAWN_FAILURE_EXIT_CODE,
                format!("failed to run {}: {}", program.to_string_lossy(), e),
            )
        }
    }
}
