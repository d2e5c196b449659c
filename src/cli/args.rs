//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::error::ValidationError;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Batch tooling for Jupyter notebooks
///
/// Check, strip, execute and render notebooks through `jupyter nbconvert`.
#[derive(Parser, Debug)]
#[command(name = "nbctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for batch reports
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "NBCTL_CONFIG")]
    pub config: Option<String>,

    /// Program used to run nbconvert
    #[arg(long, global = true, env = "NBCTL_JUPYTER", value_name = "PROGRAM")]
    pub jupyter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify that no code cell has stored output
    CheckStripped(CheckArgs),

    /// Clear outputs in place
    Strip(TargetArgs),

    /// Print a notebook with outputs cleared to stdout
    StripStdout(FileArgs),

    /// Render notebooks to HTML
    ToHtml(HtmlArgs),

    /// Execute notebooks in place
    Run(RunArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// What a command operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single notebook file
    File(PathBuf),
    /// Every notebook below a directory
    Directory(PathBuf),
}

/// A single notebook or a directory of notebooks
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Notebook file to process
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// Directory to search recursively for notebooks
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

impl TargetArgs {
    /// Resolve into a target, requiring one of the two flags
    pub fn target(&self) -> Result<Target, ValidationError> {
        match (&self.file, &self.directory) {
            (Some(file), _) => Ok(Target::File(file.clone())),
            (None, Some(dir)) => Ok(Target::Directory(dir.clone())),
            (None, None) => Err(ValidationError::MissingTarget),
        }
    }
}

/// Arguments for the check-stripped command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Notebook file to check
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// Directory to search recursively for notebooks
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}

impl CheckArgs {
    /// Resolve into a target; the directory defaults to the current one
    pub fn target(&self) -> Target {
        match &self.file {
            Some(file) => Target::File(file.clone()),
            None => Target::Directory(self.directory.clone()),
        }
    }
}

/// A single notebook file
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Notebook file to process
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for the to-html command
#[derive(Args, Debug)]
pub struct HtmlArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Directory rendered HTML files are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Execution timeout handed to nbconvert, in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
