//! CLI argument parsing and output formatting
//!
//! Uses clap for argument definitions; batch reports are printed through
//! [`output::print_output`].

pub mod args;
pub mod output;

pub use args::{Cli, Commands, Target};
