//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{BatchReport, FileOutcome};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

impl TableDisplay for BatchReport {
    fn to_table(&self) -> String {
        let mut output = format!("{} {}\n", self.operation, self.root.display());

        for file in &self.files {
            let mark = match file.outcome {
                FileOutcome::Passed => '✓',
                _ => '✗',
            };
            output.push_str(&format!(
                "  {} {} {}\n",
                mark,
                file.path.display(),
                file.outcome
            ));
        }

        output.push_str(&format!(
            "{} notebook(s), {} failed",
            self.total(),
            self.failed()
        ));
        output
    }

    fn to_compact(&self) -> String {
        let failed: Vec<String> = self
            .files
            .iter()
            .filter(|f| !f.outcome.is_passed())
            .map(|f| f.path.display().to_string())
            .collect();

        if failed.is_empty() {
            format!("{}: {} ok", self.operation, self.total())
        } else {
            format!(
                "{}: {}/{} failed: {}",
                self.operation,
                failed.len(),
                self.total(),
                failed.join(", ")
            )
        }
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
