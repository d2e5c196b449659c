//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::error::ConfigError;
use crate::tool::Nbconvert;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// External tool settings
    pub tool: ToolConfig,
    /// HTML rendering settings
    pub render: RenderConfig,
}

impl Config {
    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tool.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "tool.program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.tool.execute_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tool.execute_timeout_seconds".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Logging settings derived from this configuration
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            verbose: self.general.verbose,
        }
    }

    /// Build the external tool invoker
    pub fn nbconvert(&self) -> Nbconvert {
        Nbconvert::new(&self.tool.program, self.tool.subcommand.clone())
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// External tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program to spawn
    pub program: String,
    /// Subcommand inserted before the nbconvert arguments
    pub subcommand: Option<String>,
    /// Execution bound handed to the tool when running notebooks
    pub execute_timeout_seconds: u64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "jupyter".to_string(),
            subcommand: Some("nbconvert".to_string()),
            execute_timeout_seconds: 600,
        }
    }
}

impl ToolConfig {
    /// Execution bound as a duration
    pub fn execute_timeout(&self) -> Duration {
        Duration::from_secs(self.execute_timeout_seconds)
    }
}

/// HTML rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory rendered HTML is written to when `--output` is not given
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Logging configuration, fixed once at process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Raise verbosity to debug
    pub verbose: bool,
}

impl LoggingConfig {
    /// Level filter used when `RUST_LOG` is not set
    pub fn level_filter(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Whether stdout of successful tool runs should be logged
    pub fn echo_tool_output(&self) -> bool {
        self.verbose
    }
}
