//! Configuration builder
//!
//! Merges configuration from files, environment and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicitly named file must load; otherwise the first default
    /// location that parses is used, if any.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = if let Some(path) = path {
            Some(ConfigFile::load(path)?)
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override the tool program
    pub fn with_program(mut self, program: Option<String>) -> Self {
        if let Some(p) = program {
            self.config.tool.program = p;
        }
        self
    }

    /// Override the execution bound in seconds
    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        if let Some(s) = seconds {
            self.config.tool.execute_timeout_seconds = s;
        }
        self
    }

    /// Override the HTML output directory
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.render.output_dir = d;
        }
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
