//! nbctl - batch tooling for Jupyter notebooks
//!
//! This library provides notebook discovery, stored-output inspection and
//! batch orchestration of `jupyter nbconvert` for stripping, executing and
//! rendering notebooks.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Notebook paths and batch outcomes
//! - [`error`]: Error types
//! - [`notebook`]: Notebook document inspection
//! - [`services`]: Discovery and batch running
//! - [`tool`]: External tool abstraction layer

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod notebook;
pub mod services;
pub mod tool;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
