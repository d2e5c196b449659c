//! Domain models for nbctl
//!
//! This module contains the domain types shared by commands and services.
//! Paths are validated on construction (fail-fast pattern).

pub mod outcome;
pub mod path;

pub use outcome::{BatchReport, FileOutcome, FileReport};
pub use path::{
    has_notebook_extension, is_checkpoint, validate_directory, NotebookPath, CHECKPOINT_DIR,
    NOTEBOOK_EXTENSION,
};
