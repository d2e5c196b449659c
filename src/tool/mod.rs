//! External notebook tool abstraction layer
//!
//! Provides a trait-based seam over `jupyter nbconvert` for testability.

pub mod nbconvert;
pub mod traits;

pub use nbconvert::Nbconvert;
pub use traits::{NotebookTool, Operation, OperationResult};
