//! Service layer for notebook batch operations
//!
//! Services encapsulate discovery of notebooks under a root directory and
//! the per-file dispatch and aggregation of outcomes.

pub mod batch;
pub mod discovery;

pub use batch::{run_operation, BatchRunner};
pub use discovery::{discover, Candidate};
