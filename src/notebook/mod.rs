//! Notebook document inspection
//!
//! Reads `.ipynb` documents directly (no external tool) to decide whether
//! stored outputs have been cleared.

pub mod document;
pub mod inspector;

pub use document::{Cell, CellKind, Notebook};
pub use inspector::{inspect, is_stripped, Inspection};
