//! Stripped-output inspection
//!
//! Each call loads the document fresh and drops it once the verdict is known.

use crate::error::NotebookError;
use crate::notebook::Notebook;

use std::path::Path;

/// Verdict of inspecting one notebook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspection {
    /// No code cell carries output
    Stripped,
    /// The first code cell (in stored order) that carries output
    HasOutput { cell_index: usize },
}

impl Inspection {
    /// Whether the notebook is stripped
    #[inline]
    pub fn is_stripped(&self) -> bool {
        matches!(self, Self::Stripped)
    }
}

/// Load a notebook and report whether any code cell has stored output
///
/// Read and parse failures are returned as errors, never as
/// [`Inspection::HasOutput`].
pub fn inspect(path: &Path) -> Result<Inspection, NotebookError> {
    let text = std::fs::read_to_string(path).map_err(|source| NotebookError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let notebook = Notebook::from_json(&text).map_err(|message| NotebookError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    let verdict = match notebook.first_cell_with_output() {
        Some(cell_index) => Inspection::HasOutput { cell_index },
        None => Inspection::Stripped,
    };

    log::debug!(
        "Inspected {} (nbformat {}, {} cells): {:?}",
        path.display(),
        notebook.nbformat,
        notebook.cells.len(),
        verdict
    );

    Ok(verdict)
}

/// Convenience wrapper returning only the boolean verdict
pub fn is_stripped(path: &Path) -> Result<bool, NotebookError> {
    inspect(path).map(|i| i.is_stripped())
}
