//! Notebook document model
//!
//! Only the parts needed for output inspection are modelled; everything
//! else in the document is ignored. Documents are read as stored, without
//! upgrading older format versions.

use serde::Deserialize;
use serde_json::Value;

/// Kind of a notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
    /// nbformat 3 heading cells and anything newer we do not know
    #[serde(other)]
    Other,
}

/// A single notebook cell
#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    pub cell_type: CellKind,
    /// Stored output records; absent on non-code cells
    #[serde(default)]
    pub outputs: Vec<Value>,
}

impl Cell {
    /// Whether this is a code cell with at least one stored output
    pub fn has_output(&self) -> bool {
        self.cell_type == CellKind::Code && !self.outputs.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct Worksheet {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct RawNotebook {
    nbformat: u32,
    cells: Option<Vec<Cell>>,
    worksheets: Option<Vec<Worksheet>>,
}

/// A parsed notebook document
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Major format version as stored in the document
    pub nbformat: u32,
    /// Cells in stored order
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Parse a notebook from its JSON text
    ///
    /// Format 4 documents keep cells at the top level; format 3 documents
    /// keep them inside worksheets, which are flattened in order.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let raw: RawNotebook = serde_json::from_str(text).map_err(|e| e.to_string())?;

        let cells = match (raw.cells, raw.worksheets) {
            (Some(cells), _) => cells,
            (None, Some(worksheets)) => worksheets.into_iter().flat_map(|w| w.cells).collect(),
            (None, None) => {
                return Err(format!(
                    "nbformat {} document has neither cells nor worksheets",
                    raw.nbformat
                ))
            }
        };

        Ok(Self {
            nbformat: raw.nbformat,
            cells,
        })
    }

    /// Index of the first code cell with stored output
    pub fn first_cell_with_output(&self) -> Option<usize> {
        self.cells.iter().position(Cell::has_output)
    }
}
