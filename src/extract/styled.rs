//! Normalized, style-annotated document representation.

use serde::{Deserialize, Serialize};

use crate::diff::{diff_fields, DeltaPath, Diff, StructuralDelta};
use crate::model::Alignment;

/// A non-empty paragraph with its paragraph-level style summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledParagraph {
    /// Paragraph text, trimmed
    pub text: String,

    /// Font color as `#RRGGBB` (not populated by extraction)
    pub font_color: Option<String>,

    /// Background color as `#RRGGBB` (not populated by extraction)
    pub background_color: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Any run is bold
    pub bold: bool,

    /// Any run is italic
    pub italic: bool,

    /// Any run is underlined
    pub underline: bool,

    /// Alignment set directly on the paragraph
    pub alignment: Option<Alignment>,

    /// Heading style name, e.g. "Heading 1"
    pub heading_level: Option<String>,
}

impl StyledParagraph {
    /// Create an unstyled paragraph record.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Check if the paragraph carries a heading style.
    pub fn is_heading(&self) -> bool {
        self.heading_level.is_some()
    }
}

impl Diff for StyledParagraph {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        diff_fields!(self, other, path, delta;
            text,
            font_color,
            background_color,
            font_size,
            bold,
            italic,
            underline,
            alignment,
            heading_level,
        );
    }
}

/// A table cell's text with its cell-level style summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledTableCell {
    /// Cell text, trimmed
    pub text: String,

    /// Alignment declared in the cell formatting block
    pub alignment: Option<Alignment>,

    /// A border-definition block is present
    pub has_border: bool,
}

impl StyledTableCell {
    /// Create a cell record with no alignment and no border block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Diff for StyledTableCell {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        diff_fields!(self, other, path, delta; text, alignment, has_border);
    }
}

/// A table as rows of styled cells. Identity is positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyledTable {
    /// Rows, each an ordered sequence of cells
    pub rows: Vec<Vec<StyledTableCell>>,
}

impl StyledTable {
    /// Create a table from its rows.
    pub fn new(rows: Vec<Vec<StyledTableCell>>) -> Self {
        Self { rows }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a cell by zero-based row and column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&StyledTableCell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

impl Diff for StyledTable {
    fn diff_at(&self, other: &Self, path: &mut DeltaPath, delta: &mut StructuralDelta) {
        // Rows address directly under the table index: `[t][row][col]`.
        self.rows.diff_at(&other.rows, path, delta);
    }
}

/// The normalized representation of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Non-empty paragraphs in document order
    pub paragraphs: Vec<StyledParagraph>,

    /// Tables in document order
    pub tables: Vec<StyledTable>,
}

impl ExtractedDocument {
    /// Create an empty extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}
