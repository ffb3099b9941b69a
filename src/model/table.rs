//! Table types.

use super::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row, laid out on the table grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row, one per grid column
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row of plain text cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub paragraphs: Vec<Paragraph>,

    /// Raw cell formatting block, if the cell declares one
    pub properties: Option<CellProperties>,
}

impl TableCell {
    /// Create a cell holding one paragraph of text and no formatting block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            properties: None,
        }
    }

    /// Set the formatting block and return self.
    pub fn with_properties(mut self, properties: CellProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Cell text: paragraph texts joined by newlines.
    pub fn text_content(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of grid columns the cell covers.
    pub fn grid_span(&self) -> usize {
        self.properties
            .as_ref()
            .map(|p| p.grid_span.max(1) as usize)
            .unwrap_or(1)
    }

    /// Check if this cell continues a vertical merge from the row above.
    pub fn continues_vertical_merge(&self) -> bool {
        matches!(
            self.properties.as_ref().and_then(|p| p.vertical_merge),
            Some(VerticalMerge::Continue)
        )
    }
}

/// The cell formatting block (`tcPr`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellProperties {
    /// Explicit alignment setting
    pub alignment: Option<Alignment>,

    /// Border-definition block, if declared
    pub borders: Option<CellBorders>,

    /// Number of grid columns spanned
    pub grid_span: u32,

    /// Vertical merge marker
    pub vertical_merge: Option<VerticalMerge>,
}

impl Default for CellProperties {
    fn default() -> Self {
        Self {
            alignment: None,
            borders: None,
            grid_span: 1,
            vertical_merge: None,
        }
    }
}

/// A border-definition block: the sides it declares, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBorders {
    /// Declared sides
    pub sides: Vec<BorderLine>,
}

impl CellBorders {
    /// Check if any declared side is actually drawn.
    pub fn any_drawn(&self) -> bool {
        self.sides.iter().any(BorderLine::is_drawn)
    }
}

/// One declared border side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLine {
    /// Edge name (`top`, `left`, `bottom`, `right`, `insideH`, ...)
    pub edge: String,

    /// Line style (`single`, `double`, `nil`, `none`, ...)
    pub style: String,

    /// Width in eighths of a point
    pub size: Option<u32>,

    /// Line color as `RRGGBB` or `auto`
    pub color: Option<String>,
}

impl BorderLine {
    /// Check if this side produces a visible line.
    pub fn is_drawn(&self) -> bool {
        !matches!(self.style.as_str(), "nil" | "none") && self.size != Some(0)
    }
}

/// Vertical merge marker of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// First cell of a merged range
    Restart,
    /// Continuation of the range above
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["Name", "Age"]));
        table.add_row(TableRow::from_strings(["Alice", "30"]));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_cell_text_joins_paragraphs() {
        let cell = TableCell {
            paragraphs: vec![Paragraph::with_text("PO Box 6987"), Paragraph::with_text("Ferndale")],
            properties: None,
        };
        assert_eq!(cell.text_content(), "PO Box 6987\nFerndale");
    }

    #[test]
    fn test_cell_spans() {
        let cell = TableCell::text("Merged").with_properties(CellProperties {
            grid_span: 3,
            ..Default::default()
        });
        assert_eq!(cell.grid_span(), 3);
        assert!(!cell.continues_vertical_merge());

        let below = TableCell::text("").with_properties(CellProperties {
            vertical_merge: Some(VerticalMerge::Continue),
            ..Default::default()
        });
        assert_eq!(below.grid_span(), 1);
        assert!(below.continues_vertical_merge());
    }

    #[test]
    fn test_border_drawn() {
        let nil = BorderLine {
            edge: "top".to_string(),
            style: "nil".to_string(),
            size: None,
            color: None,
        };
        let zero = BorderLine {
            edge: "left".to_string(),
            style: "single".to_string(),
            size: Some(0),
            color: None,
        };
        let borders = CellBorders {
            sides: vec![nil, zero],
        };
        assert!(!borders.any_drawn());
    }
}
