//! Document object model for word-processing content.
//!
//! This is the read-only tree the parser produces and the style extractor
//! walks: body paragraphs with their runs, and tables with their rows,
//! cells, and raw cell formatting blocks.

mod document;
mod paragraph;
mod table;

pub use document::{Block, WordDocument};
pub use paragraph::{Alignment, Paragraph, Run, RunProperties};
pub use table::{
    BorderLine, CellBorders, CellProperties, Table, TableCell, TableRow, VerticalMerge,
};
