//! Style extraction.
//!
//! Walks a [`WordDocument`] and produces the normalized [`ExtractedDocument`]
//! the differ compares: non-empty paragraphs with a paragraph-level style
//! summary, and tables as rows of cells with their cell-level style.
//!
//! Extraction is a pure function of the document tree. Missing formatting
//! blocks degrade to default style values.

mod styled;

pub use styled::{ExtractedDocument, StyledParagraph, StyledTable, StyledTableCell};

use std::path::Path;

use crate::error::Result;
use crate::model::{Paragraph, Table, TableCell, WordDocument};
use crate::parser::DocxParser;

/// Paragraph style names starting with this prefix are headings.
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// Extract the normalized representation of a parsed document.
pub fn extract(doc: &WordDocument) -> ExtractedDocument {
    let extracted = ExtractedDocument {
        paragraphs: doc.paragraphs().filter_map(extract_paragraph).collect(),
        tables: doc.tables().map(extract_table).collect(),
    };
    log::debug!(
        "Extracted {} paragraphs and {} tables",
        extracted.paragraphs.len(),
        extracted.tables.len()
    );
    extracted
}

/// Parse a DOCX file and extract it.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractedDocument> {
    let doc = DocxParser::open(path)?.parse()?;
    Ok(extract(&doc))
}

/// Parse DOCX bytes and extract them.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractedDocument> {
    let doc = DocxParser::from_bytes(data)?.parse()?;
    Ok(extract(&doc))
}

/// Summarize one paragraph, `None` if its text is blank.
///
/// Bold, italic and underline are true when any run sets them. Runs
/// nested inside hyperlinks count as paragraph runs here.
pub fn extract_paragraph(paragraph: &Paragraph) -> Option<StyledParagraph> {
    let text = paragraph.text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let runs = &paragraph.runs;
    let heading_level = paragraph
        .style_name
        .starts_with(HEADING_STYLE_PREFIX)
        .then(|| paragraph.style_name.clone());

    Some(StyledParagraph {
        text: text.to_string(),
        // Run colors are parsed but deliberately not carried into the summary.
        font_color: None,
        background_color: None,
        font_size: runs.iter().find_map(|r| r.properties.size),
        bold: runs.iter().any(|r| r.properties.is_bold()),
        italic: runs.iter().any(|r| r.properties.is_italic()),
        underline: runs.iter().any(|r| r.properties.is_underlined()),
        alignment: paragraph.alignment,
        heading_level,
    })
}

/// Summarize a table row by row.
pub fn extract_table(table: &Table) -> StyledTable {
    StyledTable::new(
        table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(extract_cell).collect())
            .collect(),
    )
}

/// Summarize one cell from its text and formatting block.
///
/// `has_border` reflects only whether a border-definition block exists;
/// a block whose sides are all `nil` still counts.
pub fn extract_cell(cell: &TableCell) -> StyledTableCell {
    let properties = cell.properties.as_ref();
    StyledTableCell {
        text: cell.text_content().trim().to_string(),
        alignment: properties.and_then(|p| p.alignment),
        has_border: properties.is_some_and(|p| p.borders.is_some()),
    }
}
