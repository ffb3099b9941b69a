//! # docdiff
//!
//! Structural comparison of Word (DOCX) documents.
//!
//! This library reduces each document to a normalized, style-annotated
//! form (non-empty paragraphs with their formatting, tables as grids of
//! styled cells) and reports the differences between two such forms as a
//! nested, order-sensitive delta.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docdiff::{compare_files, render};
//!
//! fn main() -> docdiff::Result<()> {
//!     // Compare two documents
//!     let result = compare_files("draft.docx", "final.docx")?;
//!
//!     // Print a readable report
//!     println!("{}", render::to_text(&result));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style-aware**: bold, italic, underline, font size, alignment, headings
//! - **Tables**: cell text, cell alignment and border presence
//! - **Order-sensitive**: reorders and repeated paragraphs are reported
//! - **Color names**: hex codes resolve to the nearest CSS3 color name
//! - **Upload-safe**: byte uploads live in temp files only for one comparison

pub mod color;
pub mod compare;
pub mod detect;
pub mod diff;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use color::{resolve as resolve_color, Rgb};
pub use compare::{compare_documents, compare_files, compare_uploads, CompareOptions, DiffResult};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use diff::{DeltaPath, StructuralDelta, ValueChange};
pub use error::{Error, Result};
pub use extract::{
    extract, extract_bytes, extract_file, ExtractedDocument, StyledParagraph, StyledTable,
    StyledTableCell,
};
pub use model::{Alignment, Block, Paragraph, Run, Table, TableCell, TableRow, WordDocument};
pub use parser::DocxParser;
pub use render::JsonFormat;

use std::path::Path;

/// Parse a DOCX file into its document tree.
///
/// # Example
///
/// ```no_run
/// use docdiff::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraphs().count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<WordDocument> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse DOCX bytes into a document tree.
pub fn parse_bytes(data: &[u8]) -> Result<WordDocument> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Compare two DOCX files and render the differences as a text report.
///
/// # Example
///
/// ```no_run
/// use docdiff::to_text;
///
/// let report = to_text("draft.docx", "final.docx").unwrap();
/// println!("{}", report);
/// ```
pub fn to_text<P: AsRef<Path>, Q: AsRef<Path>>(first: P, second: Q) -> Result<String> {
    let result = compare_files(first, second)?;
    Ok(render::to_text(&result))
}

/// Compare two DOCX files and render the differences as JSON.
///
/// # Example
///
/// ```no_run
/// use docdiff::{to_json, JsonFormat};
///
/// let json = to_json("draft.docx", "final.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("diff.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
    format: JsonFormat,
) -> Result<String> {
    let result = compare_files(first, second)?;
    render::to_json(&result, format)
}

/// Builder for comparing uploaded documents.
///
/// # Example
///
/// ```no_run
/// use docdiff::DocDiff;
///
/// let first = std::fs::read("draft.docx")?;
/// let second = std::fs::read("final.docx")?;
/// let report = DocDiff::new()
///     .with_temp_dir("/var/tmp/uploads")
///     .compare(&first, &second)?
///     .to_text();
/// # Ok::<(), docdiff::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocDiff {
    options: CompareOptions,
}

impl DocDiff {
    /// Create a new comparison builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory uploads are staged in.
    pub fn with_temp_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_temp_dir(dir);
        self
    }

    /// Compare two uploaded documents.
    pub fn compare(&self, first: &[u8], second: &[u8]) -> Result<DocDiffResult> {
        let result = compare_uploads(first, second, &self.options)?;
        Ok(DocDiffResult { result })
    }
}

/// Result of comparing two uploaded documents.
pub struct DocDiffResult {
    result: DiffResult,
}

impl DocDiffResult {
    /// Check if no differences were found.
    pub fn is_identical(&self) -> bool {
        self.result.is_identical()
    }

    /// Convert to a text report.
    pub fn to_text(&self) -> String {
        render::to_text(&self.result)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Get the underlying result.
    pub fn result(&self) -> &DiffResult {
        &self.result
    }
}
