//! Comparison orchestration.
//!
//! Loads two documents, extracts both, and diffs the paragraph sequences
//! and the table sequences independently. Uploaded bytes are persisted to
//! transient files for the duration of one comparison; those files are
//! removed on every exit path, including extraction failures.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::diff::{diff, StructuralDelta};
use crate::error::Result;
use crate::extract::{extract_file, ExtractedDocument};

/// Section title for paragraph text and style differences.
pub const PARAGRAPH_SECTION: &str = "Text & Styles Differences";

/// Section title for table differences.
pub const TABLE_SECTION: &str = "Table Differences";

const TEMP_PREFIX: &str = "docdiff-";
const TEMP_SUFFIX: &str = ".docx";

/// Options for a comparison.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Directory for transient upload copies (system temp dir if unset)
    pub temp_dir: Option<PathBuf>,
}

impl CompareOptions {
    /// Create new comparison options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory transient upload copies are written to.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }
}

/// Result of comparing two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffResult {
    /// Differences between the paragraph sequences
    #[serde(rename = "Text & Styles Differences")]
    pub paragraph_diff: StructuralDelta,

    /// Differences between the table sequences
    #[serde(rename = "Table Differences")]
    pub table_diff: StructuralDelta,
}

impl DiffResult {
    /// Check if the documents are identical on both axes.
    pub fn is_identical(&self) -> bool {
        self.paragraph_diff.is_empty() && self.table_diff.is_empty()
    }

    /// Both sections with their titles, paragraphs first.
    pub fn sections(&self) -> [(&'static str, &StructuralDelta); 2] {
        [
            (PARAGRAPH_SECTION, &self.paragraph_diff),
            (TABLE_SECTION, &self.table_diff),
        ]
    }
}

/// Compare two extracted documents.
pub fn compare_documents(first: &ExtractedDocument, second: &ExtractedDocument) -> DiffResult {
    DiffResult {
        paragraph_diff: diff(&first.paragraphs, &second.paragraphs),
        table_diff: diff(&first.tables, &second.tables),
    }
}

/// Compare two DOCX files on disk.
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(first: P, second: Q) -> Result<DiffResult> {
    let first = extract_file(first)?;
    let second = extract_file(second)?;
    let result = compare_documents(&first, &second);

    log::info!(
        "Comparison found {} paragraph and {} table differences",
        result.paragraph_diff.len(),
        result.table_diff.len()
    );
    Ok(result)
}

/// Compare two uploaded DOCX documents given as bytes.
///
/// Each upload is written to its own temporary file, and both files are
/// deleted before this returns, whether or not the comparison succeeded.
///
/// # Example
///
/// ```no_run
/// use docdiff::{compare_uploads, CompareOptions};
///
/// let first = std::fs::read("draft.docx")?;
/// let second = std::fs::read("final.docx")?;
/// let result = compare_uploads(&first, &second, &CompareOptions::default())?;
/// println!("identical: {}", result.is_identical());
/// # Ok::<(), docdiff::Error>(())
/// ```
pub fn compare_uploads(
    first: &[u8],
    second: &[u8],
    options: &CompareOptions,
) -> Result<DiffResult> {
    let first_file = persist_upload(first, options)?;
    let second_file = persist_upload(second, options)?;

    let result = compare_files(first_file.path(), second_file.path());

    release(first_file);
    release(second_file);
    result
}

fn persist_upload(data: &[u8], options: &CompareOptions) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);

    let mut file = match options.temp_dir {
        Some(ref dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(data)?;
    file.flush()?;

    log::debug!(
        "Persisted upload ({} bytes) to {}",
        data.len(),
        file.path().display()
    );
    Ok(file)
}

fn release(file: NamedTempFile) {
    let path = file.path().to_path_buf();
    if let Err(e) = file.close() {
        log::warn!("Failed to remove temporary file {}: {}", path.display(), e);
    }
}
