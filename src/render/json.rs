//! JSON rendering for comparison results.

use serde::Serialize;

use crate::compare::DiffResult;
use crate::error::{Error, Result};
use crate::extract::ExtractedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a comparison result to JSON.
pub fn to_json(result: &DiffResult, format: JsonFormat) -> Result<String> {
    serialize(result, format)
}

/// Convert an extracted document to JSON.
pub fn extracted_to_json(doc: &ExtractedDocument, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
