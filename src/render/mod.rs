//! Rendering module for comparison reports and extracted documents.

mod json;
mod text;

pub use json::{extracted_to_json, to_json, JsonFormat};
pub use text::{to_text, NO_DIFFERENCES};
