//! DOCX parsing module.
//!
//! Reads the main document part and the style sheet of a WordprocessingML
//! package into the [`crate::model`] tree.

mod docx_parser;
mod styles;
pub mod xml;

pub use docx_parser::DocxParser;
pub use styles::{StyleSheet, DEFAULT_PARAGRAPH_STYLE};
