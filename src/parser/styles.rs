//! Paragraph style names from `word/styles.xml`.

use std::collections::HashMap;

use super::xml::XmlElement;

/// Style name used when a document declares no default paragraph style.
pub const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";

/// Built-in styles stored with lowercase names but shown capitalized in
/// the word processor's user interface.
const UI_NAME_ALIASES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// Paragraph style lookup table.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Create an empty style sheet (every paragraph resolves to "Normal").
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from the root `styles` element.
    pub fn from_element(root: &XmlElement) -> Self {
        let mut sheet = Self::new();

        for style in root.children_named("style") {
            if style.attr("type") != Some("paragraph") {
                continue;
            }
            let Some(id) = style.attr("styleId") else {
                continue;
            };
            let name = style
                .child_val("name")
                .map(ui_name)
                .unwrap_or_else(|| id.to_string());

            if matches!(style.attr("default"), Some("1" | "true" | "on")) {
                sheet.default_paragraph = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        sheet
    }

    /// Number of paragraph styles known.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no paragraph styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the default paragraph style.
    pub fn default_paragraph_style(&self) -> &str {
        self.default_paragraph
            .as_deref()
            .unwrap_or(DEFAULT_PARAGRAPH_STYLE)
    }

    /// Resolve a paragraph's `pStyle` id to a style name.
    ///
    /// Missing or unknown ids fall back to the default paragraph style.
    pub fn paragraph_style_name(&self, style_id: Option<&str>) -> String {
        style_id
            .and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or_else(|| self.default_paragraph_style())
            .to_string()
    }
}

fn ui_name(stored: &str) -> String {
    UI_NAME_ALIASES
        .iter()
        .find(|(internal, _)| *internal == stored)
        .map(|(_, ui)| ui.to_string())
        .unwrap_or_else(|| stored.to_string())
}
