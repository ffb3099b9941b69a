//! Shared fixtures: minimal DOCX packages built in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Paragraph styles every fixture with styles declares.
const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("Normal", "Normal"),
    ("Heading1", "heading 1"),
    ("Heading2", "heading 2"),
    ("Title", "Title"),
];

/// A run of text with optional direct formatting.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub size_half_points: Option<u32>,
    pub color: Option<String>,
}

impl Run {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size_half_points = Some(half_points);
        self
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.color = Some(hex.to_string());
        self
    }

    fn to_xml(&self) -> String {
        let mut props = String::new();
        if self.bold {
            props.push_str("<w:b/>");
        }
        if self.italic {
            props.push_str("<w:i/>");
        }
        if self.underline {
            props.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(size) = self.size_half_points {
            props.push_str(&format!(r#"<w:sz w:val="{}"/>"#, size));
        }
        if let Some(ref color) = self.color {
            props.push_str(&format!(r#"<w:color w:val="{}"/>"#, color));
        }

        let props = if props.is_empty() {
            String::new()
        } else {
            format!("<w:rPr>{}</w:rPr>", props)
        };
        format!(
            r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#,
            props,
            escape(&self.text)
        )
    }
}

/// A table cell with optional cell-level formatting.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: String,
    pub alignment: Option<String>,
    pub borders: Option<String>,
}

impl Cell {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn align(mut self, value: &str) -> Self {
        self.alignment = Some(value.to_string());
        self
    }

    /// Border block whose sides all use the given style, e.g. "single" or "nil".
    pub fn borders(mut self, style: &str) -> Self {
        self.borders = Some(style.to_string());
        self
    }

    fn to_xml(&self) -> String {
        let mut props = String::new();
        if let Some(ref style) = self.borders {
            props.push_str("<w:tcBorders>");
            for edge in ["top", "left", "bottom", "right"] {
                props.push_str(&format!(
                    r#"<w:{} w:val="{}" w:sz="4" w:color="000000"/>"#,
                    edge, style
                ));
            }
            props.push_str("</w:tcBorders>");
        }
        if let Some(ref value) = self.alignment {
            props.push_str(&format!(r#"<w:jc w:val="{}"/>"#, value));
        }

        let props = if props.is_empty() {
            String::new()
        } else {
            format!("<w:tcPr>{}</w:tcPr>", props)
        };
        format!(
            "<w:tc>{}<w:p>{}</w:p></w:tc>",
            props,
            Run::new(&self.text).to_xml()
        )
    }
}

/// Builder for an in-memory DOCX package.
#[derive(Debug, Clone, Default)]
pub struct DocxBuilder {
    body: String,
    with_styles: bool,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a `word/styles.xml` part declaring Normal, headings and Title.
    pub fn with_styles(mut self) -> Self {
        self.with_styles = true;
        self
    }

    /// Plain paragraph in the default style.
    pub fn paragraph(self, text: &str) -> Self {
        self.runs(None, None, &[Run::new(text)])
    }

    /// Paragraph with a style id, e.g. "Heading1".
    pub fn styled_paragraph(self, style_id: &str, text: &str) -> Self {
        self.runs(Some(style_id), None, &[Run::new(text)])
    }

    /// Paragraph with explicit alignment, e.g. "center".
    pub fn aligned_paragraph(self, alignment: &str, text: &str) -> Self {
        self.runs(None, Some(alignment), &[Run::new(text)])
    }

    /// Paragraph made of formatted runs.
    pub fn runs(mut self, style_id: Option<&str>, alignment: Option<&str>, runs: &[Run]) -> Self {
        let mut props = String::new();
        if let Some(id) = style_id {
            props.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, id));
        }
        if let Some(value) = alignment {
            props.push_str(&format!(r#"<w:jc w:val="{}"/>"#, value));
        }

        self.body.push_str("<w:p>");
        if !props.is_empty() {
            self.body.push_str(&format!("<w:pPr>{}</w:pPr>", props));
        }
        for run in runs {
            self.body.push_str(&run.to_xml());
        }
        self.body.push_str("</w:p>");
        self
    }

    /// Paragraph with no runs at all.
    pub fn empty_paragraph(mut self) -> Self {
        self.body.push_str("<w:p/>");
        self
    }

    /// Table of plain text cells.
    pub fn table(self, rows: &[&[&str]]) -> Self {
        let rows: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.iter().map(|text| Cell::new(text)).collect())
            .collect();
        self.styled_table(&rows)
    }

    /// Table of formatted cells.
    pub fn styled_table(mut self, rows: &[Vec<Cell>]) -> Self {
        self.body.push_str("<w:tbl>");
        for row in rows {
            self.body.push_str("<w:tr>");
            for cell in row {
                self.body.push_str(&cell.to_xml());
            }
            self.body.push_str("</w:tr>");
        }
        self.body.push_str("</w:tbl>");
        self
    }

    /// Table from raw `w:tr` markup, for malformed layouts.
    pub fn raw_table(mut self, rows_xml: &str) -> Self {
        self.body.push_str("<w:tbl>");
        self.body.push_str(rows_xml);
        self.body.push_str("</w:tbl>");
        self
    }

    /// Serialize the package to bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let opt =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut add = |name: &str, content: &str| {
            zip.start_file(name, opt).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        };

        add("[Content_Types].xml", CONTENT_TYPES);
        add("_rels/.rels", PACKAGE_RELS);
        add("word/document.xml", &self.document_xml());
        if self.with_styles {
            add("word/styles.xml", &styles_xml());
        }

        zip.finish().unwrap().into_inner()
    }

    /// Write the package to a file.
    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }

    fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            W_NS, self.body
        )
    }
}

fn styles_xml() -> String {
    let mut styles = String::new();
    for (index, (id, name)) in DEFAULT_STYLES.iter().enumerate() {
        let default = if index == 0 { r#" w:default="1""# } else { "" };
        styles.push_str(&format!(
            r#"<w:style w:type="paragraph"{} w:styleId="{}"><w:name w:val="{}"/></w:style>"#,
            default, id, name
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{}">{}</w:styles>"#,
        W_NS, styles
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
