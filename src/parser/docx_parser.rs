//! DOCX package parser using zip and quick-xml.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, BorderLine, CellBorders, CellProperties, Paragraph, Run, RunProperties,
    Table, TableCell, TableRow, VerticalMerge, WordDocument,
};

use super::styles::StyleSheet;
use super::xml::{parse_document, XmlElement};

const PACKAGE_RELS: &str = "_rels/.rels";
const FALLBACK_MAIN_PART: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";
const STYLES_REL: &str = "/styles";

/// Grid width assumed when a table declares no `tblGrid` (Word's column limit).
const MAX_GRID_COLUMNS: usize = 63;

/// DOCX document parser.
pub struct DocxParser {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        detect_format_from_path(path)?;

        let data = fs::read(path)?;
        Self::from_vec(data)
    }

    /// Parse a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Self::from_vec(data.to_vec())
    }

    /// Parse a DOCX package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        detect_format_from_bytes(&data)?;
        Self::from_vec(data)
    }

    fn from_vec(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Parse the main document part into a [`WordDocument`].
    pub fn parse(mut self) -> Result<WordDocument> {
        let main_part = self.main_part_name()?;
        log::debug!("Reading main document part {}", main_part);

        let xml = self
            .read_part(&main_part)?
            .ok_or_else(|| Error::MissingPart(main_part.clone()))?;
        let root = parse_document(&xml)?;
        let body = root
            .child("body")
            .ok_or_else(|| Error::Xml(format!("{} has no body element", main_part)))?;

        let styles = self.load_styles(&main_part)?;
        Ok(parse_body(body, &styles))
    }

    /// Read a package part as text, `None` if the archive lacks it.
    fn read_part(&mut self, name: &str) -> Result<Option<String>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(Some(content))
    }

    fn main_part_name(&mut self) -> Result<String> {
        let Some(rels) = self.read_part(PACKAGE_RELS)? else {
            log::debug!("Package has no {}, assuming {}", PACKAGE_RELS, FALLBACK_MAIN_PART);
            return Ok(FALLBACK_MAIN_PART.to_string());
        };
        let rels = parse_document(&rels)?;
        Ok(relationship_target(&rels, OFFICE_DOCUMENT_REL, "")
            .unwrap_or_else(|| FALLBACK_MAIN_PART.to_string()))
    }

    fn load_styles(&mut self, main_part: &str) -> Result<StyleSheet> {
        let (dir, file) = split_part_name(main_part);
        let rels_name = format!("{}_rels/{}.rels", dir, file);

        let styles_part = match self.read_part(&rels_name)? {
            Some(rels) => relationship_target(&parse_document(&rels)?, STYLES_REL, dir),
            None => None,
        }
        .unwrap_or_else(|| format!("{}styles.xml", dir));

        match self.read_part(&styles_part)? {
            Some(xml) => Ok(StyleSheet::from_element(&parse_document(&xml)?)),
            None => {
                log::debug!("No styles part at {}, using default style names", styles_part);
                Ok(StyleSheet::new())
            }
        }
    }
}

/// Split `word/document.xml` into (`word/`, `document.xml`).
fn split_part_name(part: &str) -> (&str, &str) {
    match part.rfind('/') {
        Some(idx) => (&part[..=idx], &part[idx + 1..]),
        None => ("", part),
    }
}

/// Find the target of the first relationship whose type ends with `type_suffix`,
/// resolved against the source part's directory.
fn relationship_target(rels: &XmlElement, type_suffix: &str, base_dir: &str) -> Option<String> {
    let rel = rels.children_named("Relationship").find(|r| {
        r.attr("Type").is_some_and(|t| t.ends_with(type_suffix))
            && r.attr("TargetMode") != Some("External")
    })?;
    let target = rel.attr("Target")?;
    Some(resolve_part_name(base_dir, target))
}

fn resolve_part_name(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

fn parse_body(body: &XmlElement, styles: &StyleSheet) -> WordDocument {
    let mut doc = WordDocument::new();
    for element in body.elements() {
        match element.name.as_str() {
            "p" => doc.add_block(Block::Paragraph(parse_paragraph(element, styles))),
            "tbl" => doc.add_block(Block::Table(parse_table(element, styles))),
            _ => {}
        }
    }
    doc
}

fn parse_paragraph(p: &XmlElement, styles: &StyleSheet) -> Paragraph {
    let ppr = p.child("pPr");
    let style_id = ppr.and_then(|props| props.child_val("pStyle"));

    let mut paragraph = Paragraph::new(styles.paragraph_style_name(style_id));
    paragraph.alignment = ppr
        .and_then(|props| props.child_val("jc"))
        .and_then(|value| alignment_value(value, "paragraph"));

    for child in p.elements() {
        match child.name.as_str() {
            "r" => paragraph.add_run(parse_run(child)),
            "hyperlink" => {
                for r in child.children_named("r") {
                    paragraph.add_run(parse_run(r));
                }
            }
            _ => {}
        }
    }

    paragraph
}

fn parse_run(r: &XmlElement) -> Run {
    let rpr = r.child("rPr");

    let properties = RunProperties {
        bold: toggle(rpr, "b"),
        italic: toggle(rpr, "i"),
        // A bare `<w:u/>` carries no underline type and reads as unset.
        underline: rpr
            .and_then(|props| props.child_val("u"))
            .map(|val| val != "none"),
        size: rpr
            .and_then(|props| props.child_val("sz"))
            .and_then(|v| v.parse::<f32>().ok())
            .map(|half_points| half_points / 2.0),
        font_name: rpr
            .and_then(|props| props.child("rFonts"))
            .and_then(|fonts| fonts.attr("ascii"))
            .map(str::to_string),
        color: rpr
            .and_then(|props| props.child_val("color"))
            .filter(|v| *v != "auto")
            .map(str::to_string),
    };

    let mut text = String::new();
    for child in r.elements() {
        match child.name.as_str() {
            "t" => text.push_str(&child.text()),
            "tab" | "ptab" => text.push('\t'),
            "br" => {
                if matches!(child.attr("type"), None | Some("textWrapping")) {
                    text.push('\n');
                }
            }
            "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    Run { text, properties }
}

/// Read a toggle property: present means on unless `val` switches it off.
fn toggle(props: Option<&XmlElement>, name: &str) -> Option<bool> {
    props
        .and_then(|p| p.child(name))
        .map(|e| !matches!(e.attr("val"), Some("0" | "false" | "off")))
}

fn alignment_value(value: &str, context: &str) -> Option<Alignment> {
    let alignment = Alignment::from_ooxml(value);
    if alignment.is_none() && value != "numTab" {
        log::warn!("Ignoring unrecognized {} alignment {:?}", context, value);
    }
    alignment
}

/// Number of columns declared by `tblGrid`, or [`MAX_GRID_COLUMNS`] if none are.
fn grid_width(tbl: &XmlElement) -> usize {
    match tbl.child("tblGrid").map(|grid| grid.children_named("gridCol").count()) {
        Some(count) if count > 0 => count,
        _ => MAX_GRID_COLUMNS,
    }
}

fn parse_table(tbl: &XmlElement, styles: &StyleSheet) -> Table {
    let mut table = Table::new();
    let mut previous: Vec<TableCell> = Vec::new();
    let width = grid_width(tbl);

    for tr in tbl.children_named("tr") {
        let mut cells: Vec<TableCell> = Vec::new();

        for tc in tr.children_named("tc") {
            let cell = parse_cell(tc, styles);
            // A span never reaches past the grid; every cell still takes one column.
            let remaining = width.saturating_sub(cells.len()).max(1);
            let span = cell.grid_span().min(remaining);
            if span < cell.grid_span() {
                log::warn!(
                    "Clamping gridSpan {} to {} (table grid has {} columns)",
                    cell.grid_span(),
                    span,
                    width
                );
            }

            if cell.continues_vertical_merge() {
                for _ in 0..span {
                    let above = previous
                        .get(cells.len())
                        .cloned()
                        .unwrap_or_else(|| cell.clone());
                    cells.push(above);
                }
            } else {
                cells.extend(std::iter::repeat(cell).take(span));
            }
        }

        previous = cells.clone();
        table.add_row(TableRow::new(cells));
    }

    table
}

fn parse_cell(tc: &XmlElement, styles: &StyleSheet) -> TableCell {
    TableCell {
        paragraphs: tc
            .children_named("p")
            .map(|p| parse_paragraph(p, styles))
            .collect(),
        properties: tc.child("tcPr").map(parse_cell_properties),
    }
}

fn parse_cell_properties(tcpr: &XmlElement) -> CellProperties {
    CellProperties {
        alignment: tcpr
            .child_val("jc")
            .and_then(|value| alignment_value(value, "cell")),
        borders: tcpr.child("tcBorders").map(|borders| CellBorders {
            sides: borders
                .elements()
                .map(|side| BorderLine {
                    edge: side.name.clone(),
                    style: side.attr("val").unwrap_or("none").to_string(),
                    size: side.attr("sz").and_then(|v| v.parse().ok()),
                    color: side.attr("color").map(str::to_string),
                })
                .collect(),
        }),
        grid_span: tcpr
            .child_val("gridSpan")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1),
        vertical_merge: tcpr.child("vMerge").map(|v| match v.attr("val") {
            Some("restart") => VerticalMerge::Restart,
            _ => VerticalMerge::Continue,
        }),
    }
}
