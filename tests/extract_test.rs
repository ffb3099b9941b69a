//! Extraction tests against generated DOCX packages.

mod common;

use common::{Cell, DocxBuilder, Run};
use docdiff::{extract_bytes, extract_file, Alignment, Error};

#[test]
fn test_paragraph_styles() {
    let data = DocxBuilder::new()
        .with_styles()
        .styled_paragraph("Heading1", "Classic Cars")
        .runs(
            None,
            Some("center"),
            &[
                Run::new("Mostly "),
                Run::new("bold").bold().size(28),
                Run::new(" text").italic().size(22),
            ],
        )
        .build();

    let doc = extract_bytes(&data).unwrap();
    assert_eq!(doc.paragraphs.len(), 2);

    let heading = &doc.paragraphs[0];
    assert_eq!(heading.text, "Classic Cars");
    assert_eq!(heading.heading_level.as_deref(), Some("Heading 1"));
    assert!(!heading.bold);
    assert_eq!(heading.font_size, None);

    let body = &doc.paragraphs[1];
    assert_eq!(body.text, "Mostly bold text");
    assert!(body.bold);
    assert!(body.italic);
    assert!(!body.underline);
    assert_eq!(body.font_size, Some(14.0));
    assert_eq!(body.alignment, Some(Alignment::Center));
    assert_eq!(body.heading_level, None);
}

#[test]
fn test_title_style_is_not_heading() {
    let data = DocxBuilder::new()
        .with_styles()
        .styled_paragraph("Title", "Annual Report")
        .styled_paragraph("Heading2", "Summary")
        .build();

    let doc = extract_bytes(&data).unwrap();
    assert_eq!(doc.paragraphs[0].heading_level, None);
    assert_eq!(doc.paragraphs[1].heading_level.as_deref(), Some("Heading 2"));
}

#[test]
fn test_blank_paragraphs_are_invisible() {
    let data = DocxBuilder::new()
        .paragraph("First")
        .empty_paragraph()
        .paragraph("   ")
        .paragraph("Second")
        .build();

    let doc = extract_bytes(&data).unwrap();
    let texts: Vec<_> = doc.paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "Second"]);
}

#[test]
fn test_colors_never_extracted() {
    let data = DocxBuilder::new()
        .runs(None, None, &[Run::new("Red").color("FF0000").underline()])
        .build();

    let doc = extract_bytes(&data).unwrap();
    assert!(doc.paragraphs[0].underline);
    assert_eq!(doc.paragraphs[0].font_color, None);
    assert_eq!(doc.paragraphs[0].background_color, None);
}

#[test]
fn test_table_cells() {
    let data = DocxBuilder::new()
        .paragraph("Before")
        .styled_table(&[
            vec![Cell::new("Name").align("center").borders("single"), Cell::new("Qty")],
            vec![Cell::new("Bolt"), Cell::new("12").borders("nil")],
        ])
        .build();

    let doc = extract_bytes(&data).unwrap();
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.tables.len(), 1);

    let table = &doc.tables[0];
    assert_eq!(table.row_count(), 2);

    let name = table.cell(0, 0).unwrap();
    assert_eq!(name.text, "Name");
    assert_eq!(name.alignment, Some(Alignment::Center));
    assert!(name.has_border);

    let qty = table.cell(0, 1).unwrap();
    assert_eq!(qty.alignment, None);
    assert!(!qty.has_border);

    // An all-nil border block still counts as a border.
    assert!(table.cell(1, 1).unwrap().has_border);
}

#[test]
fn test_table_only_document() {
    let data = DocxBuilder::new().table(&[&["a", "b"]]).build();
    let doc = extract_bytes(&data).unwrap();
    assert!(doc.paragraphs.is_empty());
    assert_eq!(doc.tables[0].rows[0].len(), 2);
}

#[test]
fn test_empty_document() {
    let doc = extract_bytes(&DocxBuilder::new().build()).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_extract_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    DocxBuilder::new().paragraph("Memo").write_to(&path);

    let doc = extract_file(&path).unwrap();
    assert_eq!(doc.paragraphs[0].text, "Memo");
}

#[test]
fn test_not_a_docx() {
    assert!(matches!(
        extract_bytes(b"just some text"),
        Err(Error::UnknownFormat)
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(extract_file(dir.path().join("nope.docx")).is_err());
}
