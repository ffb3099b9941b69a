//! DOCX container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// DOCX container information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the archive has no entries (end-of-central-directory only)
    pub empty: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.empty {
            write!(f, "DOCX (empty archive)")
        } else {
            write!(f, "DOCX")
        }
    }
}

/// Local file header signature: PK\x03\x04
const LOCAL_HEADER_MAGIC: &[u8] = b"PK\x03\x04";
/// End of central directory signature, first bytes of an archive with no entries
const EMPTY_ARCHIVE_MAGIC: &[u8] = b"PK\x05\x06";
const MAGIC_LEN: usize = 4;

/// Detect the DOCX container from a file path.
///
/// # Returns
/// * `Ok(DocxFormat)` if the file starts with a ZIP signature
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use docdiff::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = Vec::with_capacity(MAGIC_LEN);
    reader
        .by_ref()
        .take(MAGIC_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the DOCX container from bytes.
///
/// Only the container signature is checked here; whether the archive
/// actually holds a WordprocessingML body is decided by the parser.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if data.len() < MAGIC_LEN {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(LOCAL_HEADER_MAGIC) {
        return Ok(DocxFormat { empty: false });
    }
    if data.starts_with(EMPTY_ARCHIVE_MAGIC) {
        return Ok(DocxFormat { empty: true });
    }

    Err(Error::UnknownFormat)
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
