//! File I/O and container validation

use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use crate::error::DumpError;

/// Read the whole document file into memory
pub(crate) fn read_docx_bytes(file_path: &Path) -> Result<Vec<u8>> {
    std::fs::read(file_path).with_context(|| format!("Failed to read {}", file_path.display()))
}

/// Validates that the bytes are a ZIP container holding a Word document
pub(crate) fn validate_docx_bytes(data: &[u8]) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .context("Invalid .docx file: not a ZIP archive")?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(DumpError::LooksLikeSpreadsheet.into());
        }

        return Err(DumpError::NotWordDocument("missing word/document.xml".to_string()).into());
    }

    Ok(())
}

/// Read a text part of the package, `None` when the part is absent
pub(crate) fn read_part(data: &[u8], part_name: &str) -> Result<Option<String>> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .context("Invalid .docx file: not a ZIP archive")?;

    let Ok(mut part) = archive.by_name(part_name) else {
        return Ok(None);
    };
    let mut content = String::new();
    part.read_to_string(&mut content)
        .with_context(|| format!("Failed to read {part_name}"))?;
    Ok(Some(content))
}
