//! Document loading
//!
//! This module contains `load_document()`, which reads a DOCX file, parses
//! it with docx-rs and converts the result into our read-only `Document`.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use super::io::{read_docx_bytes, read_part, validate_docx_bytes};
use super::models::*;
use super::parsing::formatting::extract_paragraph_text;
use super::parsing::style::StyleTable;
use super::parsing::table::extract_table_data;

/// Load and parse a .docx file
///
/// This function:
/// 1. Reads the file into memory
/// 2. Checks that it is a ZIP container holding `word/document.xml`
/// 3. Parses it with docx-rs, and the style table from `word/styles.xml`
/// 4. Collects top-level paragraphs and tables in document order
pub fn load_document(file_path: &Path) -> Result<Document> {
    debug!("loading {}", file_path.display());

    let file_data = read_docx_bytes(file_path)?;
    let document = load_document_from_bytes(&file_data)?;
    debug!(
        "parsed {} paragraphs and {} tables",
        document.paragraphs.len(),
        document.tables.len()
    );

    Ok(document)
}

/// Load a document already held in memory
pub fn load_document_from_bytes(file_data: &[u8]) -> Result<Document> {
    validate_docx_bytes(file_data)?;
    let docx = docx_rs::read_docx(file_data).context("Failed to parse document")?;

    let styles = match read_part(file_data, "word/styles.xml")? {
        Some(xml) => StyleTable::parse(&xml).context("Failed to parse word/styles.xml")?,
        None => StyleTable::default(),
    };
    debug!("style table has {} styles", styles.len());

    Ok(convert_docx(&docx, &styles))
}

fn convert_docx(docx: &docx_rs::Docx, styles: &StyleTable) -> Document {
    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                paragraphs.push(Paragraph::new(
                    extract_paragraph_text(para),
                    styles.paragraph_style_name(para),
                ));
            }
            docx_rs::DocumentChild::Table(table) => {
                tables.push(extract_table_data(table));
            }
            _ => {
                // Content controls, section properties, bookmarks
            }
        }
    }

    Document::new(paragraphs, tables)
}
