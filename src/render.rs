//! Plain-text rendering of a loaded document
//!
//! Output layout:
//!
//! ```text
//! ================================================================================
//! <title>
//! ================================================================================
//!
//! <paragraph blocks>
//!
//! ================================================================================
//! 表格内容:
//! ================================================================================
//!
//! 表格 1:
//! a | b
//! ```

use std::io::Write;

use crate::document::*;
use crate::error::RenderError;

pub const DEFAULT_TITLE: &str = "华中科技大学科研管理平台设计方案";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 80;

const HEADING_PREFIX: &str = "Heading";
const TABLES_LABEL: &str = "表格内容:";
const CELL_DELIMITER: &str = " | ";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub title: String,
    pub separator_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

/// First code point of every run of ten Unicode decimal digits (category Nd)
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script, e.g. '3', '٣' or '３'
///
/// Other numeric characters such as '²' or '½' are not decimal digits.
fn decimal_digit_value(c: char) -> Option<u32> {
    let code = c as u32;
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| code - zero)
}

/// Heading depth encoded in a style name
///
/// Only the last character is read, so "Heading 10" yields level 0.
/// Returns `Ok(None)` for styles that do not start with "Heading".
pub fn heading_level(style_name: &str) -> Result<Option<u8>, RenderError> {
    if !style_name.starts_with(HEADING_PREFIX) {
        return Ok(None);
    }

    style_name
        .chars()
        .last()
        .and_then(decimal_digit_value)
        .map(|digit| Some(digit as u8))
        .ok_or_else(|| RenderError::InvalidHeadingLevel {
            style_name: style_name.to_string(),
        })
}

/// Write the document to `out`
///
/// On error, output for earlier paragraphs has already been written.
pub fn render_document<W: Write>(
    out: &mut W,
    document: &Document,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let separator = "=".repeat(options.separator_width);

    writeln!(out, "{separator}")?;
    writeln!(out, "{}", options.title)?;
    writeln!(out, "{separator}")?;
    writeln!(out)?;

    for paragraph in &document.paragraphs {
        write_paragraph(out, paragraph)?;
    }

    if !document.tables.is_empty() {
        writeln!(out)?;
        writeln!(out, "{separator}")?;
        writeln!(out, "{TABLES_LABEL}")?;
        writeln!(out, "{separator}")?;

        for (i, table) in document.tables.iter().enumerate() {
            write_table(out, i + 1, table)?;
        }
    }

    Ok(())
}

/// Render into a `String`
pub fn render_to_string(
    document: &Document,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    render_document(&mut buffer, document, options)?;
    // Only UTF-8 text is written above
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_paragraph<W: Write>(out: &mut W, paragraph: &Paragraph) -> Result<(), RenderError> {
    if !paragraph.has_content() {
        return Ok(());
    }

    match heading_level(&paragraph.style_name)? {
        Some(level) => {
            writeln!(out)?;
            writeln!(out, "{} {}", "#".repeat(level as usize), paragraph.text)?;
        }
        None => {
            writeln!(out, "{}", paragraph.text)?;
        }
    }
    writeln!(out)?;

    Ok(())
}

fn write_table<W: Write>(out: &mut W, index: usize, table: &TableData) -> Result<(), RenderError> {
    writeln!(out)?;
    writeln!(out, "表格 {index}:")?;

    for row in &table.rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.trim()).collect();
        writeln!(out, "{}", cells.join(CELL_DELIMITER))?;
    }
    writeln!(out)?;

    Ok(())
}
