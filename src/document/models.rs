//! Core data structures for document representation
//!
//! This module defines the read-only view of a parsed document: body
//! paragraphs with their style names, and tables as grids of cell text.
//! Nothing outside the loader sees `docx-rs` types.

use serde::{Deserialize, Serialize};

// Type aliases for convenience
pub type TableRows = Vec<Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<TableData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Raw paragraph text, untrimmed
    pub text: String,
    /// Display name of the paragraph style, e.g. "Heading 1" or "Normal"
    pub style_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    /// Raw cell text per row; trimming happens at display time
    pub rows: TableRows,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>, tables: Vec<TableData>) -> Self {
        Self { paragraphs, tables }
    }
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: style_name.into(),
        }
    }

    /// Body paragraph with the default "Normal" style
    #[cfg(test)]
    pub(crate) fn body(text: impl Into<String>) -> Self {
        Self::new(text, "Normal")
    }

    /// Whitespace-only paragraphs produce no output at all
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl TableData {
    pub fn new(rows: TableRows) -> Self {
        Self { rows }
    }

    /// Build a table from string slices
    #[cfg(test)]
    pub(crate) fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_content_ignores_surrounding_whitespace() {
        assert!(Paragraph::body("  Hello  ").has_content());
        assert!(!Paragraph::body("   ").has_content());
        assert!(!Paragraph::body("\t\n").has_content());
        assert!(!Paragraph::body("").has_content());
    }

    #[test]
    fn test_table_from_rows() {
        let table = TableData::from_rows([["a", " b "], ["c", "d"]]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], " b ");
    }
}
