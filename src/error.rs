//! Error types shared by the loader and the renderer

use thiserror::Error;

/// Errors raised while loading or rendering a document.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A `Heading*` style whose last character is not a decimal digit.
    #[error("invalid heading level in style name {style_name:?}")]
    InvalidHeadingLevel { style_name: String },

    /// The file is a ZIP archive but not a Word document.
    #[error(
        "Invalid .docx file: {0}\n\
        This file may be corrupted or is not a valid Word document."
    )]
    NotWordDocument(String),

    #[error(
        "This appears to be an Excel file (.xlsx).\n\
        docx-dump only supports Word documents (.docx)."
    )]
    LooksLikeSpreadsheet,

    /// A document part is not well-formed XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Failure writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, DumpError>;

/// Rendering failures are the same errors; the alias keeps signatures readable.
pub type RenderError = DumpError;
