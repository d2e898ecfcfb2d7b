//! docx-dump: print the text of a .docx file
//!
//! This library loads a Microsoft Word document into a small read-only model
//! (body paragraphs with style names, tables of cell text) and renders it as
//! plain text with `#` heading markers and `|`-separated table rows.

pub mod config;
pub mod document;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use document::{Document, Paragraph, TableData, load_document};
pub use error::{DumpError, RenderError};
pub use render::{RenderOptions, heading_level, render_document, render_to_string};
