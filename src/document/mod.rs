//! Document loading and data structures module
//!
//! This module parses Microsoft Word (.docx) documents into a small,
//! read-only representation of body paragraphs and tables.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{load_document, load_document_from_bytes};
pub use models::*;
