//! Document parsing utilities
//!
//! Conversion helpers from docx-rs elements to our own model.

pub(crate) mod formatting;
pub(crate) mod style;
pub(crate) mod table;
