//! Paragraph style name resolution
//!
//! Paragraphs reference styles by id (`Heading1`), while output decisions
//! are made on the display name (`Heading 1`). The style table in
//! `word/styles.xml` maps one to the other. Paragraphs without a style, or
//! with an id that is not a paragraph style, use the style marked
//! `w:default="1"`, whatever its id is (`Normal`, `a`, ...).

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};

use crate::error::{DumpError, Result};

/// Used only when styles.xml declares no default paragraph style
const FALLBACK_STYLE_NAME: &str = "Normal";

/// Built-in styles that Word stores with lowercase names
const STYLE_ALIASES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// Map Word's internal built-in style name to the name shown in the UI
pub(crate) fn ui_style_name(internal_name: &str) -> String {
    STYLE_ALIASES
        .iter()
        .find(|(internal, _)| *internal == internal_name)
        .map(|(_, ui)| ui.to_string())
        .unwrap_or_else(|| internal_name.to_string())
}

#[derive(Debug, Clone, Default)]
struct StyleEntry {
    id: String,
    name: Option<String>,
    is_paragraph: bool,
    is_default: bool,
}

/// Style id to display name lookup built from `word/styles.xml`
#[derive(Debug, Default)]
pub(crate) struct StyleTable {
    styles: HashMap<String, StyleEntry>,
    /// Last paragraph style flagged as default
    default_paragraph: Option<String>,
}

impl StyleTable {
    /// Parse the style definitions part
    pub(crate) fn parse(xml: &str) -> Result<Self> {
        let mut table = StyleTable::default();
        if xml.trim().is_empty() {
            return Ok(table);
        }

        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current: Option<StyleEntry> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:style" => {
                    current = Some(style_entry(&e));
                }
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:style" => table.insert(style_entry(&e)),
                    b"w:name" => {
                        if let Some(style) = current.as_mut() {
                            style.name = attr_value(&e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) if e.name().as_ref() == b"w:style" => {
                    if let Some(style) = current.take() {
                        table.insert(style);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DumpError::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(table)
    }

    fn insert(&mut self, style: StyleEntry) {
        if style.is_paragraph && style.is_default {
            self.default_paragraph = Some(style.id.clone());
        }
        self.styles.insert(style.id.clone(), style);
    }

    pub(crate) fn len(&self) -> usize {
        self.styles.len()
    }

    /// Resolve a style id, falling back to the default paragraph style
    pub(crate) fn resolve(&self, style_id: Option<&str>) -> String {
        let style = style_id
            .and_then(|id| self.styles.get(id))
            .filter(|style| style.is_paragraph)
            .or_else(|| {
                self.default_paragraph
                    .as_deref()
                    .and_then(|id| self.styles.get(id))
            });

        match style {
            Some(style) => style
                .name
                .as_deref()
                .map(ui_style_name)
                .unwrap_or_default(),
            None => FALLBACK_STYLE_NAME.to_string(),
        }
    }

    /// Display name of a paragraph's style
    pub(crate) fn paragraph_style_name(&self, para: &docx_rs::Paragraph) -> String {
        let style_id = para.property.style.as_ref().map(|style| style.val.as_str());
        self.resolve(style_id)
    }
}

fn style_entry(e: &BytesStart) -> StyleEntry {
    StyleEntry {
        id: attr_value(e, b"w:styleId").unwrap_or_default(),
        name: None,
        is_paragraph: attr_value(e, b"w:type").as_deref() == Some("paragraph"),
        is_default: attr_value(e, b"w:default")
            .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "on")),
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}
