//! Text extraction from docx-rs paragraph and run elements
//!
//! Paragraph text is the concatenation of its runs, including runs wrapped
//! in hyperlinks. Tracked insertions and deletions are not part of the
//! visible text. Nothing is trimmed here.
//!
//! Inside a run, tabs (`w:tab`, `w:ptab`) become `\t`, breaks (`w:br`,
//! `w:cr`) become `\n` and `w:noBreakHyphen` becomes `-`, for whichever of
//! these docx-rs exposes.

/// Extract plain text from a paragraph
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&mut text, &para.children);
    text
}

fn push_children_text(text: &mut String, children: &[docx_rs::ParagraphChild]) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_children_text(text, &link.children);
            }
            _ => {
                // Track changes (insertions, deletions) and other content
            }
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                // Break types are private, every break becomes a line break
                text.push('\n');
            }
            other => {
                let kind = run_child_kind(other);
                if let Some(c) = kind.as_deref().and_then(special_char_for) {
                    text.push(c);
                }
            }
        }
    }

    text
}

/// Serialized `type` tag of a run child, e.g. "ptab"
fn run_child_kind(child: &docx_rs::RunChild) -> Option<String> {
    let value = serde_json::to_value(child).ok()?;
    value.get("type")?.as_str().map(str::to_string)
}

/// Character standing in for a run element that carries no text of its own
fn special_char_for(kind: &str) -> Option<char> {
    match kind {
        "ptab" | "positionalTab" => Some('\t'),
        "cr" | "carriageReturn" => Some('\n'),
        "noBreakHyphen" => Some('-'),
        _ => None,
    }
}

/// Extract cell text: direct paragraphs joined by newlines, nested tables skipped
pub(crate) fn extract_cell_text(cell: &docx_rs::TableCell) -> String {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            paragraphs.push(extract_paragraph_text(para));
        }
    }

    paragraphs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Hyperlink, HyperlinkType, Paragraph, Run, TableCell};

    #[test]
    fn test_paragraph_text_keeps_whitespace() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("  Hello"))
            .add_run(Run::new().add_text(" world  "));
        assert_eq!(extract_paragraph_text(&para), "  Hello world  ");
    }

    #[test]
    fn test_run_tabs_and_breaks() {
        let run = Run::new()
            .add_text("a")
            .add_tab()
            .add_text("b")
            .add_break(docx_rs::BreakType::TextWrapping)
            .add_text("c");
        assert_eq!(extract_run_text(&run), "a\tb\nc");
    }

    #[test]
    fn test_special_run_elements() {
        assert_eq!(special_char_for("ptab"), Some('\t'));
        assert_eq!(special_char_for("cr"), Some('\n'));
        assert_eq!(special_char_for("noBreakHyphen"), Some('-'));
        assert_eq!(special_char_for("drawing"), None);
        assert_eq!(special_char_for("text"), None);
    }

    #[test]
    fn test_run_child_kind_reads_serialized_tag() {
        let run = Run::new().add_tab();
        assert_eq!(run_child_kind(&run.children[0]).as_deref(), Some("tab"));
    }

    #[test]
    fn test_hyperlink_runs_are_included() {
        let link = Hyperlink::new("https://example.com", HyperlinkType::External)
            .add_run(Run::new().add_text("link"));
        let para = Paragraph::new()
            .add_run(Run::new().add_text("see "))
            .add_hyperlink(link);
        assert_eq!(extract_paragraph_text(&para), "see link");
    }

    #[test]
    fn test_cell_paragraphs_joined_with_newline() {
        let cell = TableCell::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("first")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("second")));
        assert_eq!(extract_cell_text(&cell), "first\nsecond");
    }
}
