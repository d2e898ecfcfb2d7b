//! Table extraction
//!
//! Rows are expanded to the table grid: a cell spanning N grid columns
//! (gridSpan) appears N times, and a vertical merge continuation repeats
//! the text of the cell above it at the same grid position.

use super::super::models::*;
use super::formatting::extract_cell_text;

/// Merge properties of a single `w:tc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellMerge {
    grid_span: usize,
    continues_vertically: bool,
}

impl Default for CellMerge {
    fn default() -> Self {
        Self {
            grid_span: 1,
            continues_vertically: false,
        }
    }
}

/// Extract table data from a docx-rs Table
pub(crate) fn extract_table_data(table: &docx_rs::Table) -> TableData {
    let mut rows = TableRows::new();
    let mut previous_row: Vec<String> = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut row_cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let merge = cell_merge(cell);

            if merge.continues_vertically {
                for _ in 0..merge.grid_span {
                    let above = previous_row.get(row_cells.len()).cloned();
                    row_cells.push(above.unwrap_or_default());
                }
            } else {
                let text = extract_cell_text(cell);
                row_cells.extend(std::iter::repeat_n(text, merge.grid_span));
            }
        }

        previous_row.clone_from(&row_cells);
        rows.push(row_cells);
    }

    TableData::new(rows)
}

/// Read gridSpan and vMerge from a cell
///
/// docx-rs keeps table cell properties private, so they are read through
/// the cell's serde representation (`property.gridSpan`,
/// `property.verticalMerge`).
fn cell_merge(cell: &docx_rs::TableCell) -> CellMerge {
    let Ok(value) = serde_json::to_value(cell) else {
        return CellMerge::default();
    };
    let Some(property) = value.get("property") else {
        return CellMerge::default();
    };

    let grid_span = property
        .get("gridSpan")
        .and_then(unwrap_val)
        .and_then(|span| span.as_u64())
        .map(|span| span as usize)
        .unwrap_or(1);

    let continues_vertically = property
        .get("verticalMerge")
        .and_then(unwrap_val)
        .and_then(|merge| merge.as_str())
        .is_some_and(|merge| merge == "continue");

    CellMerge {
        grid_span,
        continues_vertically,
    }
}

/// Accept both a bare value and a `{ "val": ... }` wrapper
fn unwrap_val(value: &serde_json::Value) -> Option<&serde_json::Value> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Object(map) => map.get("val"),
        other => Some(other),
    }
}
