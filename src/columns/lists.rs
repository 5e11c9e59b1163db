//! Cell list decoding
//!
//! Cells whose text starts with a bullet (`*`, `+`, `-`) or an ordinal
//! (`N.`) carry nested-list markup. Depth and sequence come from a vertical
//! scan within the same column: the nearest prior list cell at equal indent
//! is a sibling, at smaller indent a parent; deeper cells belong to an
//! unrelated branch and are skipped. Columns never interact.

use crate::columns::model::{ListMarker, RowKind, Table};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading spaces, a bullet or ordinal marker, whitespace, then content.
/// A lone `-` cell is a no-value placeholder, not a list item, so content
/// is required.
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( *)(?:([*+\-])|([0-9]+)\.)\s+(\S.*?)\s*$").unwrap());

struct ItemMatch {
    indent: usize,
    ordered: bool,
    text: String,
}

fn match_item(raw: &str) -> Option<ItemMatch> {
    let caps = LIST_ITEM.captures(raw)?;
    Some(ItemMatch {
        indent: caps.get(1).map_or(0, |m| m.as_str().len()),
        ordered: caps.get(3).is_some(),
        text: caps.get(4).map_or(String::new(), |m| m.as_str().to_string()),
    })
}

/// Decode list markup in every data-row cell of the table.
///
/// On a match the cell's text is replaced by the item content; the marker
/// itself moves into the [`ListMarker`]. The upward scan skips blank cells,
/// stops at the first non-blank plain cell, and skips list cells with
/// greater indent.
pub fn decode_lists(table: &mut Table) {
    let columns = table.column_count();
    for col in 0..columns {
        for row in 0..table.rows.len() {
            if table.rows[row].kind != RowKind::Data {
                continue;
            }
            let item = match match_item(table.rows[row].cells[col].raw()) {
                Some(item) => item,
                None => continue,
            };
            let marker = place_item(table, row, col, &item);
            let cell = &mut table.rows[row].cells[col];
            cell.marker = Some(marker);
            cell.text = item.text;
        }
    }
}

fn place_item(table: &Table, row: usize, col: usize, item: &ItemMatch) -> ListMarker {
    for prior in (0..row).rev() {
        let cell = &table.rows[prior].cells[col];
        if cell.is_blank() {
            continue;
        }
        let found = match cell.marker {
            // A plain non-blank cell ends the outline; the item starts over.
            None => break,
            Some(marker) => marker,
        };
        if found.indent > item.indent {
            // Deeper descendant of an unrelated branch.
            continue;
        }
        if found.indent == item.indent {
            // Sibling: the first item of a run fixes ordered/unordered.
            return ListMarker {
                indent: item.indent,
                ordered: found.ordered,
                depth: found.depth,
                sequence: found.sequence + 1,
            };
        }
        // Smaller indent: a parent one level up.
        return ListMarker {
            indent: item.indent,
            ordered: item.ordered,
            depth: found.depth + 1,
            sequence: 1,
        };
    }
    ListMarker {
        indent: item.indent,
        ordered: item.ordered,
        depth: 1,
        sequence: 1,
    }
}
