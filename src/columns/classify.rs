//! Row classification
//!
//! Slices the accumulated lines into rows at the final column spans, then
//! resolves every row to a kind: header and footer from decoration or
//! punctuation-separator lines, subtotals from decorated rows holding
//! calculated tokens, the rest to data or blank-separator rows.

use crate::columns::aggregate::{is_countable, parse_numeric};
use crate::columns::detect::ColumnSpan;
use crate::columns::error::TableError;
use crate::columns::model::{Alignment, Cell, Row, RowKind, Table};
use once_cell::sync::Lazy;
use regex::Regex;

/// A cell wrapped front and back by the same single emphasis marker.
static DECORATED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\*|_).+(\*|_)$").unwrap());

/// A cell made only of separator punctuation.
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[#=\-_+]+$").unwrap());

/// The calculated placeholder tokens recognized in subtotal/footer cells.
pub const CALC_TOKENS: [&str; 4] = ["<#>", "<+>", "<avg>", "<%>"];

fn is_decorated_cell(cell: &Cell) -> bool {
    match DECORATED.captures(&cell.text) {
        Some(caps) => caps.get(1).map(|m| m.as_str()) == caps.get(2).map(|m| m.as_str()),
        None => false,
    }
}

/// Every cell wrapped by its own matching marker; entirely blank rows fail.
fn is_decorated_row(row: &Row) -> bool {
    !row.cells.is_empty() && row.cells.iter().all(is_decorated_cell)
}

/// Every cell blank or separator punctuation, with at least one non-blank.
fn is_separator_row(row: &Row) -> bool {
    row.cells.iter().any(|c| !c.is_blank())
        && row
            .cells
            .iter()
            .all(|c| c.is_blank() || SEPARATOR.is_match(&c.text))
}

fn has_calc_token(row: &Row) -> bool {
    row.cells
        .iter()
        .any(|c| CALC_TOKENS.iter().any(|t| c.text.contains(t)))
}

/// Classify the accumulated lines into a [`Table`].
///
/// Header and footer detection may delete an adjacent separator row; the
/// surviving rows must still number at least two or the candidate is
/// rejected as too short.
pub fn classify(lines: &[String], spans: &[ColumnSpan]) -> Result<Table, TableError> {
    let mut rows: Vec<Row> = lines.iter().map(|l| Row::from_line(l, spans)).collect();

    // Header: a fully decorated first row, or a first row backed by a
    // separator line (which is deleted).
    if let Some(first) = rows.first() {
        if is_decorated_row(first) {
            rows[0].kind = RowKind::Header;
        } else if rows.len() > 1 && is_separator_row(&rows[1]) {
            rows[0].kind = RowKind::Header;
            rows.remove(1);
        }
    }

    while rows.last().is_some_and(|r| r.is_blank()) {
        rows.pop();
    }

    // Footer: symmetric to the header at the tail. A decorated last row or
    // one holding a calculated token is the footer outright; a trailing
    // separator line also drops in that case (it only delimited the footer).
    if let Some(last) = rows.last() {
        let end = rows.len() - 1;
        if last.kind == RowKind::Tbd && (is_decorated_row(last) || has_calc_token(last)) {
            rows[end].kind = RowKind::Footer;
            if end >= 1 && is_separator_row(&rows[end - 1]) {
                rows.remove(end - 1);
            }
        } else if last.kind == RowKind::Tbd && end >= 1 && is_separator_row(&rows[end - 1]) {
            rows[end].kind = RowKind::Footer;
            rows.remove(end - 1);
        }
    }

    for row in rows.iter_mut().filter(|r| r.kind == RowKind::Tbd) {
        if has_calc_token(row) {
            if is_decorated_row(row) {
                row.kind = RowKind::Subtotal;
            } else {
                return Err(TableError::CalculatedOutsideFooter {
                    line: row.line.clone(),
                });
            }
        } else if row.is_blank() {
            row.kind = RowKind::BlankSeparator;
        } else {
            row.kind = RowKind::Data;
        }
    }

    let body = rows
        .iter()
        .filter(|r| !matches!(r.kind, RowKind::Header | RowKind::Footer))
        .count();
    if body < 2 {
        return Err(TableError::TooShort);
    }

    let alignments = column_alignments(&rows, spans.len());
    Ok(Table {
        rows,
        spans: spans.to_vec(),
        alignments,
    })
}

/// Right-align a column when every data-row cell in it is numeric-like
/// (a parseable number, or blank / dashes / n-a).
fn column_alignments(rows: &[Row], columns: usize) -> Vec<Alignment> {
    (0..columns)
        .map(|col| {
            let numeric_like = rows
                .iter()
                .filter(|r| r.kind == RowKind::Data)
                .all(|r| {
                    let cell = &r.cells[col];
                    parse_numeric(&cell.text).is_some() || !is_countable(&cell.text)
                });
            if numeric_like {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}
