//! Core data model for detected tables
//!
//! A [`Table`] is built transiently per detected candidate, mutated in place
//! through classification, list decoding and aggregate evaluation, then
//! consumed by the renderer. Nothing here persists across invocations.

use crate::columns::detect::ColumnSpan;
use serde::Serialize;

/// Classification of a table row.
///
/// Every row starts as `Tbd` and must be resolved to one of the other
/// variants before rendering; the renderer matches exhaustively so an
/// unresolved row is unrepresentable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Tbd,
    Header,
    Data,
    BlankSeparator,
    Subtotal,
    Footer,
}

/// List markup decoded from a cell, derived by vertical scan within the
/// cell's column (see the `lists` module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListMarker {
    /// Leading spaces before the bullet/ordinal inside the cell.
    pub indent: usize,
    /// Whether the run this item belongs to is ordered (`N.`) or bulleted.
    pub ordered: bool,
    /// Nesting level, 1-based.
    pub depth: usize,
    /// Position within the current run of siblings, 1-based.
    pub sequence: usize,
}

/// One cell of a row: the raw slice of the source line plus its trimmed
/// text and optional decoded list markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    raw: String,
    /// Trimmed display text. List decoding strips the marker prefix;
    /// aggregate evaluation substitutes placeholder tokens in place.
    pub text: String,
    pub marker: Option<ListMarker>,
}

impl Cell {
    pub fn new(raw: &str) -> Self {
        Cell {
            raw: raw.to_string(),
            text: raw.trim().to_string(),
            marker: None,
        }
    }

    /// The untrimmed slice of the source line, as cut at the column span.
    /// List decoding needs the leading spaces that trimming would lose.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// One line of the table, sliced into cells at the final column spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// The original source line, kept for blank-row checks and diagnostics.
    pub line: String,
    pub kind: RowKind,
}

impl Row {
    /// Slice `line` into one cell per span. Spans are character offsets;
    /// a line shorter than a span yields an empty cell.
    pub fn from_line(line: &str, spans: &[ColumnSpan]) -> Self {
        let cells = spans
            .iter()
            .map(|span| Cell::new(slice_chars(line, span.start, span.end)))
            .collect();
        Row {
            cells,
            line: line.to_string(),
            kind: RowKind::Tbd,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.line.trim().is_empty()
    }
}

/// Horizontal alignment of a column, derived once after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Left,
    Right,
}

/// A classified table: rows, the spans they were cut at, and per-column
/// alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<Row>,
    pub spans: Vec<ColumnSpan>,
    pub alignments: Vec<Alignment>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.spans.len()
    }
}

/// Slice `line` by character offsets, clamped to the line's length.
pub fn slice_chars(line: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(line, start);
    let to = byte_offset(line, end);
    &line[from..to]
}

fn byte_offset(line: &str, char_pos: usize) -> usize {
    line.char_indices()
        .nth(char_pos)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}
