//! # columns
//!
//! Detects runs of plain text lines with visually whitespace-aligned
//! columns and turns them into rendered HTML tables: header, data,
//! divider, subtotal and footer rows, per-cell nested lists, and
//! calculated footer placeholders (`<#>`, `<+>`, `<avg>`, `<%>`).
//!
//! The engine is a single synchronous pass per candidate position:
//! column detection → extent finding → row classification → list
//! decoding → aggregate evaluation → rendering. A candidate that fails
//! any classified check consumes nothing and the surrounding text is
//! left untouched.

pub mod columns;

pub use columns::{
    split_blocks, Alignment, Cell, ColumnSpan, ColumnsProcessor, Config, DocumentRenderer,
    Element, ListMarker, Node, Row, RowKind, Style, Table, TableError,
};
