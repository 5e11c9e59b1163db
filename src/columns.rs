//! The columns engine
//!
//! Modules in dependency order: `detect` finds column spans from shared
//! space masks, `extent` decides how many blocks a table absorbs,
//! `classify` assigns row kinds, `lists` decodes per-cell list markup,
//! `aggregate` resolves calculated placeholders, and `render` projects the
//! finished model into an element tree. `processor` and `document` are the
//! host-facing surface.

pub mod aggregate;
pub mod classify;
pub mod detect;
pub mod document;
pub mod error;
pub mod extent;
pub mod lists;
pub mod model;
pub mod processor;
pub mod render;
pub mod testing;

pub use detect::ColumnSpan;
pub use document::{split_blocks, DocumentRenderer};
pub use error::TableError;
pub use model::{Alignment, Cell, ListMarker, Row, RowKind, Table};
pub use processor::{ColumnsProcessor, Config, Style};
pub use render::{Element, Node};
