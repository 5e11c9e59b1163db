//! Classified detection and evaluation failures
//!
//! Every variant aborts only the current candidate: the processor maps any
//! of these to "zero blocks consumed" and the host leaves the text
//! untouched. None of them may propagate past the candidate boundary.

use std::fmt;

/// A classified reason a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Fewer than two column spans were ever detected.
    NeedTwoColumns,
    /// Fewer than two rows remain once header and footer are extracted.
    TooShort,
    /// The leftmost column starts at or past the code-indent threshold.
    CodeIndented { start: usize, threshold: usize },
    /// A calculated placeholder token appeared in a row that is neither a
    /// confirmed footer nor a subtotal.
    CalculatedOutsideFooter { line: String },
    /// A `<%>` column must be empty across its contributing data rows.
    PercentColumnNotEmpty { column: usize },
    /// A `<%>` column needs a column to its immediate left to reference.
    PercentNoLeftColumn,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NeedTwoColumns => write!(f, "need at least two columns"),
            TableError::TooShort => write!(f, "table too short"),
            TableError::CodeIndented { start, threshold } => write!(
                f,
                "table starts too far in and is a code block (column at {}, threshold {})",
                start, threshold
            ),
            TableError::CalculatedOutsideFooter { line } => {
                write!(f, "calculated field outside footer: {}", line.trim())
            }
            TableError::PercentColumnNotEmpty { column } => {
                write!(f, "% column not empty (column {})", column)
            }
            TableError::PercentNoLeftColumn => {
                write!(f, "% column has no column to reference")
            }
        }
    }
}

impl std::error::Error for TableError {}
