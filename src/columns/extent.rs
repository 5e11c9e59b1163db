//! Table extent finding
//!
//! Decides how many consecutive candidate blocks belong to one table.
//! Blocks arrive pre-split on blank-line boundaries; an empty block (a
//! double blank line in the source) always ends the table. Each admitted
//! block is joined to the previous ones with a synthetic blank line, which
//! later classifies as a divider row.

use crate::columns::detect::{column_spans, merge_line, space_mask, ColumnSpan};
use crate::columns::error::TableError;

/// The lines and spans of a successfully detected table extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtent {
    /// How many leading blocks the table consumed.
    pub blocks_consumed: usize,
    /// All accumulated lines, including synthetic blank separators.
    pub lines: Vec<String>,
    /// Column spans of the merged mask over every accumulated line.
    pub spans: Vec<ColumnSpan>,
}

/// Absorb leading blocks into a table extent.
///
/// Block 0 seeds the accumulated lines. Each subsequent block is admitted
/// only if the recomputed spans still number at least two and the leftmost
/// span still starts before `code_indent`; otherwise absorption stops and
/// the previous extent stands. The final extent itself must have at least
/// two columns, at least two lines, and a leftmost column inside the
/// indent threshold.
pub fn find_extent(blocks: &[Vec<String>], code_indent: usize) -> Result<TableExtent, TableError> {
    let first = match blocks.first() {
        Some(block) => block,
        None => return Err(TableError::TooShort),
    };
    let mut lines: Vec<String> = first.clone();
    let mut mask = space_mask(&lines);
    let mut spans = column_spans(&mask);
    if spans.len() < 2 {
        // The seed block is no table on its own; absorbing more text could
        // only weld its words onto neighboring blocks.
        return Err(TableError::NeedTwoColumns);
    }
    let mut consumed = 1;

    for block in &blocks[1..] {
        if block.is_empty() || block[0].trim().is_empty() {
            // A true double-blank-line boundary ends the table.
            break;
        }
        let mut candidate_mask = mask.clone();
        for line in block {
            merge_line(&mut candidate_mask, line);
        }
        let candidate_spans = column_spans(&candidate_mask);
        if candidate_spans.len() < 2 {
            break;
        }
        if candidate_spans[0].start >= code_indent {
            break;
        }
        lines.push(String::new());
        lines.extend(block.iter().cloned());
        mask = candidate_mask;
        spans = candidate_spans;
        consumed += 1;
    }

    if lines.len() < 2 {
        return Err(TableError::TooShort);
    }
    if spans[0].start >= code_indent {
        return Err(TableError::CodeIndented {
            start: spans[0].start,
            threshold: code_indent,
        });
    }
    Ok(TableExtent {
        blocks_consumed: consumed,
        lines,
        spans,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn single_block_table() {
        let blocks = vec![block(&["California   39.5   40", "Texas        29.0   26.2"])];
        let extent = find_extent(&blocks, 4).unwrap();
        assert_eq!(extent.blocks_consumed, 1);
        assert_eq!(extent.lines.len(), 2);
        assert_eq!(extent.spans.len(), 3);
    }

    #[test]
    fn absorbs_following_block_with_blank_separator() {
        let blocks = vec![
            block(&["Washington    12.5", "California    39.5"]),
            block(&["Texas         29.0", "Arkansas      13.4"]),
        ];
        let extent = find_extent(&blocks, 4).unwrap();
        assert_eq!(extent.blocks_consumed, 2);
        assert_eq!(extent.lines.len(), 5);
        assert!(extent.lines[2].is_empty());
    }

    #[test]
    fn stops_before_block_that_collapses_columns() {
        let blocks = vec![
            block(&["California   39.5", "Texas        29.0"]),
            block(&["This is an ordinary paragraph that fills the gap entirely."]),
        ];
        let extent = find_extent(&blocks, 4).unwrap();
        assert_eq!(extent.blocks_consumed, 1);
        assert_eq!(extent.lines.len(), 2);
    }

    #[test]
    fn empty_block_ends_the_table() {
        let blocks = vec![
            block(&["California   39.5", "Texas        29.0"]),
            Vec::new(),
            block(&["More   text"]),
        ];
        let extent = find_extent(&blocks, 4).unwrap();
        assert_eq!(extent.blocks_consumed, 1);
    }

    #[test]
    fn one_column_is_not_a_table() {
        let blocks = vec![block(&["California", "Texas"])];
        assert_eq!(find_extent(&blocks, 4), Err(TableError::NeedTwoColumns));
    }

    #[test]
    fn one_line_is_too_short() {
        let blocks = vec![block(&["California   39.5"])];
        assert_eq!(find_extent(&blocks, 4), Err(TableError::TooShort));
    }

    #[test]
    fn indented_table_is_a_code_block() {
        let blocks = vec![block(&[
            "      *State*        *Population*",
            "      California     39.5",
        ])];
        assert_eq!(
            find_extent(&blocks, 4),
            Err(TableError::CodeIndented { start: 6, threshold: 4 })
        );
    }
}
