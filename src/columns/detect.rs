//! Column detection
//!
//! Finds where the columns of a candidate table lie by intersecting the
//! space positions of every contributing line. A position counts as a gap
//! only if every line seen so far has whitespace there (or no line has
//! reached it yet); two or more shared spaces separate columns, a single
//! embedded space does not.

use serde::Serialize;

/// A contiguous character range `[start, end)` occupied by one column,
/// shared by all lines of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn new(start: usize, end: usize) -> Self {
        ColumnSpan { start, end }
    }
}

/// Merge one line into the running space mask.
///
/// Overlapping positions are ANDed; positions past the current mask length
/// are copied through from the line. Positions of the mask past the line's
/// length are left untouched, so the mask only ever gains information.
pub fn merge_line(mask: &mut Vec<bool>, line: &str) {
    for (pos, ch) in line.chars().enumerate() {
        let space = ch.is_whitespace();
        if pos < mask.len() {
            mask[pos] = mask[pos] && space;
        } else {
            mask.push(space);
        }
    }
}

/// Build the shared space mask of a set of lines from scratch.
pub fn space_mask(lines: &[String]) -> Vec<bool> {
    let mut mask = Vec::new();
    for line in lines {
        merge_line(&mut mask, line);
    }
    mask
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Gap,
    Word { start: usize },
    AfterOneSpace { start: usize },
}

/// Derive column spans from a merged space mask.
///
/// Scans with three states: in-gap, in-word, and in-word-after-one-space.
/// A single space inside a word is provisional; a second consecutive space
/// closes the column just before it. An open column at end of input closes
/// at the mask length (the trailing space, if any, is trimmed away when
/// cells are sliced).
pub fn column_spans(mask: &[bool]) -> Vec<ColumnSpan> {
    let mut spans = Vec::new();
    let mut state = ScanState::Gap;
    for (pos, &space) in mask.iter().enumerate() {
        state = match (state, space) {
            (ScanState::Gap, true) => ScanState::Gap,
            (ScanState::Gap, false) => ScanState::Word { start: pos },
            (ScanState::Word { start }, true) => ScanState::AfterOneSpace { start },
            (ScanState::Word { start }, false) => ScanState::Word { start },
            (ScanState::AfterOneSpace { start }, true) => {
                // Second consecutive shared space: the column ends before it.
                spans.push(ColumnSpan::new(start, pos - 1));
                ScanState::Gap
            }
            (ScanState::AfterOneSpace { start }, false) => ScanState::Word { start },
        };
    }
    match state {
        ScanState::Gap => {}
        ScanState::Word { start } | ScanState::AfterOneSpace { start } => {
            spans.push(ColumnSpan::new(start, mask.len()));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(text: &str) -> Vec<bool> {
        let mut mask = Vec::new();
        merge_line(&mut mask, text);
        mask
    }

    #[test]
    fn all_space_mask_has_no_spans() {
        assert!(column_spans(&mask_of("        ")).is_empty());
        assert!(column_spans(&[]).is_empty());
    }

    #[test]
    fn single_embedded_space_does_not_split() {
        // "A  AA A " -> "A" at 0..1 and "AA A" at 3..8
        let spans = column_spans(&mask_of("A  AA A "));
        assert_eq!(
            spans,
            vec![ColumnSpan::new(0, 1), ColumnSpan::new(3, 8)]
        );
    }

    #[test]
    fn double_space_splits() {
        let spans = column_spans(&mask_of("AA  BB"));
        assert_eq!(
            spans,
            vec![ColumnSpan::new(0, 2), ColumnSpan::new(4, 6)]
        );
    }

    #[test]
    fn merge_is_an_intersection() {
        let mut mask = Vec::new();
        merge_line(&mut mask, "AAAA  BB");
        merge_line(&mut mask, "CC    DD");
        // Positions 2..3 are spaces only in the second line, so they stay words.
        let spans = column_spans(&mask);
        assert_eq!(
            spans,
            vec![ColumnSpan::new(0, 4), ColumnSpan::new(6, 8)]
        );
    }

    #[test]
    fn longer_line_extends_mask() {
        let mut mask = Vec::new();
        merge_line(&mut mask, "AA  BB");
        merge_line(&mut mask, "AA  BB  CC");
        let spans = column_spans(&mask);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[2], ColumnSpan::new(8, 10));
    }

    #[test]
    fn overlapping_words_merge_into_one_span() {
        let mut mask = Vec::new();
        merge_line(&mut mask, "*State*        *Population*");
        merge_line(&mut mask, "California Republic    39.5");
        merge_line(&mut mask, "Texas          29.0");
        // "Republic" runs through the gap, leaving a single shared space at
        // offset 10, which is not enough to split the span.
        let spans = column_spans(&mask);
        assert_eq!(spans.len(), 1);
    }
}
