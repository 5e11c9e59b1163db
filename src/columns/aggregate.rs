//! Aggregate evaluation
//!
//! Resolves the calculated placeholder tokens `<#>`, `<+>`, `<avg>` and
//! `<%>` in footer and subtotal cells against the data rows that feed them.
//! A subtotal aggregates the data rows since the previous subtotal; the
//! footer aggregates every data row of the table.
//!
//! `<%>` is the one place evaluation has cross-row effects: it writes each
//! contributing row's share of the left column's total into that row's own
//! cell. That mutation pass runs before any same-cell substring
//! substitution so the token scan never sees half-rewritten text.

use crate::columns::error::TableError;
use crate::columns::model::{RowKind, Table};
use once_cell::sync::Lazy;
use regex::Regex;

static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+$").unwrap());

/// Placeholder shown where an average has no numeric cells to draw on.
pub const NO_AVERAGE: &str = "\u{2014}";
/// Placeholder share written when the referenced column totals zero.
pub const NO_SHARE: &str = "\u{2014}%";

/// Parse a cell as a number. Spaces, commas, underscores and currency
/// symbols are stripped; a `%` divides the magnitude by 100. Parenthesized
/// and trailing-sign forms like `(23.4)` or `23.4-` do not parse.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let mut cleaned = String::new();
    let mut percent = false;
    for ch in text.trim().chars() {
        match ch {
            ' ' | ',' | '_' | '$' | '\u{20ac}' | '\u{a3}' => {}
            '%' => percent = true,
            _ => cleaned.push(ch),
        }
    }
    let value: f64 = cleaned.parse().ok()?;
    Some(if percent { value / 100.0 } else { value })
}

/// A cell counts toward `<#>` unless it is blank, a run of dashes, or a
/// case-insensitive `n/a` / `na`.
pub fn is_countable(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || DASHES.is_match(trimmed) {
        return false;
    }
    !trimmed.eq_ignore_ascii_case("n/a") && !trimmed.eq_ignore_ascii_case("na")
}

/// Shortest round-trip formatting: `68.5` stays `68.5`, whole values lose
/// the fraction.
fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Resolve every calculated token in the table's subtotal and footer rows.
pub fn evaluate(table: &mut Table) -> Result<(), TableError> {
    let mut targets: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut since_subtotal: Vec<usize> = Vec::new();
    let mut all_data: Vec<usize> = Vec::new();
    for index in 0..table.rows.len() {
        match table.rows[index].kind {
            RowKind::Data => {
                since_subtotal.push(index);
                all_data.push(index);
            }
            RowKind::Subtotal => {
                targets.push((index, std::mem::take(&mut since_subtotal)));
            }
            RowKind::Footer => targets.push((index, all_data.clone())),
            RowKind::Header | RowKind::BlankSeparator | RowKind::Tbd => {}
        }
    }
    for (target, contributing) in targets {
        evaluate_row(table, target, &contributing)?;
    }
    Ok(())
}

fn evaluate_row(table: &mut Table, target: usize, contributing: &[usize]) -> Result<(), TableError> {
    // Percent distribution first: it rewrites sibling rows and must not run
    // against cells that other substitutions already touched.
    for col in 0..table.column_count() {
        if table.rows[target].cells[col].text.contains("<%>") {
            distribute_percent(table, target, col, contributing)?;
        }
    }
    for col in 0..table.column_count() {
        let text = &table.rows[target].cells[col].text;
        if !text.contains("<#>") && !text.contains("<+>") && !text.contains("<avg>") {
            continue;
        }
        let cells: Vec<&str> = contributing
            .iter()
            .map(|&row| table.rows[row].cells[col].text.as_str())
            .collect();
        let count = cells.iter().filter(|c| is_countable(c)).count();
        let values: Vec<f64> = cells.iter().filter_map(|c| parse_numeric(c)).collect();
        // Explicit 0.0 seed: `Iterator::sum` for f64 yields -0.0 when empty
        // on recent toolchains, which would format as "-0".
        let sum: f64 = values.iter().fold(0.0, |acc, v| acc + v);
        let average = if values.is_empty() {
            NO_AVERAGE.to_string()
        } else {
            format_number(sum / values.len() as f64)
        };
        let resolved = table.rows[target].cells[col]
            .text
            .replace("<#>", &count.to_string())
            .replace("<+>", &format_number(sum))
            .replace("<avg>", &average);
        table.rows[target].cells[col].text = resolved;
    }
    Ok(())
}

/// Write each contributing row's share of the left column's total into its
/// own cell of the `<%>` column, then resolve the token itself to 100%.
fn distribute_percent(
    table: &mut Table,
    target: usize,
    col: usize,
    contributing: &[usize],
) -> Result<(), TableError> {
    if col == 0 {
        return Err(TableError::PercentNoLeftColumn);
    }
    if contributing
        .iter()
        .any(|&row| !table.rows[row].cells[col].is_blank())
    {
        return Err(TableError::PercentColumnNotEmpty { column: col });
    }
    let total: f64 = contributing
        .iter()
        .filter_map(|&row| parse_numeric(&table.rows[row].cells[col - 1].text))
        .sum();
    for &row in contributing {
        if let Some(value) = parse_numeric(&table.rows[row].cells[col - 1].text) {
            table.rows[row].cells[col].text = if total == 0.0 {
                NO_SHARE.to_string()
            } else {
                format!("{:.1}%", value / total * 100.0)
            };
        }
    }
    let resolved = table.rows[target].cells[col].text.replace("<%>", "100.0%");
    table.rows[target].cells[col].text = resolved;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("39.5", Some(39.5))]
    #[case("  29.0 ", Some(29.0))]
    #[case("28,883,435", Some(28883435.0))]
    #[case("$1,200", Some(1200.0))]
    #[case("1_000", Some(1000.0))]
    #[case("50%", Some(0.5))]
    #[case("-5", Some(-5.0))]
    #[case("(23.4)", None)]
    #[case("23.4-", None)]
    #[case("n/a", None)]
    #[case("-", None)]
    #[case("", None)]
    fn numeric_parsing(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_numeric(text), expected);
    }

    #[rstest]
    #[case("California", true)]
    #[case("39.5", true)]
    #[case("(23.4)", true)]
    #[case("", false)]
    #[case("-", false)]
    #[case("---", false)]
    #[case("n/a", false)]
    #[case("N/A", false)]
    #[case("na", false)]
    fn countable_cells(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_countable(text), expected);
    }

    #[test]
    fn whole_sums_format_without_fraction() {
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(68.5), "68.5");
        assert_eq!(format_number(34.25), "34.25");
    }
}
