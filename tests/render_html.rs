//! HTML projection tests
//!
//! Asserts on the rendered fragment structure: sections, emphasis,
//! alignment classes, dividers, list fragments, and render idempotence.

use columns::columns::processor::{ColumnsProcessor, Config, Style};
use columns::columns::render::render_table;
use columns::columns::testing;
use columns::columns::DocumentRenderer;

fn renderer() -> DocumentRenderer {
    let config = Config { style: Style::Bare, ..Config::default() };
    DocumentRenderer::new(ColumnsProcessor::with_sink(config, Box::new(Vec::new())))
}

fn html(text: &str) -> String {
    renderer().render_html(text)
}

#[test]
fn sections_and_emphasis_follow_row_kinds() {
    let out = html(testing::SEPARATOR_HEADER_FOOTER);
    assert!(out.contains("<thead><tr><th>State</th>"));
    assert!(out.contains("<th class=\"right\">Population</th>"));
    assert!(out.contains("<tbody><tr><td>California</td><td class=\"right\">39.5</td></tr>"));
    assert!(out.contains("<tfoot><tr><td><strong>Total (million)</strong></td>"));
    assert!(out.contains("<td class=\"right\"><strong>68.5</strong></td>"));
}

#[test]
fn divider_rows_span_the_full_width() {
    let out = html(testing::BLANK_LINES);
    assert!(out.contains("<tr><td colspan=\"2\" class=\"divider\"><hr /></td></tr>"));
}

#[test]
fn empty_cells_render_a_non_breaking_space() {
    let out = html(testing::TRICKY_DASHES);
    assert!(out.contains("<th>\u{a0}</th>"));
}

#[test]
fn list_cells_render_nested_fragments() {
    let out = html(testing::OUTLINES);
    assert!(out.contains("<td><ul><li>Down one</li></ul></td>"));
    assert!(out.contains("<td><ul><ul><li>Two</li></ul></ul></td>"));
    assert!(out.contains("<ol><li>ordered</li></ol>"));
    assert!(out.contains("<ol start=\"2\"><li>more</li></ol>"));
}

#[test]
fn calculated_tokens_render_resolved() {
    let out = html(testing::CALCULATED_FOOTER);
    assert!(out.contains("<strong>_2 States_</strong>"));
    assert!(out.contains("57.7%"));
    assert!(out.contains("42.3%"));
    assert!(out.contains("<strong>100.0%</strong>"));
}

#[test]
fn prose_around_tables_is_preserved() {
    let out = html(testing::TREND);
    assert!(out.contains("<p>Notice the trend here?</p>"));
    assert!(out.contains("<table class=\"columns\">"));
    assert!(out.contains("two line break"));
}

#[test]
fn rendering_twice_is_structurally_identical() {
    let processor = ColumnsProcessor::with_sink(Config::default(), Box::new(Vec::new()));
    let mut doc = DocumentRenderer::new(processor);
    let tables = doc.detect_tables(testing::CALCULATED_FOOTER);
    let table = &tables[0];
    assert_eq!(render_table(table), render_table(table));
    assert_eq!(render_table(table).to_html(), render_table(table).to_html());
}
