//! Document host glue
//!
//! A minimal host around the engine: splits raw text into blank-line
//! blocks, offers each position to the processor, renders unconsumed
//! blocks as plain paragraphs, and emits the stylesheet once before the
//! first rendered table. Inline emphasis markup inside paragraphs and
//! cells is left untouched; that transform belongs to a fuller pipeline.

use crate::columns::model::Table;
use crate::columns::processor::{ColumnsProcessor, Style};
use crate::columns::render::Element;

/// The built-in stylesheet emitted for [`Style::Default`].
pub const DEFAULT_STYLESHEET: &str = "\
table.columns { border-collapse: collapse; }
table.columns td, table.columns th { padding: 0.1em 0.6em; vertical-align: top; text-align: left; }
table.columns th { border-bottom: 1px solid; }
table.columns .right { text-align: right; }
table.columns td.divider { padding: 0; }
table.columns ol, table.columns ul { margin: 0; padding-left: 1.2em; list-style-position: outside; }
";

/// Split raw text into candidate blocks on blank-line boundaries.
///
/// A run of consecutive blank lines yields empty blocks after the first,
/// which is how the extent finder sees a double blank line and ends a
/// table.
pub fn split_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if current.is_empty() {
                blocks.push(Vec::new());
            } else {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Renders a whole text, substituting detected tables and passing the rest
/// through as paragraphs.
pub struct DocumentRenderer {
    processor: ColumnsProcessor,
}

impl DocumentRenderer {
    pub fn new(processor: ColumnsProcessor) -> Self {
        DocumentRenderer { processor }
    }

    /// Render to an element tree rooted at a `div`.
    pub fn render(&mut self, text: &str) -> Element {
        let blocks = split_blocks(text);
        let mut root = Element::new("div").with_attr("class", "columns-document");
        let mut style_emitted = false;
        let mut index = 0;
        while index < blocks.len() {
            if blocks[index].is_empty() {
                index += 1;
                continue;
            }
            let mut probe = Element::new("div");
            let consumed = self.processor.process(&blocks[index..], &mut probe);
            if consumed > 0 {
                if !style_emitted {
                    if let Some(style) = stylesheet(&self.processor.config().style) {
                        root.append(style);
                    }
                    style_emitted = true;
                }
                root.extend(probe.take_children());
                index += consumed;
            } else {
                root.append(paragraph(&blocks[index]));
                index += 1;
            }
        }
        root
    }

    /// Render straight to an HTML string.
    pub fn render_html(&mut self, text: &str) -> String {
        self.render(text).to_html()
    }

    /// Collect the table models detected in the text without rendering.
    pub fn detect_tables(&mut self, text: &str) -> Vec<Table> {
        let blocks = split_blocks(text);
        let mut tables = Vec::new();
        let mut index = 0;
        while index < blocks.len() {
            if blocks[index].is_empty() {
                index += 1;
                continue;
            }
            match self.processor.build(&blocks[index..]) {
                Ok((consumed, table)) => {
                    tables.push(table);
                    index += consumed;
                }
                Err(_) => index += 1,
            }
        }
        tables
    }
}

fn stylesheet(style: &Style) -> Option<Element> {
    match style {
        Style::Default => {
            let mut el = Element::new("style");
            el.append_text(DEFAULT_STYLESHEET);
            Some(el)
        }
        Style::Bare => None,
        Style::Path(path) => Some(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", path),
        ),
    }
}

fn paragraph(lines: &[String]) -> Element {
    let mut p = Element::new("p");
    p.append_text(&lines.join("\n"));
    p
}
