//! Rendering
//!
//! Projects a classified, decoded, evaluated [`Table`] into an element
//! tree: `table`/`thead`/`tbody`/`tfoot` sections, divider rows for blank
//! separators, bold footers, italic subtotals, alignment classes, and
//! nested list fragments for cells carrying list markup. Rendering is a
//! pure function of the table; rendering twice yields identical trees.

use crate::columns::model::{Alignment, Cell, ListMarker, Row, RowKind, Table};
use std::fmt::Write as _;

/// Non-breaking space, substituted for empty cell text.
const NBSP: char = '\u{a0}';

/// A node of the output tree: an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A minimal element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.push((name.to_string(), value.to_string()));
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn append_text(&mut self, text: &str) {
        self.children.push(Node::Text(text.to_string()));
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Move the children out, leaving the element empty. The document
    /// renderer uses this to splice a probe parent into the output.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    pub fn extend(&mut self, nodes: Vec<Node>) {
        self.children.extend(nodes);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Serialize to HTML with escaped text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if self.children.is_empty() && is_void(&self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "hr" | "br" | "link")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Render the table into a `<table class="columns">` element.
pub fn render_table(table: &Table) -> Element {
    let mut root = Element::new("table").with_attr("class", "columns");
    let mut head: Option<Element> = None;
    let mut body = Element::new("tbody");
    let mut foot: Option<Element> = None;

    for row in &table.rows {
        match row.kind {
            RowKind::Header => {
                let mut section = Element::new("thead");
                section.append(render_row(row, table, "th", None));
                head = Some(section);
            }
            RowKind::Data => body.append(render_row(row, table, "td", None)),
            RowKind::Subtotal => body.append(render_row(row, table, "td", Some("em"))),
            RowKind::BlankSeparator => body.append(divider_row(table.column_count())),
            RowKind::Footer => {
                let mut section = Element::new("tfoot");
                section.append(render_row(row, table, "td", Some("strong")));
                foot = Some(section);
            }
            // Classification resolves every row before rendering.
            RowKind::Tbd => unreachable!("unclassified row reached the renderer"),
        }
    }

    if let Some(section) = head {
        root.append(section);
    }
    root.append(body);
    if let Some(section) = foot {
        root.append(section);
    }
    root
}

fn render_row(row: &Row, table: &Table, cell_tag: &str, emphasis: Option<&str>) -> Element {
    let mut tr = Element::new("tr");
    for (col, cell) in row.cells.iter().enumerate() {
        let mut td = Element::new(cell_tag);
        if table.alignments[col] == Alignment::Right {
            td.set_attr("class", "right");
        }
        let content = cell_content(cell);
        match emphasis {
            Some(tag) => {
                let mut wrapper = Element::new(tag);
                wrapper.children.push(content);
                td.children.push(Node::Element(wrapper));
            }
            None => td.children.push(content),
        }
        tr.append(td);
    }
    tr
}

fn cell_content(cell: &Cell) -> Node {
    match cell.marker {
        Some(marker) => Node::Element(list_fragment(marker, &cell.text)),
        None if cell.text.is_empty() => Node::Text(NBSP.to_string()),
        None => Node::Text(cell.text.clone()),
    }
}

/// One wrapper per nesting level; the innermost is ordered or unordered
/// per the run the item belongs to, continuing the numbering through a
/// `start` attribute when the run is already underway.
fn list_fragment(marker: ListMarker, text: &str) -> Element {
    let mut inner = Element::new(if marker.ordered { "ol" } else { "ul" });
    if marker.ordered && marker.sequence > 1 {
        inner.set_attr("start", &marker.sequence.to_string());
    }
    let mut item = Element::new("li");
    item.append_text(text);
    inner.append(item);
    let mut fragment = inner;
    for _ in 1..marker.depth {
        let mut outer = Element::new("ul");
        outer.append(fragment);
        fragment = outer;
    }
    fragment
}

fn divider_row(columns: usize) -> Element {
    let mut td = Element::new("td")
        .with_attr("colspan", &columns.to_string())
        .with_attr("class", "divider");
    td.append(Element::new("hr"));
    let mut tr = Element::new("tr");
    tr.append(td);
    tr
}
