//! reStructuredText formatter.
//!
//! Tables are emitted as `list-table` directives so cells can hold links and
//! literals; grouped output becomes nested bullet lists.

use crate::node::{Node, Table};

use super::{finish, hang, join_blocks, Formatter};

pub struct RstFormatter;

impl Formatter for RstFormatter {
    fn format(&self, node: &Node) -> String {
        finish(block(node))
    }
}

fn block(node: &Node) -> Vec<String> {
    match node {
        Node::Compound { children } => join_blocks(children.iter().map(block)),
        Node::BulletList { items } => {
            join_blocks(items.iter().map(|item| hang(block(item), "* ", "  ")))
        }
        Node::Table(table) => table_block(table),
        Node::Error { message } => vec![
            ".. error::".to_string(),
            String::new(),
            format!("   {}", escape(message)),
        ],
        inline_node => vec![inline(inline_node)],
    }
}

fn table_block(table: &Table) -> Vec<String> {
    if table.is_empty() && !table.has_headers() {
        return Vec::new();
    }

    let mut lines = vec![".. list-table::".to_string()];
    if table.has_headers() {
        lines.push("   :header-rows: 1".to_string());
    }
    lines.push(String::new());

    let header = table.has_headers().then(|| table.headers());
    for row in header.into_iter().chain(table.rows().iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            let marker = if i == 0 { "   * - " } else { "     - " };
            lines.extend(hang(block(cell), marker, "       "));
        }
    }

    lines
}

fn inline(node: &Node) -> String {
    match node {
        Node::Paragraph { text } => escape(text),
        Node::Literal { text } if text.is_empty() => String::new(),
        Node::Literal { text } => format!("``{}``", text),
        Node::Emphasis { text } => format!("*{}*", escape(text)),
        Node::Link { text, target } => format!("`{} <{}>`__", escape_link_text(text), target),
        other => escape(&other.plain_text()),
    }
}

/// Escape inline markup characters.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '`' | '|' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_link_text(text: &str) -> String {
    escape(text).replace('<', "\\<")
}
