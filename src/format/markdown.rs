//! GitHub-flavoured Markdown formatter.

use crate::node::{Node, Table};

use super::{finish, hang, join_blocks, Formatter};

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self, node: &Node) -> String {
        finish(block(node))
    }
}

fn block(node: &Node) -> Vec<String> {
    match node {
        Node::Compound { children } => join_blocks(children.iter().map(block)),
        Node::BulletList { items } => {
            join_blocks(items.iter().map(|item| hang(block(item), "- ", "  ")))
        }
        Node::Table(table) => table_block(table),
        Node::Error { message } => vec![format!("> **Error:** {}", escape(message))],
        inline_node => vec![inline(inline_node)],
    }
}

/// GFM tables always need a header row; header-less tables get an empty one.
fn table_block(table: &Table) -> Vec<String> {
    if table.columns() == 0 || (table.is_empty() && !table.has_headers()) {
        return Vec::new();
    }

    let header: Vec<String> = if table.has_headers() {
        table.headers().iter().map(cell).collect()
    } else {
        vec![String::new(); table.columns()]
    };

    let mut lines = vec![
        row_line(&header),
        row_line(&vec!["---".to_string(); table.columns()]),
    ];
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(cell).collect();
        lines.push(row_line(&cells));
    }
    lines
}

fn row_line(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

fn cell(node: &Node) -> String {
    inline(node).replace('|', "\\|")
}

fn inline(node: &Node) -> String {
    match node {
        Node::Paragraph { text } => escape(text),
        Node::Literal { text } if text.contains('`') => format!("`` {} ``", text),
        Node::Literal { text } => format!("`{}`", text),
        Node::Emphasis { text } => format!("*{}*", escape(text)),
        Node::Link { text, target } => format!("[{}]({})", escape(text), link_target(target)),
        other => escape(&other.plain_text()),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn link_target(target: &str) -> String {
    target
        .replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
}
