//! HTML fragment formatter.
//!
//! Produces a fragment meant to be embedded in a page, not a standalone
//! document.

use crate::node::{Node, Table};

use super::{finish, Formatter};

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format(&self, node: &Node) -> String {
        let mut lines = Vec::new();
        block(node, 0, &mut lines);
        finish(lines)
    }
}

fn push(lines: &mut Vec<String>, depth: usize, text: impl AsRef<str>) {
    lines.push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
}

fn block(node: &Node, depth: usize, lines: &mut Vec<String>) {
    match node {
        Node::Compound { children } => {
            push(lines, depth, "<div class=\"compound\">");
            for child in children {
                block(child, depth + 1, lines);
            }
            push(lines, depth, "</div>");
        }
        Node::BulletList { items } => {
            push(lines, depth, "<ul>");
            for item in items {
                push(lines, depth + 1, "<li>");
                block(item, depth + 2, lines);
                push(lines, depth + 1, "</li>");
            }
            push(lines, depth, "</ul>");
        }
        Node::Table(table) => table_block(table, depth, lines),
        Node::Error { message } => push(
            lines,
            depth,
            format!("<div class=\"error\"><p>{}</p></div>", html_escape(message)),
        ),
        Node::Paragraph { text } => push(lines, depth, format!("<p>{}</p>", html_escape(text))),
        inline_node => push(lines, depth, format!("<p>{}</p>", inline(inline_node))),
    }
}

fn table_block(table: &Table, depth: usize, lines: &mut Vec<String>) {
    push(lines, depth, "<table>");
    if table.has_headers() {
        push(lines, depth + 1, "<thead>");
        row(table.headers(), "th", depth + 2, lines);
        push(lines, depth + 1, "</thead>");
    }
    push(lines, depth + 1, "<tbody>");
    for cells in table.rows() {
        row(cells, "td", depth + 2, lines);
    }
    push(lines, depth + 1, "</tbody>");
    push(lines, depth, "</table>");
}

fn row(cells: &[Node], tag: &str, depth: usize, lines: &mut Vec<String>) {
    let cells: String = cells
        .iter()
        .map(|cell| format!("<{tag}>{}</{tag}>", inline(cell)))
        .collect();
    push(lines, depth, format!("<tr>{}</tr>", cells));
}

fn inline(node: &Node) -> String {
    match node {
        Node::Paragraph { text } => html_escape(text),
        Node::Literal { text } => format!("<code>{}</code>", html_escape(text)),
        Node::Emphasis { text } => format!("<em>{}</em>", html_escape(text)),
        Node::Link { text, target } => format!(
            "<a href=\"{}\">{}</a>",
            html_escape(target),
            html_escape(text)
        ),
        other => html_escape(&other.plain_text()),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
