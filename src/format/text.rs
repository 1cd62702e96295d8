//! Plain terminal text formatter.
//!
//! Tables are drawn with box-drawing characters, lists with bullets.

use console::measure_text_width;

use crate::node::{Node, Table};

use super::{finish, hang, join_blocks, Formatter};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, node: &Node) -> String {
        finish(block(node))
    }
}

fn block(node: &Node) -> Vec<String> {
    match node {
        Node::Compound { children } => join_blocks(children.iter().map(block)),
        Node::BulletList { items } => {
            join_blocks(items.iter().map(|item| hang(block(item), "• ", "  ")))
        }
        Node::Table(table) => table_block(table),
        Node::Error { message } => vec![format!("error: {}", message)],
        inline_node => vec![inline(inline_node)],
    }
}

fn inline(node: &Node) -> String {
    match node {
        Node::Link { text, target } => format!("{} <{}>", text, target),
        other => other.plain_text(),
    }
}

fn table_block(table: &Table) -> Vec<String> {
    if table.columns() == 0 || (table.is_empty() && !table.has_headers()) {
        return Vec::new();
    }

    let headers: Vec<String> = table.headers().iter().map(inline).collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(inline).collect())
        .collect();

    let mut widths = vec![0; table.columns()];
    for cells in std::iter::once(&headers).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut lines = vec![border(&widths, '┌', '┬', '┐')];
    if table.has_headers() {
        lines.push(row_line(&headers, &widths));
        lines.push(border(&widths, '├', '┼', '┤'));
    }
    for cells in &rows {
        lines.push(row_line(cells, &widths));
    }
    lines.push(border(&widths, '└', '┴', '┘'));
    lines
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(measure_text_width(cell));
        s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
    }
    s
}
