//! Output formatters - trait-based format dispatch.
//!
//! A [`Formatter`] serialises a [`Node`] tree into one documentation syntax.

pub mod html;
pub mod json;
pub mod markdown;
pub mod rst;
pub mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Trait for serialising a node tree into a specific output format.
pub trait Formatter {
    fn format(&self, node: &Node) -> String;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// reStructuredText (Sphinx, docutils)
    #[default]
    Rst,
    /// GitHub-flavoured Markdown
    #[value(alias = "md")]
    Markdown,
    /// HTML fragment
    Html,
    /// JSON node tree
    Json,
    /// Plain terminal text
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rst => "rst",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Create the formatter for a format.
pub fn create_formatter(format: Format) -> Box<dyn Formatter> {
    match format {
        Format::Rst => Box::new(rst::RstFormatter),
        Format::Markdown => Box::new(markdown::MarkdownFormatter),
        Format::Html => Box::new(html::HtmlFormatter),
        Format::Json => Box::new(json::JsonFormatter),
        Format::Text => Box::new(text::TextFormatter),
    }
}

/// Join block line groups with one blank line between non-empty groups.
pub(crate) fn join_blocks(blocks: impl IntoIterator<Item = Vec<String>>) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks.into_iter().filter(|b| !b.is_empty()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(block);
    }
    lines
}

/// Prefix the first line with `first` and the others with `rest`.
///
/// Empty continuation lines stay empty.
pub(crate) fn hang(lines: Vec<String>, first: &str, rest: &str) -> Vec<String> {
    if lines.is_empty() {
        return vec![first.trim_end().to_string()];
    }
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", first, line).trim_end().to_string()
            } else if line.is_empty() {
                line
            } else {
                format!("{}{}", rest, line)
            }
        })
        .collect()
}

/// Finish a list of lines as a newline-terminated document.
pub(crate) fn finish(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
