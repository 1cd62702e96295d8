//! Expanding directive blocks inside documents.
//!
//! reStructuredText documents use explicit markup blocks:
//!
//! ```text
//! .. packages:python3::
//!    :bin: /usr/local/bin/python3
//! ```
//!
//! Markdown documents use MyST-style fences:
//!
//! ````text
//! ```{packages:python3}
//! :bin: /usr/local/bin/python3
//! ```
//! ````
//!
//! Each block is replaced by the rendered inventory. Directives take no
//! arguments and no content, only options.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PkgdocError, Result};
use crate::format::{Format, Formatter};

use super::DirectiveRegistry;

static RST_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\.\. (packages:[\w-]+)::(.*)$").unwrap());

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:([\w-]+):(?:\s+(.*))?$").unwrap());

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(`{3,}|~{3,})(.*)$").unwrap());

static MYST_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{(packages:[\w-]+)\}(.*)$").unwrap());

/// Markup language of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Rst,
    Markdown,
}

impl DocumentKind {
    /// Guess from the file extension; anything but Markdown is treated as
    /// reStructuredText.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("md" | "markdown" | "myst") => Self::Markdown,
            _ => Self::Rst,
        }
    }

    /// Output format matching the document's own markup.
    pub fn native_format(self) -> Format {
        match self {
            Self::Rst => Format::Rst,
            Self::Markdown => Format::Markdown,
        }
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn parse_option(line: &str) -> Option<(String, String)> {
    let caps = OPTION_LINE.captures(line)?;
    let value = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    Some((caps[1].to_string(), value.to_string()))
}

/// Render one directive and indent the result.
fn render_block(
    registry: &DirectiveRegistry,
    formatter: &dyn Formatter,
    name: &str,
    options: &BTreeMap<String, String>,
    indent: &str,
    out: &mut Vec<String>,
) -> Result<()> {
    let node = registry.run(name, options)?;
    for line in formatter.format(&node).lines() {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("{}{}", indent, line));
        }
    }
    Ok(())
}

/// Replace every directive block of `text` with its rendered output.
///
/// # Errors
///
/// - `DirectiveSyntax` for arguments, content or an unclosed fence
/// - any error from running the directive
pub fn expand(
    text: &str,
    kind: DocumentKind,
    registry: &DirectiveRegistry,
    formatter: &dyn Formatter,
) -> Result<String> {
    let lines: Vec<&str> = text.lines().collect();
    let expanded = match kind {
        DocumentKind::Rst => expand_rst(&lines, registry, formatter)?,
        DocumentKind::Markdown => expand_markdown(&lines, registry, formatter)?,
    };

    let mut out = expanded.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn expand_rst(
    lines: &[&str],
    registry: &DirectiveRegistry,
    formatter: &dyn Formatter,
) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = RST_DIRECTIVE.captures(lines[i]) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };
        let start = i + 1;
        let indent = caps[1].to_string();
        let name = caps[2].to_string();
        if !caps[3].trim().is_empty() {
            return Err(PkgdocError::DirectiveSyntax {
                line: start,
                message: format!("{} takes no arguments", name),
            });
        }

        let mut options = BTreeMap::new();
        i += 1;
        while i < lines.len() && indent_width(lines[i]) > indent.len() {
            match parse_option(lines[i]) {
                Some((key, value)) => {
                    options.insert(key, value);
                    i += 1;
                }
                None => break,
            }
        }

        let next = lines[i..].iter().position(|line| !line.trim().is_empty());
        if let Some(offset) = next {
            if indent_width(lines[i + offset]) > indent.len() {
                return Err(PkgdocError::DirectiveSyntax {
                    line: i + offset + 1,
                    message: format!("{} takes no content", name),
                });
            }
        }

        tracing::debug!(directive = %name, line = start, "expanding directive");
        render_block(registry, formatter, &name, &options, &indent, &mut out)?;
    }

    Ok(out)
}

fn expand_markdown(
    lines: &[&str],
    registry: &DirectiveRegistry,
    formatter: &dyn Formatter,
) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = FENCE_OPEN.captures(lines[i]) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };
        let start = i + 1;
        let indent = caps[1].to_string();
        let fence = caps[2].to_string();
        let info = caps[3].trim().to_string();

        let close = lines[start..]
            .iter()
            .position(|line| is_closing_fence(line, &fence))
            .map(|offset| start + offset);

        let Some(directive) = MYST_DIRECTIVE.captures(&info) else {
            // Ordinary code block, copied untouched.
            let end = close.map(|c| c + 1).unwrap_or(lines.len());
            out.extend(lines[i..end].iter().map(|line| line.to_string()));
            i = end;
            continue;
        };

        let name = directive[1].to_string();
        if !directive[2].trim().is_empty() {
            return Err(PkgdocError::DirectiveSyntax {
                line: start,
                message: format!("{} takes no arguments", name),
            });
        }
        let close = close.ok_or_else(|| PkgdocError::DirectiveSyntax {
            line: start,
            message: format!("unclosed {} fence", name),
        })?;

        let mut options = BTreeMap::new();
        for (offset, line) in lines[start..close].iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = parse_option(line).ok_or_else(|| PkgdocError::DirectiveSyntax {
                line: start + offset + 1,
                message: format!("{} takes no content", name),
            })?;
            options.insert(key, value);
        }

        tracing::debug!(directive = %name, line = start, "expanding directive");
        render_block(registry, formatter, &name, &options, &indent, &mut out)?;
        i = close + 1;
    }

    Ok(out)
}

fn is_closing_fence(line: &str, fence: &str) -> bool {
    let trimmed = line.trim();
    let marker = fence.chars().next().unwrap_or('`');
    trimmed.len() >= fence.len() && trimmed.chars().all(|c| c == marker)
}
