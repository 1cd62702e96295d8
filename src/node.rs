//! Abstract documentation nodes.
//!
//! The pipeline never writes markup directly. It builds a [`Node`] tree and
//! hands it to a [`crate::format::Formatter`], which serialises it into
//! reStructuredText, Markdown, HTML, JSON or terminal text.

use serde::Serialize;

use crate::error::{PkgdocError, Result};

/// A node of rendered documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A paragraph of plain text.
    Paragraph { text: String },
    /// Inline code, such as a file path.
    Literal { text: String },
    /// Emphasised text.
    Emphasis { text: String },
    /// An external link displaying `text`.
    Link { text: String, target: String },
    /// Several nodes stacked in one block.
    Compound { children: Vec<Node> },
    /// A table.
    Table(Table),
    /// A bullet list, one node per item.
    BulletList { items: Vec<Node> },
    /// A visible error message in place of the expected output.
    Error { message: String },
}

impl Node {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::Emphasis { text: text.into() }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            target: target.into(),
        }
    }

    pub fn compound(children: Vec<Node>) -> Self {
        Self::Compound { children }
    }

    pub fn bullet_list(items: Vec<Node>) -> Self {
        Self::BulletList { items }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Check whether this node is an error node.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Text content of the node with all markup dropped.
    ///
    /// Block children are joined with a single space.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Paragraph { text }
            | Self::Literal { text }
            | Self::Emphasis { text }
            | Self::Link { text, .. } => text.clone(),
            Self::Error { message } => message.clone(),
            Self::Compound { children } => join_plain(children),
            Self::BulletList { items } => join_plain(items),
            Self::Table(table) => join_plain(table.rows.iter().flatten()),
        }
    }
}

fn join_plain<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> String {
    nodes
        .into_iter()
        .map(Node::plain_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// A table with a fixed column count.
///
/// Every row (and the header row, when present) has exactly `columns` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: usize,
    headers: Vec<Node>,
    rows: Vec<Vec<Node>>,
}

impl Table {
    /// Build a table, checking that every row is `columns` cells wide.
    ///
    /// An empty `headers` list means the table has no header row.
    pub fn new(columns: usize, headers: Vec<Node>, rows: Vec<Vec<Node>>) -> Result<Self> {
        if !headers.is_empty() && headers.len() != columns {
            return Err(PkgdocError::MalformedTable {
                expected: columns,
                found: headers.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != columns) {
            return Err(PkgdocError::MalformedTable {
                expected: columns,
                found: row.len(),
            });
        }

        Ok(Self {
            columns,
            headers,
            rows,
        })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Header cells (empty when the table has no header row).
    pub fn headers(&self) -> &[Node] {
        &self.headers
    }

    /// Body rows, in display order.
    pub fn rows(&self) -> &[Vec<Node>] {
        &self.rows
    }

    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
