//! Parsed inventory records.

use std::collections::BTreeMap;

use crate::node::Node;

/// Value of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Raw captured or derived text.
    Text(String),
    /// A pre-rendered display fragment (e.g. a link).
    Node(Node),
}

impl Field {
    /// Plain string used to group and sort on this field.
    pub fn sort_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Node(node) => node.plain_text(),
        }
    }

    /// Text content, if the field is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// Display fragment for a table cell.
    pub fn to_node(&self) -> Node {
        match self {
            Self::Text(text) => Node::paragraph(text.clone()),
            Self::Node(node) => node.clone(),
        }
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Field {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// One line of inventory output, as a field name to value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Field>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`Record::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Field>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Text of a field, or `None` when absent or not plain text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Field::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
