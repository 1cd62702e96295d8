//! Declarative record filters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::record::{Field, Record};

use super::RecordFilter;

/// Derive a display field linking `text` to `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Field holding the link text.
    pub text: String,
    /// Field holding the link target; an empty target yields plain text.
    pub url: String,
    /// Name of the derived field.
    pub into: String,
}

/// A filter described as data, usable from configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Keep a record only if each field equals the value (both trimmed).
    pub require: BTreeMap<String, String>,
    /// Drop a record if any field equals the value (both trimmed).
    pub exclude: BTreeMap<String, String>,
    pub links: Vec<LinkSpec>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.exclude.is_empty() && self.links.is_empty()
    }

    /// Names of the fields added by [`FilterSpec::apply`].
    pub fn derived_fields(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.into.as_str())
    }

    /// Apply the filter to one record.
    ///
    /// A record missing a required field is dropped.
    pub fn apply(&self, mut record: Record) -> Option<Record> {
        for (field, expected) in &self.require {
            if trimmed(&record, field) != Some(expected.trim()) {
                return None;
            }
        }
        for (field, rejected) in &self.exclude {
            if trimmed(&record, field) == Some(rejected.trim()) {
                return None;
            }
        }

        for link in &self.links {
            let Some(text) = record.text(&link.text).map(String::from) else {
                continue;
            };
            let derived = match record.text(&link.url).map(str::trim) {
                Some(url) if !url.is_empty() => Field::Node(Node::link(text, url)),
                _ => Field::Text(text),
            };
            record.insert(link.into.clone(), derived);
        }

        Some(record)
    }

    /// Boxed filter, or `None` when the spec does nothing.
    pub fn into_filter(self) -> Option<RecordFilter> {
        if self.is_empty() {
            return None;
        }
        Some(Box::new(move |record: Record| {
            self.apply(record).into_iter().collect()
        }))
    }
}

fn trimmed<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.text(field).map(str::trim)
}
