//! Nested grouping of records by a key path.
//!
//! [`group`] buckets records into a [`GroupingNode`] tree whose depth equals
//! the length of the key path. Branch children are keyed by the record's
//! value for that level's field; leaves hold the records sharing a full key
//! path, in input order.

use std::collections::BTreeMap;

use crate::error::{PkgdocError, Result};
use crate::record::Record;

/// A grouping tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingNode {
    /// Records sharing the same full key path.
    Leaf(Vec<Record>),
    /// Subtrees keyed by grouping value, iterated in sorted key order.
    Branch(BTreeMap<String, GroupingNode>),
}

impl GroupingNode {
    /// Empty tree with `depth` levels of branching.
    fn empty(depth: usize) -> Self {
        if depth == 0 {
            Self::Leaf(Vec::new())
        } else {
            Self::Branch(BTreeMap::new())
        }
    }

    /// Number of branch levels above the leaves.
    ///
    /// An empty branch counts as one level.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(children) => 1 + children.values().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Total number of records across all leaves.
    pub fn record_count(&self) -> usize {
        match self {
            Self::Leaf(records) => records.len(),
            Self::Branch(children) => children.values().map(Self::record_count).sum(),
        }
    }

    /// Child subtree for a grouping value, if this is a branch.
    pub fn child(&self, key: &str) -> Option<&GroupingNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children.get(key),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    fn insert(&mut self, record: Record, key_path: &[String]) -> Result<()> {
        match (self, key_path.split_first()) {
            (Self::Leaf(records), None) => {
                records.push(record);
                Ok(())
            }
            (Self::Branch(children), Some((field, rest))) => {
                let key = record
                    .get(field)
                    .map(|value| value.sort_text())
                    .ok_or_else(|| PkgdocError::MissingGroupingField {
                        field: field.clone(),
                    })?;
                children
                    .entry(key)
                    .or_insert_with(|| Self::empty(rest.len()))
                    .insert(record, rest)
            }
            // Nodes are created with the depth of the remaining key path.
            _ => unreachable!("grouping node depth does not match key path"),
        }
    }
}

/// Group `records` into a tree keyed by the fields of `key_path`.
///
/// With an empty key path the result is a single leaf holding every record.
/// A record lacking one of the key-path fields is a configuration error.
pub fn group<I>(records: I, key_path: &[String]) -> Result<GroupingNode>
where
    I: IntoIterator<Item = Record>,
{
    let mut root = GroupingNode::empty(key_path.len());
    for record in records {
        root.insert(record, key_path)?;
    }
    Ok(root)
}
