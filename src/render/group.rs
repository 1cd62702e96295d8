//! Grouping trees rendered as nested bullet lists.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::grouping::GroupingNode;
use crate::node::Node;

use super::table::{render_table, TableSpec};

/// How grouping values are shown as section labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionNames {
    /// Show the grouping value itself.
    #[default]
    Identity,
    /// Show a title looked up from the grouping value.
    Lookup {
        names: BTreeMap<String, String>,
        /// Show unknown values unchanged instead of leaving them unlabelled.
        passthrough: bool,
    },
}

impl SectionNames {
    /// Lookup table that leaves unknown values unlabelled.
    pub fn lookup<I, K, V>(names: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Lookup {
            names: names
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            passthrough: false,
        }
    }

    /// Same lookup, but unknown values are shown unchanged.
    pub fn with_passthrough(self) -> Self {
        match self {
            Self::Lookup { names, .. } => Self::Lookup {
                names,
                passthrough: true,
            },
            identity => identity,
        }
    }

    /// Label for a grouping value, or `None` to omit the label.
    pub fn label(&self, key: &str) -> Option<String> {
        match self {
            Self::Identity => Some(key.to_string()),
            Self::Lookup { names, passthrough } => names
                .get(key)
                .cloned()
                .or_else(|| passthrough.then(|| key.to_string())),
        }
    }
}

/// Render a grouping tree.
///
/// Leaves become tables (see [`render_table`]). Branches become a bullet
/// list with one item per child, in ascending order of the grouping value;
/// each item holds the section label above the child's rendering.
pub fn render_group(node: &GroupingNode, spec: &TableSpec, names: &SectionNames) -> Result<Node> {
    match node {
        GroupingNode::Leaf(records) => Ok(render_table(records, spec)?.into()),
        GroupingNode::Branch(children) => {
            let items = children
                .iter()
                .map(|(key, child)| {
                    let content = render_group(child, spec, names)?;
                    let mut parts = Vec::with_capacity(2);
                    if let Some(label) = names.label(key) {
                        parts.push(Node::paragraph(label));
                    }
                    parts.push(content);
                    Ok(Node::compound(parts))
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Node::bullet_list(items))
        }
    }
}
