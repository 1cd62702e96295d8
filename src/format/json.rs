//! JSON formatter - the node tree itself, for tooling integration.

use crate::node::Node;

use super::Formatter;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, node: &Node) -> String {
        // Node holds only strings, vectors and plain enums.
        let mut out = serde_json::to_string_pretty(node).unwrap_or_else(|_| "null".to_string());
        out.push('\n');
        out
    }
}
