//! The command → records → grouping → node pipeline.

use crate::error::{PkgdocError, Result};
use crate::grouping::group;
use crate::host::{run_command, CommandOptions};
use crate::node::Node;
use crate::parser::LineParser;
use crate::record::Record;
use crate::render::render_group;

use super::{InventoryDescriptor, RecordFilter};

/// Parse and filter output lines into records.
///
/// Lines the parser does not match are skipped.
pub fn collect_records<I, S>(lines: I, parser: &LineParser, filter: Option<&RecordFilter>) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        let line = line.as_ref();
        let Some(record) = parser.parse(line) else {
            tracing::trace!(line, "line does not match pattern, skipping");
            skipped += 1;
            continue;
        };
        match filter {
            Some(filter) => records.extend(filter(record)),
            None => records.push(record),
        }
    }

    tracing::debug!(records = records.len(), skipped, "collected records");
    records
}

/// Group and render already collected records.
pub fn render_records(descriptor: &InventoryDescriptor, records: Vec<Record>) -> Result<Node> {
    let tree = group(records, &descriptor.sections)?;
    render_group(&tree, &descriptor.table, &descriptor.section_names)
}

/// Run an inventory end to end.
///
/// A missing command is rendered as an error node; any other failure is
/// returned.
pub fn run_inventory(descriptor: &InventoryDescriptor, options: &CommandOptions) -> Result<Node> {
    let output = match run_command(&descriptor.command, options) {
        Ok(output) => output,
        Err(err @ PkgdocError::CommandNotFound { .. }) => {
            tracing::warn!(inventory = %descriptor.name, "{}", err);
            return Ok(Node::error(err.to_string()));
        }
        Err(err) => return Err(err),
    };

    let records = collect_records(&output.lines, &descriptor.parser, descriptor.filter.as_ref());
    render_records(descriptor, records)
}
