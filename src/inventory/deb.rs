//! Installed Debian packages, grouped by archive section.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::parser::LineParser;
use crate::render::{Column, TableSpec};

use super::{FilterSpec, InventoryDescriptor, LinkSpec};

pub const DESCRIPTION: &str = "Installed Debian packages, grouped by section";

const SHOW_FORMAT: &str = "--showformat=${db:Status-Abbrev}\t${Section}\t${binary:Package}\t${Version}\t${Homepage}\t${binary:Summary}\n";

/// Trailing fields are optional: lines are trimmed before matching, which
/// removes the separators of empty trailing fields.
const PATTERN: &str = concat!(
    r"(?P<status>[^\t]*)\t(?P<section>[^\t]*)\t(?P<package>[^\t]*)",
    r"(?:\t(?P<version>[^\t]*)(?:\t(?P<homepage>[^\t]*)(?:\t(?P<summary>[^\t]*))?)?)?",
);

/// Filter keeping installed packages and linking names to their homepage.
pub fn filter_spec() -> FilterSpec {
    FilterSpec {
        require: BTreeMap::from([("status".to_string(), "ii".to_string())]),
        exclude: BTreeMap::new(),
        links: vec![LinkSpec {
            text: "package".to_string(),
            url: "homepage".to_string(),
            into: "package_node".to_string(),
        }],
    }
}

pub fn table_spec() -> TableSpec {
    TableSpec::new(
        vec![
            Column::new("package_node", "Package name"),
            Column::new("version", "Version"),
            Column::new("summary", "Summary"),
        ],
        "package",
    )
}

pub fn descriptor() -> Result<InventoryDescriptor> {
    let command = vec![
        "dpkg-query".to_string(),
        "--show".to_string(),
        SHOW_FORMAT.to_string(),
    ];

    Ok(
        InventoryDescriptor::new("deb", command, LineParser::new(PATTERN)?, table_spec())
            .with_sections(["section"])
            .with_boxed_filter(filter_spec().into_filter()),
    )
}
