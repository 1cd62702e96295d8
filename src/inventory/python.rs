//! Python modules importable by an interpreter.
//!
//! The listing script ships inside the binary and is passed to the
//! interpreter with `-c`, so nothing is written to disk.

use include_dir::{include_dir, Dir};

use crate::error::{PkgdocError, Result};
use crate::parser::LineParser;
use crate::record::Record;
use crate::render::{Column, TableSpec};

use super::InventoryDescriptor;

/// Embedded helper scripts.
static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

const HELPER_PATH: &str = "bin/list_modules.py";

const PATTERN: &str = r"(?P<package>[^\t]*)\t(?P<version>[^\t]*)\t(?P<path>[^\t]*)";

/// Directive names and the interpreter each runs by default.
pub const VARIANTS: [(&str, &str, &str); 3] = [
    ("python", "python", "Python modules available to `python`"),
    ("python2", "python2", "Python modules available to `python2`"),
    ("python3", "python3", "Python modules available to `python3`"),
];

/// Source of the module listing script.
pub fn helper_script() -> Result<&'static str> {
    let file = DATA_DIR
        .get_file(HELPER_PATH)
        .ok_or_else(|| anyhow::anyhow!("embedded helper {} is missing", HELPER_PATH))?;

    file.contents_utf8()
        .ok_or_else(|| PkgdocError::ConfigParseError {
            path: HELPER_PATH.into(),
            message: "Invalid UTF-8".to_string(),
        })
}

/// Modules without a file (built-ins, namespace packages) are not listed.
fn drop_fileless(record: Record) -> Vec<Record> {
    match record.text("path").map(str::trim) {
        None | Some("") | Some("None") => Vec::new(),
        Some(_) => vec![record],
    }
}

pub fn descriptor(name: &str, interpreter: &str) -> Result<InventoryDescriptor> {
    let command = vec![
        interpreter.to_string(),
        "-c".to_string(),
        helper_script()?.to_string(),
    ];
    let table = TableSpec::new(
        vec![
            Column::new("package", "Package name"),
            Column::new("version", "Version"),
        ],
        "package",
    );

    Ok(
        InventoryDescriptor::new(name, command, LineParser::new(PATTERN)?, table)
            .with_filter(drop_fileless),
    )
}
