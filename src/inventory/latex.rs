//! LaTeX packages and classes found in the TeX search path.

use std::path::Path;

use crate::error::Result;
use crate::parser::{LineParser, DEFAULT_PATTERN};
use crate::record::Record;
use crate::render::{Column, SectionNames, TableSpec};

use super::InventoryDescriptor;

pub const DESCRIPTION: &str = "LaTeX packages and classes, from kpsepath";

/// Kind of a TeX input file, from its extension.
fn file_kind(name: &str) -> Option<&'static str> {
    if name.ends_with(".sty") {
        Some("package")
    } else if name.ends_with(".cls") {
        Some("class")
    } else {
        None
    }
}

/// Walk `dir` recursively, collecting `.sty` and `.cls` file names.
///
/// Symbolic links to directories are not followed. Missing or unreadable
/// directories contribute nothing.
fn find_tex_files(dir: &Path, found: &mut Vec<Record>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(|entry| entry.ok()) {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            find_tex_files(&entry.path(), found);
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(kind) = file_kind(&name) {
            found.push(Record::new().with("package", name).with("type", kind));
        }
    }
}

/// Fan one kpsepath line out to one record per TeX file.
pub fn expand_search_path(record: Record) -> Vec<Record> {
    let mut found = Vec::new();
    let Some(line) = record.text("line") else {
        return found;
    };

    for entry in line.split(':') {
        let entry = entry.strip_prefix("!!").unwrap_or(entry);
        if !entry.is_empty() {
            find_tex_files(Path::new(entry), &mut found);
        }
    }
    found
}

pub fn section_names() -> SectionNames {
    SectionNames::lookup([("class", "Classes"), ("package", "Packages")])
}

pub fn descriptor() -> Result<InventoryDescriptor> {
    let command = vec!["kpsepath".to_string(), "tex".to_string()];
    let table =
        TableSpec::new(vec![Column::new("package", "Package")], "package").without_headers();

    Ok(
        InventoryDescriptor::new("latex", command, LineParser::new(DEFAULT_PATTERN)?, table)
            .with_sections(["type"])
            .with_filter(expand_search_path)
            .with_section_names(section_names()),
    )
}
