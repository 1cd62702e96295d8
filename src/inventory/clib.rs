//! Shared C libraries known to the dynamic linker cache.

use crate::error::Result;
use crate::parser::LineParser;
use crate::render::{Column, TableSpec};

use super::InventoryDescriptor;

pub const DESCRIPTION: &str = "C libraries in the dynamic linker cache";

/// `libz.so.1 (libc6,x86-64) => /lib/x86_64-linux-gnu/libz.so.1`; the
/// leading "N libs found in cache" banner does not match.
const PATTERN: &str = r"(?P<library>[^ ]+) \((?P<flags>[^)]*)\)(?: => (?P<path>.*))?";

pub fn descriptor() -> Result<InventoryDescriptor> {
    let command = vec!["/sbin/ldconfig".to_string(), "-p".to_string()];
    let table =
        TableSpec::new(vec![Column::new("library", "Library")], "library").without_headers();

    Ok(InventoryDescriptor::new(
        "c",
        command,
        LineParser::new(PATTERN)?,
        table,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{collect_records, render_records};
    use crate::node::Node;

    const OUTPUT: &str = "\
1234 libs found in cache `/etc/ld.so.cache'
\tlibz.so.1 (libc6,x86-64) => /lib/x86_64-linux-gnu/libz.so.1
\tlibc.so.6 (libc6,x86-64, OS ABI: Linux 3.2.0) => /lib/x86_64-linux-gnu/libc.so.6
\tlibz.so.1 (libc6) => /lib32/libz.so.1
";

    #[test]
    fn banner_is_skipped() {
        let desc = descriptor().unwrap();
        let records = collect_records(OUTPUT.lines(), &desc.parser, None);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text("flags"), Some("libc6,x86-64"));
        assert_eq!(records[0].text("path"), Some("/lib/x86_64-linux-gnu/libz.so.1"));
    }

    #[test]
    fn libraries_are_listed_once_without_headers() {
        let desc = descriptor().unwrap();
        let records = collect_records(OUTPUT.lines(), &desc.parser, None);
        let Node::Table(table) = render_records(&desc, records).unwrap() else {
            panic!("expected a table");
        };

        assert!(!table.has_headers());
        let names: Vec<String> = table.rows().iter().map(|row| row[0].plain_text()).collect();
        assert_eq!(names, vec!["libc.so.6", "libz.so.1"]);
    }
}
