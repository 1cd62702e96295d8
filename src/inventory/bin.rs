//! Executables available in each search-path directory.

use std::path::PathBuf;

use crate::error::Result;
use crate::host::{list_executables, search_path};
use crate::node::{Node, Table};

pub const DESCRIPTION: &str = "Executables in each directory of PATH";

/// One bullet per directory, in search-path order.
pub fn render_dirs(dirs: &[PathBuf]) -> Result<Node> {
    let items = dirs
        .iter()
        .map(|dir| {
            let binaries = list_executables(dir);
            tracing::debug!(dir = %dir.display(), count = binaries.len(), "listed executables");

            let content = if binaries.is_empty() {
                Node::emphasis("empty")
            } else {
                let rows = binaries
                    .into_iter()
                    .map(|name| vec![Node::paragraph(name)])
                    .collect();
                Table::new(1, Vec::new(), rows)?.into()
            };
            Ok(Node::compound(vec![
                Node::literal(dir.display().to_string()),
                content,
            ]))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::bullet_list(items))
}

pub fn run() -> Result<Node> {
    render_dirs(&search_path())
}
