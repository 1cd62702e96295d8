//! pkgdoc - Render the host's installed packages and tools as documentation.
//!
//! An inventory runs a host command, parses each output line into a
//! record with a regular expression, optionally filters and groups the
//! records, and renders them as a table (or nested lists of tables). The
//! result is a [`node::Node`] tree which a [`format::Formatter`] turns into
//! reStructuredText, Markdown, HTML, JSON or terminal text.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`directive`] - Directive registry and document expansion
//! - [`error`] - Error types and result aliases
//! - [`format`] - Output formatters
//! - [`grouping`] - Grouping records by field values
//! - [`host`] - Command execution and search-path discovery
//! - [`inventory`] - Built-in and configured inventories
//! - [`node`] - Documentation node tree
//! - [`parser`] - Line parsing into records
//! - [`record`] - Records and field values
//! - [`render`] - Tables and grouped output
//! - [`ui`] - Terminal output and theme
//!
//! # Example
//!
//! ```
//! use pkgdoc::inventory::{collect_records, render_records, InventoryDescriptor};
//! use pkgdoc::parser::LineParser;
//! use pkgdoc::render::{Column, TableSpec};
//!
//! let parser = LineParser::new(r"(?P<name>\S+) (?P<version>\S+)").unwrap();
//! let table = TableSpec::new(
//!     vec![Column::new("name", "Name"), Column::new("version", "Version")],
//!     "name",
//! );
//! let desc = InventoryDescriptor::new("demo", Vec::new(), parser, table);
//!
//! let records = collect_records(["zlib 1.3", "bash 5.2"], &desc.parser, None);
//! let node = render_records(&desc, records).unwrap();
//! assert_eq!(node.plain_text(), "bash 5.2 zlib 1.3");
//! ```

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod format;
pub mod grouping;
pub mod host;
pub mod inventory;
pub mod node;
pub mod parser;
pub mod record;
pub mod render;
pub mod ui;

pub use error::{PkgdocError, Result};
