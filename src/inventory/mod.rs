//! Host inventories.
//!
//! Most inventories are a [`InventoryDescriptor`] value run through one
//! pipeline (command → parse → filter → group → render). The binary
//! listing, platform attributes and interpreter versions are gathered
//! directly and only share the node model.

pub mod bin;
pub mod clib;
pub mod custom;
pub mod deb;
mod descriptor;
mod filter;
pub mod latex;
mod pipeline;
pub mod platform;
pub mod python;
pub mod pyversions;

pub use descriptor::InventoryDescriptor;
pub use filter::{FilterSpec, LinkSpec};
pub use pipeline::{collect_records, render_records, run_inventory};

use crate::record::Record;

/// Per-record transformation: drop (empty), keep (one) or fan out (many).
pub type RecordFilter = Box<dyn Fn(Record) -> Vec<Record> + Send + Sync>;

/// Directive kinds built into pkgdoc; configured inventories may not reuse them.
pub const BUILTIN_KINDS: [&str; 9] = [
    "platform",
    "pyversions",
    "bin",
    "deb",
    "python",
    "python2",
    "python3",
    "c",
    "latex",
];
