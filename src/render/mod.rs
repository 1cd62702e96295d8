//! Record rendering.
//!
//! Turns records into documentation nodes:
//! - [`render_table`] - a flat collection of records into a sorted table
//! - [`render_group`] - a grouping tree into nested bullet lists of tables

pub mod group;
pub mod table;

pub use group::{render_group, SectionNames};
pub use table::{render_table, Column, TableSpec};
