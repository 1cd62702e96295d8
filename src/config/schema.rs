//! Configuration schema definitions for pkgdoc.
//!
//! This module contains the structs that map to the YAML configuration
//! file format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format::Format;
use crate::inventory::FilterSpec;
use crate::parser::DEFAULT_PATTERN;
use crate::render::{Column, SectionNames};

/// Root configuration structure for `pkgdoc.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgdocConfig {
    /// Global settings
    pub settings: Settings,

    /// User-defined inventories, exposed as `packages:<name>`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inventories: BTreeMap<String, InventoryConfig>,
}

/// Settings shared by every directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output format for `render` and `expand`
    pub format: Format,

    /// Kill inventory commands running longer than this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Interpreter used by `packages:python` when no `:bin:` is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

/// An inventory defined in configuration.
///
/// ```yaml
/// inventories:
///   rpm:
///     command: ["rpm", "-qa", "--qf", "%{NAME}\t%{VERSION}\n"]
///     pattern: "(?P<name>[^\t]*)\t(?P<version>.*)"
///     columns:
///       - { field: name, title: Name }
///       - { field: version, title: Version }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Shown by `pkgdoc list`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Argument vector; no shell is involved
    pub command: Vec<String>,

    /// Line pattern with named captures
    pub pattern: String,

    /// Table columns in display order
    pub columns: Vec<Column>,

    /// Field rows are sorted by (defaults to the first column)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,

    /// Grouping key path
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,

    /// Titles for grouping values
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub section_names: BTreeMap<String, String>,

    /// Show grouping values missing from `section_names` unchanged
    pub passthrough_sections: bool,

    pub show_headers: bool,

    #[serde(skip_serializing_if = "FilterSpec::is_empty")]
    pub filter: FilterSpec,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            description: None,
            command: Vec::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            columns: Vec::new(),
            sort_field: None,
            sections: Vec::new(),
            section_names: BTreeMap::new(),
            passthrough_sections: true,
            show_headers: true,
            filter: FilterSpec::default(),
        }
    }
}

impl InventoryConfig {
    /// The configured sort field, or the first column's field.
    pub fn effective_sort_field(&self) -> Option<&str> {
        self.sort_field
            .as_deref()
            .or_else(|| self.columns.first().map(|c| c.field.as_str()))
    }

    pub fn section_names(&self) -> SectionNames {
        if self.section_names.is_empty() {
            return SectionNames::Identity;
        }
        let names = SectionNames::lookup(self.section_names.clone());
        if self.passthrough_sections {
            names.with_passthrough()
        } else {
            names
        }
    }
}
