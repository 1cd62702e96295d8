//! Configuration loading, parsing, and validation for pkgdoc.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layered merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pkgdoc::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("pkgdoc.yml");
//! fs::write(&path, "settings:\n  format: markdown").unwrap();
//!
//! let config = load_config(temp.path(), Some(&path)).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.format.to_string(), "markdown");
//! ```
//!
//! # Configuration File Locations
//!
//! pkgdoc discovers and merges configuration in this order:
//! 1. User global config (`<config dir>/pkgdoc/config.yml`)
//! 2. Project config (`pkgdoc.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_value, load_merged_config, ConfigPaths,
    PROJECT_CONFIG,
};
pub use merger::{merge_into, merge_layers};
pub use schema::{InventoryConfig, PkgdocConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};
