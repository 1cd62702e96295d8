//! Configuration validation rules.
//!
//! This module validates configured inventories:
//! - Names must be usable as directive names and not shadow built-ins
//! - Commands must not be empty
//! - Patterns must compile
//! - Columns, the sort field and sections must name a field the pattern
//!   captures or the filter derives
//! - Filter keys and link sources must name a field the pattern captures

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::schema::{InventoryConfig, PkgdocConfig};
use crate::error::{PkgdocError, Result};
use crate::inventory::BUILTIN_KINDS;
use crate::parser::LineParser;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w-]+$").unwrap());

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Inventory the error is about
    pub inventory: String,
}

impl ValidationError {
    fn new(rule: &'static str, inventory: &str, message: String) -> Self {
        Self {
            rule,
            message,
            inventory: inventory.to_string(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Every inventory is checked; errors are not short-circuited.
pub fn validate_config(config: &PkgdocConfig) -> Vec<ValidationError> {
    config
        .inventories
        .iter()
        .flat_map(|(name, inventory)| validate_inventory(name, inventory))
        .collect()
}

fn validate_inventory(name: &str, inventory: &InventoryConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !NAME_REGEX.is_match(name) {
        errors.push(ValidationError::new(
            "invalid-name",
            name,
            format!(
                "Inventory name '{}' may only contain letters, digits, '_' and '-'",
                name
            ),
        ));
    }
    if BUILTIN_KINDS.contains(&name) {
        errors.push(ValidationError::new(
            "shadows-builtin",
            name,
            format!("Inventory '{}' shadows the built-in packages:{}", name, name),
        ));
    }
    if inventory.command.is_empty() {
        errors.push(ValidationError::new(
            "missing-command",
            name,
            format!("Inventory '{}' has an empty command", name),
        ));
    }
    if inventory.columns.is_empty() {
        errors.push(ValidationError::new(
            "missing-columns",
            name,
            format!("Inventory '{}' has no columns", name),
        ));
    }

    let parser = match LineParser::new(&inventory.pattern) {
        Ok(parser) => parser,
        Err(err) => {
            errors.push(ValidationError::new(
                "invalid-pattern",
                name,
                format!("Inventory '{}': {}", name, err),
            ));
            return errors;
        }
    };

    let captured: BTreeSet<&str> = parser.field_names().collect();
    let known: BTreeSet<&str> = captured
        .iter()
        .copied()
        .chain(inventory.filter.derived_fields())
        .collect();
    let mut check_field = |role: &str, field: &str, allowed: &BTreeSet<&str>| {
        if !allowed.contains(field) {
            errors.push(ValidationError::new(
                "unknown-field",
                name,
                format!(
                    "Inventory '{}' uses {} '{}' which the pattern does not capture",
                    name, role, field
                ),
            ));
        }
    };

    for column in &inventory.columns {
        check_field("column", &column.field, &known);
    }
    if let Some(sort_field) = inventory.effective_sort_field() {
        check_field("sort field", sort_field, &known);
    }
    for section in &inventory.sections {
        check_field("section", section, &known);
    }

    // Filters see the parsed record before any link is derived.
    let filter = &inventory.filter;
    for field in filter.require.keys() {
        check_field("required field", field, &captured);
    }
    for field in filter.exclude.keys() {
        check_field("excluded field", field, &captured);
    }
    for link in &filter.links {
        check_field("link text", &link.text, &captured);
        check_field("link url", &link.url, &captured);
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &PkgdocConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PkgdocError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
