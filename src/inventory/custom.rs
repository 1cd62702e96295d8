//! Inventories defined in configuration.

use crate::config::InventoryConfig;
use crate::error::{PkgdocError, Result};
use crate::parser::LineParser;
use crate::render::TableSpec;

use super::InventoryDescriptor;

/// Build the descriptor for a configured inventory.
///
/// The configuration is expected to have passed validation; a missing
/// sort field is still reported rather than assumed.
pub fn descriptor(name: &str, config: &InventoryConfig) -> Result<InventoryDescriptor> {
    let sort_field = config
        .effective_sort_field()
        .ok_or_else(|| PkgdocError::ConfigValidationError {
            message: format!("Inventory '{}' has no columns", name),
        })?;

    let mut table = TableSpec::new(config.columns.clone(), sort_field);
    table.show_headers = config.show_headers;

    Ok(InventoryDescriptor::new(
        name,
        config.command.clone(),
        LineParser::new(&config.pattern)?,
        table,
    )
    .with_sections(config.sections.iter().cloned())
    .with_boxed_filter(config.filter.clone().into_filter())
    .with_section_names(config.section_names()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::collect_records;
    use crate::render::Column;

    fn config() -> InventoryConfig {
        InventoryConfig {
            command: vec!["rpm".to_string(), "-qa".to_string()],
            pattern: r"(?P<name>\S+) (?P<version>\S+)".to_string(),
            columns: vec![Column::new("name", "Name"), Column::new("version", "Version")],
            ..Default::default()
        }
    }

    #[test]
    fn builds_table_from_columns() {
        let desc = descriptor("rpm", &config()).unwrap();
        assert_eq!(desc.name, "rpm");
        assert_eq!(desc.table.sort_field, "name");
        assert!(desc.table.show_headers);
        assert!(desc.filter.is_none());
    }

    #[test]
    fn filter_comes_from_config() {
        let mut config = config();
        config
            .filter
            .exclude
            .insert("version".to_string(), "(none)".to_string());
        let desc = descriptor("rpm", &config).unwrap();

        let records = collect_records(["a 1", "b (none)"], &desc.parser, desc.filter.as_ref());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn no_columns_is_an_error() {
        let config = InventoryConfig {
            columns: Vec::new(),
            ..config()
        };
        assert!(matches!(
            descriptor("rpm", &config),
            Err(PkgdocError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let config = InventoryConfig {
            pattern: "(".to_string(),
            ..config()
        };
        assert!(matches!(
            descriptor("rpm", &config),
            Err(PkgdocError::InvalidPattern { .. })
        ));
    }
}
