//! Flat record collections rendered as tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PkgdocError, Result};
use crate::node::{Node, Table};
use crate::record::{Field, Record};

/// A table column: the record field it shows and its header title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub field: String,
    pub title: String,
}

impl Column {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
        }
    }
}

/// How records become table rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Field rows are de-duplicated and sorted by.
    pub sort_field: String,
    /// Whether to emit a header row with the column titles.
    pub show_headers: bool,
}

impl TableSpec {
    pub fn new(columns: Vec<Column>, sort_field: impl Into<String>) -> Self {
        Self {
            columns,
            sort_field: sort_field.into(),
            show_headers: true,
        }
    }

    /// Same spec without a header row.
    pub fn without_headers(mut self) -> Self {
        self.show_headers = false;
        self
    }
}

/// Render records as a table sorted by `spec.sort_field`.
///
/// Records are de-duplicated on the sort field: when two records share a
/// sort value, the later one replaces the earlier one. Remaining rows are
/// ordered by plain string comparison of the sort value.
pub fn render_table(records: &[Record], spec: &TableSpec) -> Result<Table> {
    let mut rows: BTreeMap<String, Vec<Node>> = BTreeMap::new();

    for record in records {
        let key = record
            .get(&spec.sort_field)
            .map(Field::sort_text)
            .ok_or_else(|| PkgdocError::MissingField {
                field: spec.sort_field.clone(),
            })?;

        let row = spec
            .columns
            .iter()
            .map(|column| {
                record
                    .get(&column.field)
                    .map(Field::to_node)
                    .ok_or_else(|| PkgdocError::MissingField {
                        field: column.field.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        if rows.insert(key.clone(), row).is_some() {
            tracing::debug!(sort_key = %key, "duplicate sort key, keeping the later record");
        }
    }

    let headers = if spec.show_headers {
        spec.columns
            .iter()
            .map(|column| Node::paragraph(column.title.clone()))
            .collect()
    } else {
        Vec::new()
    };

    Table::new(spec.columns.len(), headers, rows.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> TableSpec {
        TableSpec::new(
            vec![
                Column::new("package", "Package name"),
                Column::new("version", "Version"),
            ],
            "package",
        )
    }

    fn rec(package: &str, version: &str) -> Record {
        Record::new()
            .with("package", package)
            .with("version", version)
    }

    fn first_column(table: &Table) -> Vec<String> {
        table.rows().iter().map(|row| row[0].plain_text()).collect()
    }

    #[test]
    fn rows_are_sorted_by_sort_field() {
        let table = render_table(&[rec("zsh", "5.9"), rec("bash", "5.1")], &spec()).unwrap();
        assert_eq!(first_column(&table), vec!["bash", "zsh"]);
    }

    #[test]
    fn sorting_is_plain_string_order() {
        let records = [rec("b", "1"), rec("B", "1"), rec("a10", "1"), rec("a9", "1")];
        let table = render_table(&records, &spec()).unwrap();
        assert_eq!(first_column(&table), vec!["B", "a10", "a9", "b"]);
    }

    #[test]
    fn columns_follow_spec_order() {
        let table = render_table(&[rec("bash", "5.1")], &spec()).unwrap();
        assert_eq!(
            table.rows()[0],
            vec![Node::paragraph("bash"), Node::paragraph("5.1")]
        );
        assert_eq!(
            table.headers(),
            &[Node::paragraph("Package name"), Node::paragraph("Version")]
        );
    }

    #[test]
    fn hidden_headers_leave_header_list_empty() {
        let table = render_table(&[rec("bash", "5.1")], &spec().without_headers()).unwrap();
        assert!(!table.has_headers());
        assert_eq!(table.columns(), 2);
    }

    #[test]
    fn duplicate_sort_key_keeps_later_record() {
        let table = render_table(&[rec("foo", "1.0"), rec("foo", "2.0")], &spec()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][1], Node::paragraph("2.0"));
    }

    #[test]
    fn rendering_sorted_output_again_keeps_order() {
        let records = [rec("vim", "9"), rec("awk", "1"), rec("make", "4")];
        let first = render_table(&records, &spec()).unwrap();

        let again: Vec<Record> = first
            .rows()
            .iter()
            .map(|row| rec(&row[0].plain_text(), &row[1].plain_text()))
            .collect();
        let second = render_table(&again, &spec()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn node_fields_are_kept_as_cells() {
        let record = rec("bash", "5.1").with("package_node", Node::link("bash", "https://gnu.org"));
        let spec = TableSpec::new(vec![Column::new("package_node", "Package name")], "package");
        let table = render_table(&[record], &spec).unwrap();
        assert_eq!(table.rows()[0][0], Node::link("bash", "https://gnu.org"));
    }

    #[test]
    fn missing_column_field_fails() {
        let record = Record::new().with("package", "bash");
        let err = render_table(&[record], &spec()).unwrap_err();
        assert!(matches!(err, PkgdocError::MissingField { ref field } if field == "version"));
    }

    #[test]
    fn missing_sort_field_fails() {
        let record = Record::new().with("version", "1");
        let err = render_table(&[record], &spec()).unwrap_err();
        assert!(matches!(err, PkgdocError::MissingField { ref field } if field == "package"));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = render_table(&[], &spec()).unwrap();
        assert!(table.is_empty());
        assert!(table.has_headers());
    }
}
