use std::fmt;

use crate::parser::LineParser;
use crate::record::Record;
use crate::render::{SectionNames, TableSpec};

use super::RecordFilter;

/// Everything needed to turn one command's output into documentation.
pub struct InventoryDescriptor {
    /// Directive name suffix, e.g. `deb` for `packages:deb`.
    pub name: String,
    /// Argument vector; the first element is the executable.
    pub command: Vec<String>,
    pub parser: LineParser,
    pub table: TableSpec,
    /// Grouping key path (empty for a single table).
    pub sections: Vec<String>,
    /// Applied to every parsed record; `None` keeps records unchanged.
    pub filter: Option<RecordFilter>,
    pub section_names: SectionNames,
}

impl InventoryDescriptor {
    pub fn new(
        name: impl Into<String>,
        command: Vec<String>,
        parser: LineParser,
        table: TableSpec,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            parser,
            table,
            sections: Vec::new(),
            filter: None,
            section_names: SectionNames::Identity,
        }
    }

    /// Group records by these fields, outermost first.
    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Record) -> Vec<Record> + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_boxed_filter(mut self, filter: Option<RecordFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_section_names(mut self, names: SectionNames) -> Self {
        self.section_names = names;
        self
    }
}

impl fmt::Debug for InventoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryDescriptor")
            .field("name", &self.name)
            .field("command", &self.command)
            .field("pattern", &self.parser.pattern())
            .field("table", &self.table)
            .field("sections", &self.sections)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("section_names", &self.section_names)
            .finish()
    }
}
