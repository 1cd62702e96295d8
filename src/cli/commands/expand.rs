//! Expand command implementation.
//!
//! The `pkgdoc expand` command replaces the directive blocks of a document
//! with rendered inventories.

use std::fs;

use crate::cli::args::ExpandArgs;
use crate::directive::{expand, DocumentKind};
use crate::error::Result;
use crate::format::create_formatter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The expand command implementation.
pub struct ExpandCommand {
    source: ConfigSource,
    args: ExpandArgs,
}

impl ExpandCommand {
    /// Create a new expand command.
    pub fn new(source: ConfigSource, args: ExpandArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ExpandCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;
        let registry = self.source.registry(&config, self.args.timeout);

        let text = fs::read_to_string(&self.args.input)?;
        let kind = DocumentKind::from_path(&self.args.input);
        let format = self.args.format.unwrap_or(kind.native_format());
        tracing::debug!(input = %self.args.input.display(), ?kind, %format, "expanding document");

        let formatter = create_formatter(format);
        let expanded = expand(&text, kind, &registry, formatter.as_ref())?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, expanded)?;
                ui.success(&format!("Wrote {}", path.display()));
            }
            None => ui.document(&expanded),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::Path;
    use tempfile::TempDir;

    fn command(dir: &Path, input: &str, output: Option<&str>) -> ExpandCommand {
        let args = ExpandArgs {
            input: dir.join(input),
            output: output.map(|name| dir.join(name)),
            format: None,
            timeout: None,
        };
        ExpandCommand::new(ConfigSource::new(dir, None), args)
    }

    #[test]
    fn document_without_directives_is_copied() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.rst"), "Title\n=====\n").unwrap();
        let mut ui = MockUI::new();

        command(temp.path(), "index.rst", None)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.output(), "Title\n=====\n");
    }

    #[test]
    fn writes_output_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "# Title\n").unwrap();
        let mut ui = MockUI::new();

        command(temp.path(), "index.md", Some("out.md"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("out.md")).unwrap(), "# Title\n");
        assert!(ui.has_success("out.md"));
        assert_eq!(ui.output(), "");
    }

    #[test]
    fn missing_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        assert!(command(temp.path(), "absent.rst", None)
            .execute(&mut ui)
            .is_err());
    }

    #[test]
    fn directive_syntax_error_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.rst"), ".. packages:deb:: now\n").unwrap();
        let mut ui = MockUI::new();

        let err = command(temp.path(), "index.rst", None)
            .execute(&mut ui)
            .unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
