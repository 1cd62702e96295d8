//! Render command implementation.
//!
//! The `pkgdoc render` command runs one directive and prints the result.

use std::collections::BTreeMap;

use crate::cli::args::RenderArgs;
use crate::directive::{qualify, BIN_OPTION};
use crate::error::Result;
use crate::format::create_formatter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The render command implementation.
pub struct RenderCommand {
    source: ConfigSource,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(source: ConfigSource, args: RenderArgs) -> Self {
        Self { source, args }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;
        let registry = self.source.registry(&config, self.args.timeout);

        let name = qualify(&self.args.directive);
        if !registry.contains(&name) {
            ui.error(&format!("Unknown directive: {}", name));
            ui.message("Run 'pkgdoc list' to see the available directives.");
            return Ok(CommandResult::failure(2));
        }

        let mut options = BTreeMap::new();
        if let Some(bin) = &self.args.bin {
            options.insert(BIN_OPTION.to_string(), bin.clone());
        }

        let node = registry.run(&name, &options)?;
        let format = self.args.format.unwrap_or(config.settings.format);
        ui.document(&create_formatter(format).format(&node));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
settings:
  format: markdown
inventories:
  letters:
    command: [sh, -c, "printf 'b 2\na 1\n'"]
    pattern: '(?P<name>\S+) (?P<version>\S+)'
    columns:
      - { field: name, title: Name }
      - { field: version, title: Version }
  ghost:
    command: [/nonexistent/pkgdoc-ghost]
    columns: [{ field: line, title: Line }]
"#;

    fn command(directive: &str, format: Option<Format>) -> (TempDir, RenderCommand) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pkgdoc.yml");
        fs::write(&path, CONFIG).unwrap();
        let args = RenderArgs {
            directive: directive.to_string(),
            format,
            bin: None,
            timeout: None,
        };
        let cmd = RenderCommand::new(ConfigSource::new(temp.path(), Some(&path)), args);
        (temp, cmd)
    }

    #[cfg(unix)]
    #[test]
    fn renders_in_configured_format() {
        let (_temp, cmd) = command("letters", None);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        insta::assert_snapshot!(ui.output(), @r"
        | Name | Version |
        | --- | --- |
        | a | 1 |
        | b | 2 |
        ");
    }

    #[cfg(unix)]
    #[test]
    fn format_flag_wins_over_config() {
        let (_temp, cmd) = command("packages:letters", Some(Format::Rst));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.output().starts_with(".. list-table::\n   :header-rows: 1\n"));
    }

    #[test]
    fn missing_command_renders_error_node() {
        let (_temp, cmd) = command("ghost", Some(Format::Text));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.output(), "error: Command not found: /nonexistent/pkgdoc-ghost\n");
    }

    #[test]
    fn unknown_directive_exits_with_two() {
        let (_temp, cmd) = command("rpm", None);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("packages:rpm"));
    }
}
