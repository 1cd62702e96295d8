//! List command implementation.
//!
//! The `pkgdoc list` command lists the available directives.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The list command implementation.
pub struct ListCommand {
    source: ConfigSource,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(source: ConfigSource, args: ListArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;
        let registry = self.source.registry(&config, None);

        if self.args.names_only {
            for (name, _) in registry.names() {
                ui.message(name);
            }
            return Ok(CommandResult::success());
        }

        let width = registry.names().map(|(name, _)| name.len()).max().unwrap_or(0);
        let header = format!("{}", ui.theme().key.apply_to("Directives:"));
        ui.message(&header);
        for (name, description) in registry.names() {
            let line = ui
                .theme()
                .format_directive(&format!("{:width$}", name, width = width), description);
            ui.message(&format!("  {}", line));
        }

        Ok(CommandResult::success())
    }
}
