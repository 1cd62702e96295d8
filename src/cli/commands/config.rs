//! Config command implementation.
//!
//! The `pkgdoc config` command shows the resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{PkgdocError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// The config command implementation.
pub struct ConfigCommand {
    source: ConfigSource,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(source: ConfigSource, args: ConfigArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;

        // Show config file path(s)
        match &self.source.config_path {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => {
                let paths = ConfigPaths::discover(&self.source.project_root);
                for path in paths.all_existing() {
                    ui.message(&format!("# {}", path.display()));
                }
            }
        }

        let rendered = if self.args.json {
            let mut json =
                serde_json::to_string_pretty(&config).map_err(|e| PkgdocError::Other(e.into()))?;
            json.push('\n');
            json
        } else {
            serde_yaml::to_string(&config).map_err(|e| PkgdocError::Other(e.into()))?
        };
        ui.document(&rendered);

        Ok(CommandResult::success())
    }
}
