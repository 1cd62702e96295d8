//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ConfigSource`] for commands that need the configuration
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, PkgdocConfig};
use crate::directive::DirectiveRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for documents and messages
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its configuration.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Project root searched for `pkgdoc.yml`.
    pub project_root: PathBuf,

    /// Explicit config file, loaded on its own.
    pub config_path: Option<PathBuf>,
}

impl ConfigSource {
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Load and validate the configuration.
    pub fn load(&self) -> Result<PkgdocConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// Directive registry for the configuration, with an optional timeout
    /// override in seconds.
    pub fn registry(&self, config: &PkgdocConfig, timeout: Option<u64>) -> DirectiveRegistry {
        let registry = DirectiveRegistry::from_config(config);
        match timeout {
            Some(secs) => {
                let mut options = registry.command_options().clone();
                options.timeout = Some(Duration::from_secs(secs));
                registry.with_command_options(options)
            }
            None => registry,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: ConfigSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            source: ConfigSource {
                project_root,
                config_path,
            },
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.source.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Expand(args) => {
                let cmd = super::expand::ExpandCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
