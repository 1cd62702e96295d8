//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::format::Format;

/// pkgdoc - Document the packages and tools installed on this host.
#[derive(Debug, Parser)]
#[command(name = "pkgdoc")]
#[command(author, version, long_about = None)]
#[command(about = "Document the packages and tools installed on this host")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the discovered configuration)
    #[arg(short, long, global = true, env = "PKGDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available directives
    List(ListArgs),

    /// Render one directive to standard output
    Render(RenderArgs),

    /// Expand directive blocks in a document
    Expand(ExpandArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print directive names only
    #[arg(long)]
    pub names_only: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Directive to render (e.g. `packages:deb` or `deb`)
    pub directive: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Interpreter for the Python module directives
    #[arg(long, value_name = "PATH")]
    pub bin: Option<String>,

    /// Kill inventory commands running longer than this
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `expand` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExpandArgs {
    /// Document to expand (`.rst`, `.md`)
    pub input: PathBuf,

    /// Write the result here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the document's own markup)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Kill inventory commands running longer than this
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
