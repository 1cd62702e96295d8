//! Configuration file discovery and loading.
//!
//! This module finds configuration files and loads them in priority order.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::merger::merge_layers;
use crate::config::schema::PkgdocConfig;
use crate::error::{PkgdocError, Result};

/// File name of the project configuration.
pub const PROJECT_CONFIG: &str = "pkgdoc.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`<config dir>/pkgdoc/config.yml`)
/// 2. Project config (`pkgdoc.yml` in the project root)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config
    pub user_global: Option<PathBuf>,

    /// Project config
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::config_dir()
                .map(|dir| dir.join("pkgdoc").join("config.yml"))
                .filter(|path| path.is_file()),
            project: Some(project_root.join(PROJECT_CONFIG)).filter(|path| path.is_file()),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Find the project root by walking up from `start`.
///
/// The first directory holding `pkgdoc.yml`, or failing that a `.git`
/// directory, is the root.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG).is_file())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .map(Path::to_path_buf)
}

/// Load one config file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PkgdocError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PkgdocError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| PkgdocError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_layers(layers: Vec<Value>, source: &Path) -> Result<PkgdocConfig> {
    serde_yaml::from_value(merge_layers(layers)).map_err(|e| PkgdocError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
///
/// Without any config file the defaults apply.
pub fn load_merged_config(project_root: &Path) -> Result<PkgdocConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    let layers = existing
        .iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "loading config layer");
            load_config_value(path)
        })
        .collect::<Result<Vec<_>>>()?;

    let source = existing
        .last()
        .map(|path| path.to_path_buf())
        .unwrap_or_else(|| project_root.join(PROJECT_CONFIG));
    from_layers(layers, &source)
}

/// Load config with an optional path override.
///
/// An override is loaded on its own, without merging, and must exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PkgdocConfig> {
    match config_override {
        Some(path) => from_layers(vec![load_config_value(path)?], path),
        None => load_merged_config(project_root),
    }
}
