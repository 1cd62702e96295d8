//! Directive names and what they run.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::{InventoryConfig, PkgdocConfig};
use crate::error::{PkgdocError, Result};
use crate::host::CommandOptions;
use crate::inventory::{self, bin, clib, custom, deb, latex, platform, python, pyversions};
use crate::node::Node;

/// Prefix shared by every directive name.
pub const PREFIX: &str = "packages:";

/// Option selecting the interpreter of the Python module listings.
pub const BIN_OPTION: &str = "bin";

#[derive(Debug, Clone)]
enum Kind {
    Platform,
    PythonVersions,
    Bin,
    Deb,
    Python { interpreter: String },
    C,
    Latex,
    Custom(InventoryConfig),
}

impl Kind {
    fn accepts(&self, option: &str) -> bool {
        matches!(self, Self::Python { .. }) && option == BIN_OPTION
    }
}

#[derive(Debug, Clone)]
struct Entry {
    description: String,
    kind: Kind,
}

/// Maps `packages:<kind>` names to inventories.
#[derive(Debug, Clone)]
pub struct DirectiveRegistry {
    entries: BTreeMap<String, Entry>,
    command_options: CommandOptions,
}

/// Full directive name for `name`, adding the prefix when missing.
pub fn qualify(name: &str) -> String {
    if name.starts_with(PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", PREFIX, name)
    }
}

impl DirectiveRegistry {
    /// Registry of the built-in directives.
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
            command_options: CommandOptions::default(),
        };

        registry.register("platform", platform::DESCRIPTION, Kind::Platform);
        registry.register("pyversions", pyversions::DESCRIPTION, Kind::PythonVersions);
        registry.register("bin", bin::DESCRIPTION, Kind::Bin);
        registry.register("deb", deb::DESCRIPTION, Kind::Deb);
        for (name, interpreter, description) in python::VARIANTS {
            registry.register(
                name,
                description,
                Kind::Python {
                    interpreter: interpreter.to_string(),
                },
            );
        }
        registry.register("c", clib::DESCRIPTION, Kind::C);
        registry.register("latex", latex::DESCRIPTION, Kind::Latex);
        registry
    }

    /// Built-ins plus configured inventories, with configured settings.
    ///
    /// Configured inventories never replace a built-in.
    pub fn from_config(config: &PkgdocConfig) -> Self {
        let mut registry = Self::builtin();

        if let Some(interpreter) = &config.settings.python {
            if let Some(entry) = registry.entries.get_mut(&qualify("python")) {
                entry.kind = Kind::Python {
                    interpreter: interpreter.clone(),
                };
            }
        }
        registry.command_options.timeout = config.settings.timeout_secs.map(Duration::from_secs);

        for (name, inventory) in &config.inventories {
            if registry.contains(name) {
                tracing::warn!(inventory = %name, "configured inventory shadows a built-in, ignoring it");
                continue;
            }
            let description = inventory
                .description
                .clone()
                .unwrap_or_else(|| format!("Configured inventory '{}'", name));
            registry.register(name, &description, Kind::Custom(inventory.clone()));
        }

        registry
    }

    fn register(&mut self, name: &str, description: &str, kind: Kind) {
        self.entries.insert(
            qualify(name),
            Entry {
                description: description.to_string(),
                kind,
            },
        );
    }

    /// Override the command execution options (e.g. the timeout).
    pub fn with_command_options(mut self, options: CommandOptions) -> Self {
        self.command_options = options;
        self
    }

    pub fn command_options(&self) -> &CommandOptions {
        &self.command_options
    }

    /// Check whether a directive exists (with or without prefix).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&qualify(name))
    }

    /// Directive names and descriptions, sorted by name.
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.description.as_str()))
    }

    /// Run a directive with its options.
    ///
    /// # Errors
    ///
    /// - `UnknownDirective` if no directive has this name
    /// - `UnknownOption` if an option is not accepted by the directive
    /// - any fatal pipeline error (a missing command is not one)
    pub fn run(&self, name: &str, options: &BTreeMap<String, String>) -> Result<Node> {
        let name = qualify(name);
        let entry = self
            .entries
            .get(&name)
            .ok_or_else(|| PkgdocError::UnknownDirective { name: name.clone() })?;

        if let Some(option) = options.keys().find(|option| !entry.kind.accepts(option)) {
            return Err(PkgdocError::UnknownOption {
                directive: name.clone(),
                option: option.clone(),
            });
        }

        tracing::debug!(directive = %name, "running directive");
        let command_options = &self.command_options;

        match &entry.kind {
            Kind::Platform => platform::run(),
            Kind::PythonVersions => pyversions::run(command_options),
            Kind::Bin => bin::run(),
            Kind::Deb => inventory::run_inventory(&deb::descriptor()?, command_options),
            Kind::Python { interpreter } => {
                let interpreter = options.get(BIN_OPTION).unwrap_or(interpreter);
                let suffix = name.trim_start_matches(PREFIX);
                let descriptor = python::descriptor(suffix, interpreter)?;
                inventory::run_inventory(&descriptor, command_options)
            }
            Kind::C => inventory::run_inventory(&clib::descriptor()?, command_options),
            Kind::Latex => inventory::run_inventory(&latex::descriptor()?, command_options),
            Kind::Custom(config) => {
                let suffix = name.trim_start_matches(PREFIX);
                inventory::run_inventory(&custom::descriptor(suffix, config)?, command_options)
            }
        }
    }
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
