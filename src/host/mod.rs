//! Host-side collaborators: process execution and search-path discovery.

pub mod command;
pub mod paths;

pub use command::{run_command, CommandOptions, CommandOutput};
pub use paths::{expand_path, is_executable, list_executables, search_path, search_path_from};
