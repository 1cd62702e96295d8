//! Error types for pkgdoc operations.
//!
//! This module defines [`PkgdocError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing inventory command is the only recoverable failure: the
//!   pipeline turns [`PkgdocError::CommandNotFound`] into an inline error node
//! - Misconfigured inventories (missing fields, bad patterns) fail loudly
//! - Use `anyhow::Error` (via `PkgdocError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pkgdoc operations.
#[derive(Debug, Error)]
pub enum PkgdocError {
    /// The inventory command does not exist on this host.
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// The inventory command did not finish in time and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// The inventory command printed a line that is not valid UTF-8.
    #[error("Command '{command}' produced invalid UTF-8 on line {line}")]
    Encoding { command: String, line: usize },

    /// A line pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A record lacks a field named in the grouping key path.
    #[error("Record has no field '{field}' to group by")]
    MissingGroupingField { field: String },

    /// A record lacks a field needed to build a table row.
    #[error("Record has no field '{field}'")]
    MissingField { field: String },

    /// A table row does not have the table's column count.
    #[error("Table row has {found} cells, expected {expected}")]
    MalformedTable { expected: usize, found: usize },

    /// No directive is registered under this name.
    #[error("Unknown directive: {name}")]
    UnknownDirective { name: String },

    /// A directive was given an option it does not accept.
    #[error("Directive '{directive}' does not accept option '{option}'")]
    UnknownOption { directive: String, option: String },

    /// A directive block in a document could not be parsed.
    #[error("Invalid directive at line {line}: {message}")]
    DirectiveSyntax { line: usize, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pkgdoc operations.
pub type Result<T> = std::result::Result<T, PkgdocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_displays_command() {
        let err = PkgdocError::CommandNotFound {
            command: "dpkg-query".into(),
        };
        assert_eq!(err.to_string(), "Command not found: dpkg-query");
    }

    #[test]
    fn command_timed_out_displays_command_and_seconds() {
        let err = PkgdocError::CommandTimedOut {
            command: "kpsepath tex".into(),
            seconds: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("kpsepath tex"));
        assert!(msg.contains("5s"));
    }

    #[test]
    fn missing_grouping_field_displays_field() {
        let err = PkgdocError::MissingGroupingField {
            field: "section".into(),
        };
        assert!(err.to_string().contains("section"));
    }

    #[test]
    fn malformed_table_displays_counts() {
        let err = PkgdocError::MalformedTable {
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn unknown_option_displays_directive_and_option() {
        let err = PkgdocError::UnknownOption {
            directive: "packages:deb".into(),
            option: "bin".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("packages:deb"));
        assert!(msg.contains("bin"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PkgdocError::ConfigParseError {
            path: PathBuf::from("/pkgdoc.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/pkgdoc.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PkgdocError = io_err.into();
        assert!(matches!(err, PkgdocError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PkgdocError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
