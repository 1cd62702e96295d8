//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing documents to stdout and diagnostics to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use pkgdoc::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.document("* - bash\n");
//! ui.success("Done!");
//!
//! assert_eq!(ui.output(), "* - bash\n");
//! assert!(ui.has_success("Done!"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PkgdocTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write generated documentation verbatim.
    fn document(&mut self, text: &str);

    /// Display a line of information.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Theme used for styling messages.
    fn theme(&self) -> &PkgdocTheme;
}
