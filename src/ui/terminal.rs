//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{PkgdocTheme, UserInterface};

/// Terminal UI implementation.
///
/// Documents and messages go to stdout; success and error lines go
/// to stderr so redirected documentation stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PkgdocTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: PkgdocTheme::detect(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn document(&mut self, text: &str) {
        self.out.write_all(text.as_bytes()).ok();
        self.out.flush().ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn theme(&self) -> &PkgdocTheme {
        &self.theme
    }
}
