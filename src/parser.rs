//! Line parsing with named-capture patterns.
//!
//! A [`LineParser`] turns one line of command output into a [`Record`] whose
//! fields are the pattern's named capture groups. Lines that do not match are
//! skipped: inventory tools routinely print banners and blank lines.

use regex::Regex;

use crate::error::{PkgdocError, Result};
use crate::record::Record;

/// Pattern capturing the whole line into a `line` field.
pub const DEFAULT_PATTERN: &str = "(?P<line>.*)";

/// Matches trimmed lines against a pattern anchored at the line start.
#[derive(Debug, Clone)]
pub struct LineParser {
    pattern: String,
    regex: Regex,
}

impl LineParser {
    /// Compile a parser for `pattern`.
    ///
    /// The pattern only has to match a prefix of the line; it is anchored at
    /// the first character.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(&format!("^(?:{})", pattern)).map_err(|e| PkgdocError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written, without the anchor.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names of the capture groups, i.e. the fields of produced records.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Parse one line, or `None` when it does not match.
    ///
    /// Groups that did not take part in the match produce empty fields.
    pub fn parse(&self, line: &str) -> Option<Record> {
        let captures = self.regex.captures(line.trim())?;

        Some(
            self.field_names()
                .map(|name| {
                    let value = captures.name(name).map(|m| m.as_str()).unwrap_or("");
                    (name, value)
                })
                .collect(),
        )
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN).expect("default pattern compiles")
    }
}
