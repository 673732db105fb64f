//! App name validation
//!
//! App names become directory names, crate names and module paths
//! (`use my_app::...`), so they must be valid Rust identifiers.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::NameError;

/// Longest accepted app name
pub const MAX_NAME_LEN: usize = 50;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("app name pattern is valid")
    })
}

/// A validated app name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Validate a raw argument
    pub fn parse(raw: Option<&str>) -> Result<Self, NameError> {
        let name = match raw {
            Some(name) if !name.is_empty() => name,
            _ => return Err(NameError::Missing),
        };

        // Checked ahead of the pattern so `my-app` gets the specific hint.
        if name.contains('-') {
            return Err(NameError::Hyphen {
                suggestion: name.replace('-', "_"),
            });
        }

        if !name_pattern().is_match(name) {
            return Err(NameError::InvalidChars(name.to_string()));
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
