//! Placeholder substitution
//!
//! Template files spell the app name as a fixed literal token. Every
//! occurrence is replaced, including ones embedded in longer identifiers.

use std::borrow::Cow;

/// Literal token -> app name substitution
#[derive(Debug, Clone)]
pub struct Placeholder {
    token: String,
    value: String,
}

impl Placeholder {
    pub fn new(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the content mentions the token at all
    pub fn matches(&self, content: &str) -> bool {
        !self.token.is_empty() && content.contains(&self.token)
    }

    /// Replace every occurrence of the token
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if self.matches(content) {
            Cow::Owned(content.replace(&self.token, &self.value))
        } else {
            Cow::Borrowed(content)
        }
    }
}

/// Check if a file is likely binary (should not have placeholder substitution)
pub fn is_binary_file(content: &[u8]) -> bool {
    // Check for null bytes in first 8KB
    let check_len = content.len().min(8192);
    content[..check_len].contains(&0)
}
