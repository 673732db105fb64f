//! Workspace manifest registration
//!
//! The manifest is patched as text: find the `members = [` line and splice
//! one entry after it. Nothing else in the file is parsed or reformatted.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Result, ScaffoldError};

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*members\s*=\s*\[\s*$").expect("marker pattern is valid")
    })
}

/// A workspace manifest held as raw lines, terminators included
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    lines: Vec<String>,
    marker: usize,
}

impl Manifest {
    /// Read the manifest and locate its members list
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScaffoldError::Configuration(format!(
                "Workspace manifest not found: {}",
                path.display()
            )),
            _ => ScaffoldError::io(path, e),
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();

        let marker = lines
            .iter()
            .position(|line| marker_pattern().is_match(strip_terminator(line)))
            .ok_or_else(|| {
                ScaffoldError::Configuration(format!(
                    "No `members = [` list found in {}",
                    path.display()
                ))
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines,
            marker,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines between the marker and the closing `]`
    fn member_lines(&self) -> impl Iterator<Item = &String> {
        self.lines[self.marker + 1..]
            .iter()
            .take_while(|line| !line.trim_start().starts_with(']'))
    }

    /// Whether the members list already has `member`
    pub fn contains_member(&self, member: &str) -> bool {
        self.member_lines().any(|line| entry_value(line) == Some(member))
    }

    /// Insert `member` right after the marker; false if already listed
    pub fn add_member(&mut self, member: &str) -> bool {
        if self.contains_member(member) {
            return false;
        }

        let marker_line = &mut self.lines[self.marker];
        let eol = if marker_line.ends_with("\r\n") {
            "\r\n"
        } else {
            if !marker_line.ends_with('\n') {
                marker_line.push('\n');
            }
            "\n"
        };

        self.lines
            .insert(self.marker + 1, format!("\t'{}',{}", member, eol));
        true
    }

    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// Write the manifest back in full
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.content()).map_err(|e| ScaffoldError::io(&self.path, e))
    }
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// `'apps/x',` / `"apps/x"` -> `apps/x`
fn entry_value(line: &str) -> Option<&str> {
    let value = line.trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim_end();
    ['\'', '"'].iter().find_map(|&quote| {
        value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
    })
}
