//! Errors raised while scaffolding an app

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::name::MAX_NAME_LEN;

/// Why an app name was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Please provide an app name: create-rust-app <app_name>")]
    Missing,

    #[error("Hyphens are not allowed in app names. Use underscores instead.\nTry: {suggestion}")]
    Hyphen { suggestion: String },

    #[error("App name must start with a letter and use only letters, digits, underscores: {0}")]
    InvalidChars(String),

    #[error("App name must be {max} characters or less (got {0})", max = MAX_NAME_LEN)]
    TooLong(usize),
}

/// Errors specific to scaffolding
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] NameError),

    #[error("{0}")]
    Configuration(String),

    #[error("App {name} already exists: {}", .path.display())]
    Conflict { name: String, path: PathBuf },

    #[error("I/O error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
