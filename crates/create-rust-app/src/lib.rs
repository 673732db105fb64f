//! create-rust-app - Scaffold a new Rust app into the workspace
//!
//! Copies the shared app template to `apps/<name>`, swaps the template's
//! placeholder name for the new one, and lists the app as a workspace member.

pub mod copier;
pub mod error;
pub mod manifest;
pub mod name;
pub mod placeholder;
pub mod scaffold;

pub use error::{NameError, ScaffoldError};
pub use name::AppName;
pub use scaffold::{run, ScaffoldReport, Scaffolder};
