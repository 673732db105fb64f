//! Forge Core - Shared workspace layout for the forge tools
//!
//! A monorepo keeps its Rust apps under one Cargo workspace. Every tool that
//! touches that layout agrees on where templates live, where apps go, and
//! which manifest lists the members.

pub mod config;
pub mod paths;

pub use config::ForgeConfig;
pub use paths::WorkspacePaths;
