//! create-rust-app - Scaffold a new Rust app into the workspace
//!
//! Usage: create-rust-app <APP_NAME> [--root DIR] [--config FILE]

use anyhow::{Context, Result};
use clap::Parser;
use create_rust_app::ScaffoldReport;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-rust-app")]
#[command(about = "Create a new Rust app in the workspace from the shared template")]
#[command(version)]
#[command(after_help = r#"NAMING:
    App names must start with a letter and contain only letters, digits
    and underscores (max 50 characters). Use my_app, not my-app.

LAYOUT (override in forge.json):
    tools/rust_app_template   Template copied for every app
    apps/<APP_NAME>           Where the new app is created
    Cargo.toml                Workspace manifest the app is added to

EXAMPLES:
    create-rust-app user_services
    create-rust-app billing --root ~/src/monorepo
"#)]
struct Cli {
    /// Name of the app to create
    app_name: Option<String>,

    /// Workspace root (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Config file (default: <root>/forge.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let report = create_rust_app::run(&root, cli.config.as_deref(), cli.app_name.as_deref())?;

    print_summary(&report);

    Ok(())
}

fn print_summary(report: &ScaffoldReport) {
    let name = &report.name;

    println!("success: Created Rust app: {}", name);
    println!("Location: {}", report.member);
    println!(
        "Files: {} copied, {} with the app name substituted",
        report.files, report.substituted
    );
    if !report.registered {
        println!("Workspace manifest already lists {}", report.member);
    }
    println!();
    println!("Next steps:");
    println!("  nx build {}", name);
    println!("  nx test {}", name);
    println!("  nx run {}", name);
}
