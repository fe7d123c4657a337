//! depotd - bulk file operations over a managed directory, served over HTTP.
//!
//! Usage:
//!   depotd [PATH]                  Serve ./managed_files (or PATH)
//!   depotd --bind 0.0.0.0:8080     Bind a different address
//!   depotd --help                  Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use depot_api::AppState;
use depot_core::{FileSystem, ServerConfig};
use depot_ops::{FileManager, StdFileSystem, WordListNameGenerator};

#[derive(Parser)]
#[command(
    name = "depotd",
    version,
    about = "Serve bulk file operations over one managed directory",
    long_about = "depotd exposes a small HTTP API for browsing a managed \
                  directory: list its entries, select a subset, then copy, \
                  move, or delete the selection in bulk."
)]
struct Cli {
    /// Managed directory to serve (created if absent)
    #[arg(default_value = "managed_files")]
    path: PathBuf,

    /// Address to bind the HTTP listener to
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::builder()
        .root(cli.path)
        .bind(cli.bind)
        .build()
        .context("Invalid configuration")?;

    let fs = StdFileSystem::new();
    if config.create_root && !fs.exists(&config.root) {
        fs.create_dir_all(&config.root)
            .with_context(|| format!("Failed to create {}", config.root.display()))?;
    }

    let manager = FileManager::new(&config.root, fs, WordListNameGenerator::new())
        .context("Failed to open managed directory")?;

    tracing::info!(root = %config.root.display(), bind = %config.bind, "starting depotd");

    let state = AppState::new(manager);
    depot_api::serve(&config.bind, state)
        .await
        .context("Server error")?;

    Ok(())
}
