//! # post-store
//!
//! CLI for exercising the syncstore engine against the JSONPlaceholder
//! posts API, with a JSON file as the durable store.
//!
//! ## Commands
//!
//! - `refresh`: fetch the full collection and render the cache
//! - `get`: fetch a single post by id and render the cache
//! - `show`: render the cached posts without touching the network
//!
//! ## Example
//!
//! ```bash
//! # First run hits the network and persists the posts
//! post-store refresh
//!
//! # Renders from the durable cache, no network
//! post-store show
//!
//! # Refresh a single post
//! post-store get 7
//!
//! # Demo without network access
//! post-store --mock refresh
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// CLI for exercising the syncstore engine.
#[derive(Parser, Debug)]
#[command(name = "post-store")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the durable post store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use the mock loader instead of the real HTTP API (for testing/demo)
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the full post collection and render the cache
    Refresh,

    /// Fetch a single post by id and render the cache
    Get {
        /// Post identifier
        id: u64,
    },

    /// Render the cached posts without touching the network
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let data_dir = commands::resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Commands::Refresh => commands::refresh::run(&data_dir, cli.mock).await,
        Commands::Get { id } => commands::get::run(&data_dir, cli.mock, id).await,
        Commands::Show => commands::show::run(&data_dir, cli.mock).await,
    }
}
