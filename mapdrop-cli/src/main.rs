//! mapdrop CLI - map-annotation service entry point
//!
//! Subcommands:
//! - `serve`: run the HTTP server (migrates on startup)
//! - `migrate`: run migrations and exit

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "mapdrop",
    author,
    version,
    about = "Backend for the anonymous map-annotation service",
    long_about = "Geotagged points with community voting and score-driven moderation. \
                  Points live for 12 hours on the map; enough downvotes hide them early."
)]
struct Cli {
    /// File containing environment variables
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Run database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Environment file first, so config loading sees it.
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    init_tracing()?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Migrate(args) => commands::migrate::run(args).await,
    }
}
