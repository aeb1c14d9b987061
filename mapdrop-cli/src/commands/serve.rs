//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use mapdrop_server::AppConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides MAPDROP_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::from_env();

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if args.cors_permissive {
        config.cors_permissive = true;
    }

    tracing::info!("Starting mapdrop server on {}", config.bind_addr);

    mapdrop_server::serve(config).await.context("Server error")
}
