//! HTTP server command
//!
//! Runs the lunchly pages on a single address, applying migrations first.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use lunchly_server::db::migrations;
use lunchly_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LUNCHLY_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Skip schema migrations on startup
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting lunchly server on {}", args.bind);

    let pool = args.db.connect().await?;

    if !args.no_migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(pool.clone(), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
