//! Command implementations for the lunchly CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use lunchly_server::db::pool::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use lunchly_server::db::PgPool;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    #[arg(long, env = "LUNCHLY_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect using the URL from args or environment.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
