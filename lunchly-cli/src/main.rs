//! lunchly CLI - restaurant customer and reservation manager
//!
//! Entry point for the `lunchly` binary:
//! - `serve`: run the server-rendered pages (applies migrations first)
//! - `migrate`: create the customers and reservations tables

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{migrate::MigrateArgs, run_migrate, run_serve, serve::ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lunchly",
    author,
    version,
    about = "Restaurant customer and reservation manager"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Apply database migrations and exit
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await?,
        Commands::Migrate(args) => run_migrate(args).await?,
    }

    Ok(())
}
