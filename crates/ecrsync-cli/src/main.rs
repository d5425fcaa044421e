//! ecrsync - Sync ECR inventory into the Port catalog.
//!
//! A thin wrapper over `ecrsync-core` that wires the ECR registry lister and
//! the Port catalog together from command-line or environment settings.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::sync;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables win.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Sync(args) => sync::run(*args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
