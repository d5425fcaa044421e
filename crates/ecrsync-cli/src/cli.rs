//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::sync::SyncArgs;

/// Sync AWS ECR repositories and images into the Port software catalog.
#[derive(Parser, Debug)]
#[command(name = "ecrsync")]
#[command(author, version = env!("ECRSYNC_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upsert every repository and image of the registry into the catalog
    ///
    /// AWS credentials are taken only from the flags or environment
    /// variables below: a static access key pair, optionally with a session
    /// token. Shared config profiles, SSO and instance or task role
    /// credentials are not resolved. Under a role, export temporary
    /// credentials first, for example with
    /// `aws configure export-credentials --format env`.
    Sync(Box<SyncArgs>),
}
