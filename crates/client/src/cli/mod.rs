//! CLI command definitions.

pub mod collabs;
pub mod context;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the collab context API.
#[derive(Debug, Parser)]
#[command(name = "collabctx")]
#[command(about = "CLI client for the collab context API", long_about = None)]
pub struct Cli {
    /// Collab service base URL.
    #[arg(long, env = "COLLABCTX_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token for authenticated endpoints.
    #[arg(long, env = "COLLABCTX_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Context lookups.
    Context(context::ContextCommand),
    /// Collab lookups.
    Collabs(collabs::CollabsCommand),
}
