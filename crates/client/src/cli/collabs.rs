//! Collab CLI commands.

use clap::{Parser, Subcommand};

/// Collab lookup commands.
#[derive(Debug, Parser)]
pub struct CollabsCommand {
    #[command(subcommand)]
    pub action: CollabsAction,
}

/// Available collab actions.
#[derive(Debug, Subcommand)]
pub enum CollabsAction {
    /// Get collab info by ID.
    Get {
        /// Collab ID.
        id: u64,
    },
}
