//! Context CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Context lookup commands.
#[derive(Debug, Parser)]
pub struct ContextCommand {
    #[command(subcommand)]
    pub action: ContextAction,
}

/// Available context actions.
#[derive(Debug, Subcommand)]
pub enum ContextAction {
    /// Get a context by identifier.
    Get {
        /// Context identifier (UUID).
        id: Uuid,
    },
}
