//! collabctx_client - CLI client for the collab context API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::CollabClient;
pub use error::{ClientError, Result};
