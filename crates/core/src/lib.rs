//! collabctx_core - Core types and the deduplicating context fetcher.

pub mod context;
pub mod fetch;

pub use context::{Collab, Context};
pub use fetch::{ContextFetcher, ContextTransport, FetchError};
