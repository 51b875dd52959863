use async_trait::async_trait;

use super::Result;

/// Transport capability for retrieving a raw context resource.
///
/// Implementations normalize their native failures into [`FetchError`]
/// before returning, so callers never see a transport-specific error type.
///
/// [`FetchError`]: super::FetchError
#[async_trait]
pub trait ContextTransport: Send + Sync {
    /// Fetches the raw response body for the given context identifier.
    async fn fetch_context(&self, identifier: &str) -> Result<Vec<u8>>;
}
