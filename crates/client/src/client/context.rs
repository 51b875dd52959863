//! Context API operations.

use collabctx_core::context::Context;

use super::CollabClient;
use crate::error::Result;

impl CollabClient {
    /// Fetch the context for the given identifier.
    ///
    /// Concurrent calls for the same identifier share a single GET request;
    /// once a call settles, the next one hits the network again.
    pub async fn get_context(&self, identifier: &str) -> Result<Context> {
        let context = self.fetcher.get(identifier).await?;
        Ok(context)
    }
}
