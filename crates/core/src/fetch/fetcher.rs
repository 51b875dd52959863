//! Deduplicating context fetcher.
//!
//! Concurrent fetches for the same identifier are coalesced into a single
//! transport call through a registry of shared in-flight futures. The
//! registry entry is removed when the fetch settles, success or failure,
//! so a later call for the same identifier hits the network again instead
//! of replaying a stale result.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use tokio::sync::Mutex;

use crate::context::Context;

use super::{ContextTransport, FetchError, Result};

type ParseFn = dyn Fn(&[u8]) -> Result<Context> + Send + Sync;
type SharedFetch = Shared<BoxFuture<'static, Result<Context>>>;

/// Fetches context resources, deduplicating concurrent requests.
///
/// The fetcher owns its pending-request registry; cloning it shares the
/// registry, so clones still coalesce with each other.
#[derive(Clone)]
pub struct ContextFetcher {
    transport: Arc<dyn ContextTransport>,
    parser: Arc<ParseFn>,
    pending: Arc<Mutex<HashMap<String, SharedFetch>>>,
}

impl ContextFetcher {
    /// Creates a fetcher over the given transport with the default
    /// serde_json parser.
    pub fn new(transport: Arc<dyn ContextTransport>) -> Self {
        Self::with_parser(transport, |body| {
            serde_json::from_slice(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
        })
    }

    /// Creates a fetcher with a custom response-to-record parser.
    pub fn with_parser<P>(transport: Arc<dyn ContextTransport>, parser: P) -> Self
    where
        P: Fn(&[u8]) -> Result<Context> + Send + Sync + 'static,
    {
        Self {
            transport,
            parser: Arc::new(parser),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Fetches the context for `identifier`, coalescing concurrent calls.
    ///
    /// N overlapping calls for the same identifier issue exactly one
    /// transport call and all observe the same resolution or rejection.
    /// A blank identifier fails immediately without touching the registry
    /// or the transport.
    pub async fn get(&self, identifier: &str) -> Result<Context> {
        if identifier.trim().is_empty() {
            return Err(FetchError::MissingIdentifier);
        }

        // Check-and-insert happens under one lock acquisition, so two
        // callers can never race a second entry into the registry.
        let fetch = {
            let mut pending = self.pending.lock().await;
            match pending.get(identifier) {
                Some(inflight) => {
                    tracing::debug!(identifier, "joining in-flight context fetch");
                    inflight.clone()
                }
                None => {
                    let fetch = self.start_fetch(identifier.to_string());
                    pending.insert(identifier.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Builds the shared future performing one transport call.
    ///
    /// The registry entry is removed as soon as the transport settles,
    /// before the result reaches any waiter.
    fn start_fetch(&self, identifier: String) -> SharedFetch {
        let transport = Arc::clone(&self.transport);
        let parser = Arc::clone(&self.parser);
        let pending = Arc::clone(&self.pending);

        async move {
            let outcome = transport.fetch_context(&identifier).await;
            pending.lock().await.remove(&identifier);
            let body = outcome?;
            parser(&body)
        }
        .boxed()
        .shared()
    }
}
