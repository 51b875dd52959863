//! HTTP client for the collab context API.

mod collabs;
mod context;
mod transport;

pub use transport::HttpTransport;

use std::sync::Arc;

use collabctx_core::fetch::ContextFetcher;

/// Default base URL of the collab service.
pub const DEFAULT_BASE_URL: &str = "https://services.humanbrainproject.eu/collab/v0";

/// HTTP client for the collab context API.
///
/// Context lookups go through an owned [`ContextFetcher`], so concurrent
/// calls for the same identifier share a single GET request.
#[derive(Clone)]
pub struct CollabClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    fetcher: ContextFetcher,
}

impl CollabClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::new();
        let transport = Arc::new(HttpTransport::new(client.clone(), base_url.clone(), None));
        Self {
            client,
            base_url,
            token: None,
            fetcher: ContextFetcher::new(transport),
        }
    }

    /// Attach a bearer token used for authenticated endpoints.
    ///
    /// Replaces the fetcher's transport; any in-flight fetches started
    /// before the call keep their original transport.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        let transport = Arc::new(HttpTransport::new(
            self.client.clone(),
            self.base_url.clone(),
            Some(token.clone()),
        ));
        self.token = Some(token);
        self.fetcher = ContextFetcher::new(transport);
        self
    }

    /// Create from environment (COLLABCTX_URL / COLLABCTX_TOKEN or defaults).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COLLABCTX_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let client = Self::new(base_url);
        match std::env::var("COLLABCTX_TOKEN") {
            Ok(token) if !token.is_empty() => client.with_token(token),
            _ => client,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
