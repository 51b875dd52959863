//! reqwest-backed transport for the context fetcher.

use async_trait::async_trait;
use collabctx_core::fetch::{ContextTransport, FetchError, Result};

/// Transport issuing GET requests against the collab service.
///
/// Failures are normalized into [`FetchError`] before crossing the trait
/// seam, so they can travel through the fetcher's shared in-flight future.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// Create a transport over an existing reqwest client.
    pub fn new(client: reqwest::Client, base_url: String, token: Option<String>) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// URL of a context resource. The service requires the trailing slash.
    fn context_url(&self, identifier: &str) -> String {
        format!("{}/collab/context/{}/", self.base_url, identifier)
    }
}

#[async_trait]
impl ContextTransport for HttpTransport {
    async fn fetch_context(&self, identifier: &str) -> Result<Vec<u8>> {
        let url = self.context_url(identifier);
        tracing::debug!(%url, "fetching context");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
