//! Collab API operations.

use collabctx_core::context::Collab;

use super::CollabClient;
use crate::error::{ClientError, Result};

impl CollabClient {
    /// Get collab info by numeric ID.
    pub async fn get_collab(&self, id: u64) -> Result<Collab> {
        let mut request = self.client.get(self.url(&format!("/collabs/{}/", id)));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        // A body that is not valid JSON means the ID did not name a collab.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|_| ClientError::InvalidCollab(id.to_string()))
    }
}
