//! Health check operations.

use serde::{Deserialize, Serialize};

use super::ReelscoutClient;
use crate::error::{ClientError, Result};

/// Body of `GET /healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub storage: String,
    pub enrichment_provider: String,
}

impl ReelscoutClient {
    /// Liveness probe.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }

    /// Storage backend and enrichment provider of the server.
    pub async fn healthz(&self) -> Result<Health> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "health").await
    }
}
