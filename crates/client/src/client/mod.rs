//! HTTP client for the reelscout API.

pub mod comparisons;
pub mod health;
pub mod locations;
pub mod projects;

use reelscout_core::project::TenantId;
use reqwest::{Method, RequestBuilder, StatusCode};

use crate::error::{ClientError, Result};

/// Header carrying the caller's tenant.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// HTTP client for the reelscout API.
#[derive(Debug, Clone)]
pub struct ReelscoutClient {
    client: reqwest::Client,
    base_url: String,
    tenant_id: Option<TenantId>,
}

impl ReelscoutClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tenant_id: None,
        }
    }

    /// Create from environment (REELSCOUT_URL and REELSCOUT_TENANT).
    pub fn from_env() -> Self {
        let base_url = std::env::var("REELSCOUT_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let tenant = std::env::var("REELSCOUT_TENANT")
            .ok()
            .and_then(|raw| raw.parse().ok());
        Self::new(base_url).with_tenant(tenant)
    }

    /// Act on behalf of a tenant.
    pub fn with_tenant(mut self, tenant_id: Option<TenantId>) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        self.tenant_id
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a tenant-scoped API request.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let tenant_id = self.tenant_id.ok_or(ClientError::MissingTenant)?;
        Ok(self
            .client
            .request(method, self.url(path))
            .header(TENANT_HEADER, tenant_id.to_string()))
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from(response, resource).await)
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response, resource).await)
        }
    }
}

async fn error_from(response: reqwest::Response, resource: &str) -> ClientError {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return ClientError::NotFound {
            resource: resource.to_string(),
        };
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError {
        status: status.as_u16(),
        message,
    }
}
