//! Comparison API operations.

use reelscout_core::comparison::{
    Comparison, ComparisonRequest, ComparisonResult, SaveComparisonRequest,
};
use reqwest::Method;
use uuid::Uuid;

use super::ReelscoutClient;
use crate::error::Result;

impl ReelscoutClient {
    /// Score and rank locations of a project without saving the result.
    pub async fn compare(
        &self,
        project_id: Uuid,
        req: &ComparisonRequest,
    ) -> Result<ComparisonResult> {
        let response = self
            .request(Method::POST, &format!("/api/projects/{project_id}/compare"))?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("project {project_id}"))
            .await
    }

    /// Run a comparison and keep the result as a snapshot.
    pub async fn save_comparison(
        &self,
        project_id: Uuid,
        req: &SaveComparisonRequest,
    ) -> Result<Comparison> {
        let response = self
            .request(Method::POST, &format!("/api/projects/{project_id}/comparisons"))?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("project {project_id}"))
            .await
    }

    /// List saved comparisons of a project, newest first.
    pub async fn list_comparisons(&self, project_id: Uuid) -> Result<Vec<Comparison>> {
        let response = self
            .request(Method::GET, &format!("/api/projects/{project_id}/comparisons"))?
            .send()
            .await?;
        self.handle_response(response, &format!("project {project_id}"))
            .await
    }

    /// Get a saved comparison by ID.
    pub async fn get_comparison(&self, id: Uuid) -> Result<Comparison> {
        let response = self
            .request(Method::GET, &format!("/api/comparisons/{id}"))?
            .send()
            .await?;
        self.handle_response(response, &format!("comparison {id}"))
            .await
    }

    /// Delete a saved comparison.
    pub async fn delete_comparison(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/comparisons/{id}"))?
            .send()
            .await?;
        self.handle_delete_response(response, &format!("comparison {id}"))
            .await
    }
}
