//! Project API operations.

use reelscout_core::project::{CreateProjectRequest, Project, UpdateProjectRequest};
use reqwest::Method;
use uuid::Uuid;

use super::ReelscoutClient;
use crate::error::Result;

impl ReelscoutClient {
    /// List the tenant's projects.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self.request(Method::GET, "/api/projects")?.send().await?;
        self.handle_response(response, "projects").await
    }

    /// Create a new project.
    pub async fn create_project(&self, req: &CreateProjectRequest) -> Result<Project> {
        let response = self
            .request(Method::POST, "/api/projects")?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "project").await
    }

    /// Get project by ID.
    pub async fn get_project(&self, id: Uuid) -> Result<Project> {
        let response = self
            .request(Method::GET, &format!("/api/projects/{id}"))?
            .send()
            .await?;
        self.handle_response(response, &format!("project {id}"))
            .await
    }

    /// Update a project.
    pub async fn update_project(&self, id: Uuid, req: &UpdateProjectRequest) -> Result<Project> {
        let response = self
            .request(Method::PUT, &format!("/api/projects/{id}"))?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("project {id}"))
            .await
    }

    /// Delete a project with its locations and saved comparisons.
    pub async fn delete_project(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/projects/{id}"))?
            .send()
            .await?;
        self.handle_delete_response(response, &format!("project {id}"))
            .await
    }
}
