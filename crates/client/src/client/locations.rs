//! Location API operations.

use reelscout_core::enrichment::LocationEnrichment;
use reelscout_core::location::{
    CreateLocationRequest, ListLocationsQuery, Location, UpdateLocationRequest,
};
use reqwest::Method;
use uuid::Uuid;

use super::ReelscoutClient;
use crate::error::Result;

impl ReelscoutClient {
    /// List a project's locations.
    pub async fn list_locations(
        &self,
        project_id: Uuid,
        query: &ListLocationsQuery,
    ) -> Result<Vec<Location>> {
        let response = self
            .request(Method::GET, &format!("/api/projects/{project_id}/locations"))?
            .query(query)
            .send()
            .await?;
        self.handle_response(response, &format!("project {project_id}"))
            .await
    }

    /// Add a scouted location to a project.
    pub async fn create_location(
        &self,
        project_id: Uuid,
        req: &CreateLocationRequest,
    ) -> Result<Location> {
        let response = self
            .request(Method::POST, &format!("/api/projects/{project_id}/locations"))?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("project {project_id}"))
            .await
    }

    /// Get location by ID.
    pub async fn get_location(&self, id: Uuid) -> Result<Location> {
        let response = self
            .request(Method::GET, &format!("/api/locations/{id}"))?
            .send()
            .await?;
        self.handle_response(response, &format!("location {id}"))
            .await
    }

    /// Update a location.
    pub async fn update_location(
        &self,
        id: Uuid,
        req: &UpdateLocationRequest,
    ) -> Result<Location> {
        let response = self
            .request(Method::PUT, &format!("/api/locations/{id}"))?
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("location {id}"))
            .await
    }

    /// Delete location by ID.
    pub async fn delete_location(&self, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/locations/{id}"))?
            .send()
            .await?;
        self.handle_delete_response(response, &format!("location {id}"))
            .await
    }

    /// Fetch hotels, transit, weather and route data for a location.
    pub async fn get_enrichment(&self, id: Uuid, refresh: bool) -> Result<LocationEnrichment> {
        let response = self
            .request(Method::GET, &format!("/api/locations/{id}/enrichment"))?
            .query(&[("refresh", refresh)])
            .send()
            .await?;
        self.handle_response(response, &format!("location {id}"))
            .await
    }
}
