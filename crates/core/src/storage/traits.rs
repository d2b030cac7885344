use async_trait::async_trait;
use uuid::Uuid;

use crate::comparison::Comparison;
use crate::location::Location;
use crate::project::{Project, TenantId};

use super::Result;

/// Repository for project operations.
///
/// Every read is scoped to a tenant. A project owned by another tenant is
/// reported exactly like a missing one.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Gets a project by its ID.
    async fn get_project(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Project>>;

    /// Lists all projects of a tenant, oldest first.
    async fn list_projects(&self, tenant_id: TenantId) -> Result<Vec<Project>>;

    /// Creates a new project.
    async fn create_project(&self, project: &Project) -> Result<()>;

    /// Updates an existing project.
    async fn update_project(&self, project: &Project) -> Result<()>;

    /// Deletes a project by its ID.
    async fn delete_project(&self, tenant_id: TenantId, id: Uuid) -> Result<()>;
}

/// Repository for scouted location operations.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Gets a location by its ID.
    async fn get_location(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Location>>;

    /// Lists the locations of a project, oldest first.
    async fn list_locations(&self, tenant_id: TenantId, project_id: Uuid)
        -> Result<Vec<Location>>;

    /// Creates a new location.
    async fn create_location(&self, location: &Location) -> Result<()>;

    /// Updates an existing location.
    async fn update_location(&self, location: &Location) -> Result<()>;

    /// Deletes a location by its ID.
    async fn delete_location(&self, tenant_id: TenantId, id: Uuid) -> Result<()>;

    /// Deletes every location of a project, returning how many were removed.
    async fn delete_project_locations(&self, tenant_id: TenantId, project_id: Uuid)
        -> Result<usize>;
}

/// Repository for saved comparison snapshots.
#[async_trait]
pub trait ComparisonRepository: Send + Sync {
    /// Gets a saved comparison by its ID.
    async fn get_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Comparison>>;

    /// Lists the saved comparisons of a project, newest first.
    async fn list_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<Vec<Comparison>>;

    /// Saves a comparison snapshot.
    async fn create_comparison(&self, comparison: &Comparison) -> Result<()>;

    /// Deletes a saved comparison by its ID.
    async fn delete_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<()>;

    /// Deletes every saved comparison of a project, returning how many were removed.
    async fn delete_project_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize>;
}
