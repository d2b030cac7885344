//! Cached project repository decorator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use reelscout_core::cache::{
    from_cache_bytes, project_key, project_pattern, tenant_projects_key, to_cache_bytes, Cache,
};
use reelscout_core::project::{Project, TenantId};
use reelscout_core::storage::{ProjectRepository, Result};

/// Cached project repository decorator.
///
/// Caches single projects under `project:{id}` and each tenant's project list
/// under `tenant:{id}:projects`. Deleting a project also drops every
/// `project:{id}:*` key.
pub struct CachedProjectRepository<R, C>
where
    R: ProjectRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedProjectRepository<R, C>
where
    R: ProjectRepository,
    C: Cache,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    async fn store(&self, key: &str, bytes: Vec<u8>) {
        if let Err(err) = self.cache.set(key, &bytes, Some(self.ttl)).await {
            tracing::warn!(key, error = %err, "Failed to cache project data");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Failed to invalidate project cache");
        }
    }
}

#[async_trait]
impl<R, C> ProjectRepository for CachedProjectRepository<R, C>
where
    R: ProjectRepository + 'static,
    C: Cache + 'static,
{
    async fn get_project(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Project>> {
        let cache_key = project_key(id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            match from_cache_bytes::<Project>(&bytes) {
                Ok(project) => {
                    tracing::trace!(project_id = %id, "Cache hit for project");
                    return Ok(project.is_owned_by(tenant_id).then_some(project));
                }
                Err(err) => {
                    tracing::warn!(project_id = %id, error = %err, "Cached project is unreadable");
                }
            }
        }

        tracing::trace!(project_id = %id, "Cache miss for project");
        let project = self.repository.get_project(tenant_id, id).await?;

        if let Some(ref p) = project {
            if let Ok(bytes) = to_cache_bytes(p) {
                self.store(&cache_key, bytes).await;
            }
        }

        Ok(project)
    }

    async fn list_projects(&self, tenant_id: TenantId) -> Result<Vec<Project>> {
        let cache_key = tenant_projects_key(tenant_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(projects) = from_cache_bytes::<Vec<Project>>(&bytes) {
                tracing::trace!(tenant_id = %tenant_id, "Cache hit for project list");
                return Ok(projects);
            }
        }

        tracing::trace!(tenant_id = %tenant_id, "Cache miss for project list");
        let projects = self.repository.list_projects(tenant_id).await?;

        if let Ok(bytes) = to_cache_bytes(&projects) {
            self.store(&cache_key, bytes).await;
        }

        Ok(projects)
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        self.repository.create_project(project).await?;

        if let Ok(bytes) = to_cache_bytes(project) {
            self.store(&project_key(project.id), bytes).await;
        }
        self.invalidate(&tenant_projects_key(project.tenant_id)).await;

        tracing::debug!(project_id = %project.id, name = %project.name, "Project created");
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> Result<()> {
        self.repository.update_project(project).await?;

        self.invalidate(&project_key(project.id)).await;
        self.invalidate(&tenant_projects_key(project.tenant_id)).await;

        tracing::debug!(project_id = %project.id, name = %project.name, "Project updated");
        Ok(())
    }

    async fn delete_project(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        self.repository.delete_project(tenant_id, id).await?;

        self.invalidate(&project_key(id)).await;
        self.invalidate(&tenant_projects_key(tenant_id)).await;
        if let Err(err) = self.cache.delete_pattern(&project_pattern(id)).await {
            tracing::warn!(project_id = %id, error = %err, "Failed to invalidate project children");
        }

        tracing::debug!(project_id = %id, "Project deleted");
        Ok(())
    }
}
