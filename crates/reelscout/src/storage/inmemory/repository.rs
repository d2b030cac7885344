//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use reelscout_core::comparison::Comparison;
use reelscout_core::location::Location;
use reelscout_core::project::{Project, TenantId};
use reelscout_core::storage::{
    ComparisonRepository, LocationRepository, ProjectRepository, RepositoryError, Result,
};

/// In-memory storage backend.
///
/// Deleting a project also removes its locations and saved comparisons, like
/// the foreign-key cascade of the SQLite schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
    locations: Arc<RwLock<HashMap<Uuid, Location>>>,
    comparisons: Arc<RwLock<HashMap<Uuid, Comparison>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRepository {
    async fn get_project(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(&id)
            .filter(|p| p.is_owned_by(tenant_id))
            .cloned())
    }

    async fn list_projects(&self, tenant_id: TenantId) -> Result<Vec<Project>> {
        let projects = self.projects.read().await;
        let mut owned: Vec<Project> = projects
            .values()
            .filter(|p| p.is_owned_by(tenant_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id) {
            return Err(RepositoryError::already_exists("Project", project.id));
        }
        projects.insert(project.id, project.clone());
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> Result<()> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&project.id) {
            Some(stored) if stored.is_owned_by(project.tenant_id) => {
                *stored = project.clone();
                Ok(())
            }
            _ => Err(RepositoryError::not_found("Project", project.id)),
        }
    }

    async fn delete_project(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        {
            let mut projects = self.projects.write().await;
            if !projects.get(&id).is_some_and(|p| p.is_owned_by(tenant_id)) {
                return Err(RepositoryError::not_found("Project", id));
            }
            projects.remove(&id);
        }
        self.locations
            .write()
            .await
            .retain(|_, l| l.project_id != id);
        self.comparisons
            .write()
            .await
            .retain(|_, c| c.project_id != id);
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepository {
    async fn get_location(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Location>> {
        let locations = self.locations.read().await;
        Ok(locations
            .get(&id)
            .filter(|l| l.is_owned_by(tenant_id))
            .cloned())
    }

    async fn list_locations(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<Vec<Location>> {
        let locations = self.locations.read().await;
        let mut listed: Vec<Location> = locations
            .values()
            .filter(|l| l.is_owned_by(tenant_id) && l.project_id == project_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn create_location(&self, location: &Location) -> Result<()> {
        let mut locations = self.locations.write().await;
        if locations.contains_key(&location.id) {
            return Err(RepositoryError::already_exists("Location", location.id));
        }
        locations.insert(location.id, location.clone());
        Ok(())
    }

    async fn update_location(&self, location: &Location) -> Result<()> {
        let mut locations = self.locations.write().await;
        match locations.get_mut(&location.id) {
            Some(stored) if stored.is_owned_by(location.tenant_id) => {
                *stored = location.clone();
                Ok(())
            }
            _ => Err(RepositoryError::not_found("Location", location.id)),
        }
    }

    async fn delete_location(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let mut locations = self.locations.write().await;
        if !locations.get(&id).is_some_and(|l| l.is_owned_by(tenant_id)) {
            return Err(RepositoryError::not_found("Location", id));
        }
        locations.remove(&id);
        Ok(())
    }

    async fn delete_project_locations(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize> {
        let mut locations = self.locations.write().await;
        let before = locations.len();
        locations.retain(|_, l| !(l.is_owned_by(tenant_id) && l.project_id == project_id));
        Ok(before - locations.len())
    }
}

#[async_trait]
impl ComparisonRepository for InMemoryRepository {
    async fn get_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Comparison>> {
        let comparisons = self.comparisons.read().await;
        Ok(comparisons
            .get(&id)
            .filter(|c| c.is_owned_by(tenant_id))
            .cloned())
    }

    async fn list_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<Vec<Comparison>> {
        let comparisons = self.comparisons.read().await;
        let mut listed: Vec<Comparison> = comparisons
            .values()
            .filter(|c| c.is_owned_by(tenant_id) && c.project_id == project_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn create_comparison(&self, comparison: &Comparison) -> Result<()> {
        let mut comparisons = self.comparisons.write().await;
        if comparisons.contains_key(&comparison.id) {
            return Err(RepositoryError::already_exists("Comparison", comparison.id));
        }
        comparisons.insert(comparison.id, comparison.clone());
        Ok(())
    }

    async fn delete_comparison(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let mut comparisons = self.comparisons.write().await;
        if !comparisons.get(&id).is_some_and(|c| c.is_owned_by(tenant_id)) {
            return Err(RepositoryError::not_found("Comparison", id));
        }
        comparisons.remove(&id);
        Ok(())
    }

    async fn delete_project_comparisons(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize> {
        let mut comparisons = self.comparisons.write().await;
        let before = comparisons.len();
        comparisons.retain(|_, c| !(c.is_owned_by(tenant_id) && c.project_id == project_id));
        Ok(before - comparisons.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelscout_core::comparison::{ComparisonResult, ScoringWeights};
    use reelscout_core::location::Coordinates;

    fn result_for(project_id: Uuid) -> ComparisonResult {
        ComparisonResult {
            project_id,
            weights: ScoringWeights::default(),
            ranking: Vec::new(),
            recommendation: None,
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_project_crud() {
        let repo = InMemoryRepository::new();
        let tenant = TenantId::new();
        let mut project = Project::new(tenant, "Dune Sea");

        repo.create_project(&project).await.unwrap();
        assert_eq!(
            repo.get_project(tenant, project.id).await.unwrap(),
            Some(project.clone())
        );

        project.name = "Dune Sea II".to_string();
        repo.update_project(&project).await.unwrap();
        assert_eq!(
            repo.get_project(tenant, project.id).await.unwrap().unwrap().name,
            "Dune Sea II"
        );

        repo.delete_project(tenant, project.id).await.unwrap();
        assert!(repo.get_project(tenant, project.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_project() {
        let repo = InMemoryRepository::new();
        let project = Project::new(TenantId::new(), "Twice");

        repo.create_project(&project).await.unwrap();
        let err = repo.create_project(&project).await.unwrap_err();

        assert!(matches!(err, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_other_tenant_sees_nothing() {
        let repo = InMemoryRepository::new();
        let owner = TenantId::new();
        let intruder = TenantId::new();
        let project = Project::new(owner, "Private");
        let location = Location::new(owner, project.id, "Loft", Coordinates::new(1.0, 1.0));
        repo.create_project(&project).await.unwrap();
        repo.create_location(&location).await.unwrap();

        assert!(repo.get_project(intruder, project.id).await.unwrap().is_none());
        assert!(repo.list_projects(intruder).await.unwrap().is_empty());
        assert!(repo.get_location(intruder, location.id).await.unwrap().is_none());
        assert!(repo
            .list_locations(intruder, project.id)
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .delete_project(intruder, project.id)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo
            .delete_location(intruder, location.id)
            .await
            .unwrap_err()
            .is_not_found());

        let mut hijacked = project.clone();
        hijacked.tenant_id = intruder;
        assert!(repo.update_project(&hijacked).await.unwrap_err().is_not_found());
        assert_eq!(
            repo.get_project(owner, project.id).await.unwrap().unwrap().tenant_id,
            owner
        );
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let repo = InMemoryRepository::new();
        let tenant = TenantId::new();
        let project = Project::new(tenant, "Cascade");
        let keep = Project::new(tenant, "Keep");
        repo.create_project(&project).await.unwrap();
        repo.create_project(&keep).await.unwrap();
        for (p, name) in [(&project, "A"), (&project, "B"), (&keep, "C")] {
            let location = Location::new(tenant, p.id, name, Coordinates::new(0.0, 0.0));
            repo.create_location(&location).await.unwrap();
        }
        repo.create_comparison(&Comparison::new(tenant, result_for(project.id), None))
            .await
            .unwrap();

        repo.delete_project(tenant, project.id).await.unwrap();

        assert!(repo.list_locations(tenant, project.id).await.unwrap().is_empty());
        assert!(repo
            .list_comparisons(tenant, project.id)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(repo.list_locations(tenant, keep.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_project_locations_counts() {
        let repo = InMemoryRepository::new();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        for name in ["A", "B", "C"] {
            repo.create_location(&Location::new(
                tenant,
                project_id,
                name,
                Coordinates::new(0.0, 0.0),
            ))
            .await
            .unwrap();
        }

        assert_eq!(
            repo.delete_project_locations(TenantId::new(), project_id)
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            repo.delete_project_locations(tenant, project_id).await.unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn test_comparisons_listed_newest_first() {
        let repo = InMemoryRepository::new();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        let mut older = Comparison::new(tenant, result_for(project_id), Some("first".into()));
        older.created_at = Utc::now() - chrono::Duration::hours(1);
        let newer = Comparison::new(tenant, result_for(project_id), Some("second".into()));
        repo.create_comparison(&older).await.unwrap();
        repo.create_comparison(&newer).await.unwrap();

        let listed = repo.list_comparisons(tenant, project_id).await.unwrap();

        assert_eq!(
            listed.iter().map(|c| c.label.as_deref()).collect::<Vec<_>>(),
            vec![Some("second"), Some("first")]
        );
        repo.delete_comparison(tenant, older.id).await.unwrap();
        assert_eq!(repo.list_comparisons(tenant, project_id).await.unwrap().len(), 1);
    }
}
