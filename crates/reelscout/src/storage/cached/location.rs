//! Cached location repository decorator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use reelscout_core::cache::{
    from_cache_bytes, location_key, project_locations_key, to_cache_bytes, Cache,
};
use reelscout_core::location::Location;
use reelscout_core::project::TenantId;
use reelscout_core::storage::{LocationRepository, Result};

/// Cached location repository decorator.
///
/// Single locations live under `location:{id}`, a project's list under
/// `project:{id}:locations`. Any write to a location drops both.
pub struct CachedLocationRepository<R, C>
where
    R: LocationRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedLocationRepository<R, C>
where
    R: LocationRepository,
    C: Cache,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Failed to invalidate location cache");
        }
    }
}

#[async_trait]
impl<R, C> LocationRepository for CachedLocationRepository<R, C>
where
    R: LocationRepository + 'static,
    C: Cache + 'static,
{
    async fn get_location(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Location>> {
        let cache_key = location_key(id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(location) = from_cache_bytes::<Location>(&bytes) {
                tracing::trace!(location_id = %id, "Cache hit for location");
                return Ok(location.is_owned_by(tenant_id).then_some(location));
            }
            tracing::warn!(location_id = %id, "Cache location deserialization failed");
        }

        tracing::trace!(location_id = %id, "Cache miss for location");
        let location = self.repository.get_location(tenant_id, id).await?;

        if let Some(ref l) = location {
            if let Ok(bytes) = to_cache_bytes(l) {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(location_id = %id, error = %err, "Failed to cache location");
                }
            }
        }

        Ok(location)
    }

    async fn list_locations(&self, tenant_id: TenantId, project_id: Uuid) -> Result<Vec<Location>> {
        let cache_key = project_locations_key(project_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(mut locations) = from_cache_bytes::<Vec<Location>>(&bytes) {
                tracing::trace!(project_id = %project_id, "Cache hit for project locations");
                locations.retain(|l| l.is_owned_by(tenant_id));
                return Ok(locations);
            }
        }

        tracing::trace!(project_id = %project_id, "Cache miss for project locations");
        let locations = self.repository.list_locations(tenant_id, project_id).await?;

        // An empty list may just mean another tenant asked.
        if !locations.is_empty() {
            if let Ok(bytes) = to_cache_bytes(&locations) {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(
                        project_id = %project_id,
                        error = %err,
                        "Failed to cache project locations"
                    );
                }
            }
        }

        Ok(locations)
    }

    async fn create_location(&self, location: &Location) -> Result<()> {
        self.repository.create_location(location).await?;

        self.invalidate(&project_locations_key(location.project_id))
            .await;

        tracing::debug!(
            location_id = %location.id,
            project_id = %location.project_id,
            name = %location.name,
            "Location created"
        );
        Ok(())
    }

    async fn update_location(&self, location: &Location) -> Result<()> {
        self.repository.update_location(location).await?;

        self.invalidate(&location_key(location.id)).await;
        self.invalidate(&project_locations_key(location.project_id))
            .await;

        tracing::debug!(location_id = %location.id, name = %location.name, "Location updated");
        Ok(())
    }

    async fn delete_location(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
        let existing = self.repository.get_location(tenant_id, id).await?;

        self.repository.delete_location(tenant_id, id).await?;

        self.invalidate(&location_key(id)).await;
        if let Some(location) = existing {
            self.invalidate(&project_locations_key(location.project_id))
                .await;
        }

        tracing::debug!(location_id = %id, "Location deleted");
        Ok(())
    }

    async fn delete_project_locations(
        &self,
        tenant_id: TenantId,
        project_id: Uuid,
    ) -> Result<usize> {
        let existing = self.repository.list_locations(tenant_id, project_id).await?;

        let removed = self
            .repository
            .delete_project_locations(tenant_id, project_id)
            .await?;

        for location in &existing {
            self.invalidate(&location_key(location.id)).await;
        }
        self.invalidate(&project_locations_key(project_id)).await;

        tracing::debug!(project_id = %project_id, removed, "Project locations deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use reelscout_core::location::Coordinates;

    use crate::storage::cached::test_support::MockCache;
    use crate::storage::InMemoryRepository;

    /// Counts reads that reach the backing store.
    struct CountingRepository {
        inner: InMemoryRepository,
        get_calls: AtomicUsize,
        list_calls: AtomicUsize,
    }

    impl CountingRepository {
        fn new() -> Self {
            Self {
                inner: InMemoryRepository::new(),
                get_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LocationRepository for CountingRepository {
        async fn get_location(&self, tenant_id: TenantId, id: Uuid) -> Result<Option<Location>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_location(tenant_id, id).await
        }

        async fn list_locations(
            &self,
            tenant_id: TenantId,
            project_id: Uuid,
        ) -> Result<Vec<Location>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_locations(tenant_id, project_id).await
        }

        async fn create_location(&self, location: &Location) -> Result<()> {
            self.inner.create_location(location).await
        }

        async fn update_location(&self, location: &Location) -> Result<()> {
            self.inner.update_location(location).await
        }

        async fn delete_location(&self, tenant_id: TenantId, id: Uuid) -> Result<()> {
            self.inner.delete_location(tenant_id, id).await
        }

        async fn delete_project_locations(
            &self,
            tenant_id: TenantId,
            project_id: Uuid,
        ) -> Result<usize> {
            self.inner
                .delete_project_locations(tenant_id, project_id)
                .await
        }
    }

    fn setup() -> (
        Arc<CountingRepository>,
        Arc<MockCache>,
        CachedLocationRepository<CountingRepository, MockCache>,
    ) {
        let repo = Arc::new(CountingRepository::new());
        let cache = Arc::new(MockCache::default());
        let cached =
            CachedLocationRepository::new(repo.clone(), cache.clone(), Duration::from_secs(300));
        (repo, cache, cached)
    }

    fn location(tenant: TenantId, project_id: Uuid, name: &str) -> Location {
        Location::new(tenant, project_id, name, Coordinates::new(48.85, 2.35))
    }

    #[tokio::test]
    async fn test_get_location_served_from_cache() {
        let (repo, _cache, cached) = setup();
        let tenant = TenantId::new();
        let loc = location(tenant, Uuid::new_v4(), "Quay");
        cached.create_location(&loc).await.unwrap();

        cached.get_location(tenant, loc.id).await.unwrap();
        let second = cached.get_location(tenant, loc.id).await.unwrap();

        assert_eq!(second, Some(loc));
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cached_location_hidden_from_other_tenant() {
        let (_repo, _cache, cached) = setup();
        let owner = TenantId::new();
        let project_id = Uuid::new_v4();
        let loc = location(owner, project_id, "Quay");
        cached.create_location(&loc).await.unwrap();
        cached.get_location(owner, loc.id).await.unwrap();
        cached.list_locations(owner, project_id).await.unwrap();

        let intruder = TenantId::new();

        assert!(cached.get_location(intruder, loc.id).await.unwrap().is_none());
        assert!(cached
            .list_locations(intruder, project_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_invalidates_project_list() {
        let (repo, cache, cached) = setup();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        cached
            .create_location(&location(tenant, project_id, "A"))
            .await
            .unwrap();
        cached.list_locations(tenant, project_id).await.unwrap();
        assert!(cache.contains(&project_locations_key(project_id)).await);

        cached
            .create_location(&location(tenant, project_id, "B"))
            .await
            .unwrap();

        assert!(!cache.contains(&project_locations_key(project_id)).await);
        assert_eq!(cached.list_locations(tenant, project_id).await.unwrap().len(), 2);
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_location_and_list() {
        let (_repo, cache, cached) = setup();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        let mut loc = location(tenant, project_id, "Old Mill");
        cached.create_location(&loc).await.unwrap();
        cached.get_location(tenant, loc.id).await.unwrap();
        cached.list_locations(tenant, project_id).await.unwrap();

        loc.name = "New Mill".to_string();
        cached.update_location(&loc).await.unwrap();

        assert!(!cache.contains(&location_key(loc.id)).await);
        assert!(!cache.contains(&project_locations_key(project_id)).await);
        assert_eq!(
            cached.get_location(tenant, loc.id).await.unwrap().unwrap().name,
            "New Mill"
        );
    }

    #[tokio::test]
    async fn test_delete_project_locations_drops_every_key() {
        let (_repo, cache, cached) = setup();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        let a = location(tenant, project_id, "A");
        let b = location(tenant, project_id, "B");
        for loc in [&a, &b] {
            cached.create_location(loc).await.unwrap();
            cached.get_location(tenant, loc.id).await.unwrap();
        }
        cached.list_locations(tenant, project_id).await.unwrap();

        let removed = cached
            .delete_project_locations(tenant, project_id)
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert!(cache.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_location_is_not_found() {
        let (_repo, _cache, cached) = setup();

        let err = cached
            .delete_location(TenantId::new(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
