//! Application state with repository-based storage.
//!
//! The shared state handed to every request handler: repository trait
//! objects (cache-aside decorators over the backend selected by feature
//! flags) and the enrichment service.

use std::sync::Arc;

use anyhow::Context;
use url::Url;

use reelscout_core::cache::Cache;
use reelscout_core::enrichment::EnrichmentProvider;
use reelscout_core::storage::{ComparisonRepository, LocationRepository, ProjectRepository};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::enrichment::{EnrichmentService, HttpEnrichmentProvider, MockEnrichmentProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Project repository (cached, wraps underlying storage).
    pub project_repo: Arc<dyn ProjectRepository>,
    /// Location repository (cached, wraps underlying storage).
    pub location_repo: Arc<dyn LocationRepository>,
    /// Saved comparisons, read straight from storage.
    pub comparison_repo: Arc<dyn ComparisonRepository>,
    pub enrichment: Arc<EnrichmentService>,
    /// Name of the compiled-in storage backend, for `/healthz`.
    pub storage_backend: &'static str,
}

/// Picks the HTTP gateway when one is configured, mock data otherwise.
fn enrichment_provider(config: &Config) -> anyhow::Result<Arc<dyn EnrichmentProvider>> {
    match &config.enrichment_base_url {
        Some(base_url) => {
            let url = Url::parse(base_url)
                .with_context(|| format!("Invalid ENRICHMENT_BASE_URL: {base_url}"))?;
            tracing::info!(base_url = %url, "Using HTTP enrichment gateway");
            let provider = HttpEnrichmentProvider::new(
                url,
                config.enrichment_api_key.clone(),
                config.enrichment_timeout(),
            )?;
            Ok(Arc::new(provider))
        }
        None => {
            tracing::warn!("ENRICHMENT_BASE_URL not set, serving mock enrichment data");
            Ok(Arc::new(MockEnrichmentProvider::new()))
        }
    }
}

impl AppState {
    fn build<R>(
        repository: Arc<R>,
        cache: Arc<MemoryCache>,
        provider: Arc<dyn EnrichmentProvider>,
        config: &Config,
        storage_backend: &'static str,
    ) -> Self
    where
        R: ProjectRepository + LocationRepository + ComparisonRepository + 'static,
    {
        use crate::storage::cached::{CachedLocationRepository, CachedProjectRepository};

        let enrichment_cache: Arc<dyn Cache> = cache.clone();
        let enrichment = Arc::new(EnrichmentService::new(
            provider,
            enrichment_cache,
            config.enrichment_cache_ttl(),
        ));

        Self {
            project_repo: Arc::new(CachedProjectRepository::new(
                repository.clone(),
                cache.clone(),
                config.cache_ttl(),
            )),
            location_repo: Arc::new(CachedLocationRepository::new(
                repository.clone(),
                cache,
                config.cache_ttl(),
            )),
            comparison_repo: repository,
            enrichment,
            storage_backend,
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let provider = enrichment_provider(config)?;

            Ok(Self::build(
                sqlite_repo,
                memory_cache,
                provider,
                config,
                "sqlite",
            ))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let provider = enrichment_provider(config)?;

            Ok(Self::build(
                inmemory_repo,
                memory_cache,
                provider,
                config,
                "inmemory",
            ))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
