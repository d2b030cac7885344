//! Cached repository decorators.
//!
//! Cache-aside over any repository backend:
//!
//! - **Reads**: check the cache, on miss fetch from the repository and populate
//! - **Writes**: persist to the repository, then invalidate affected keys
//!
//! Cache failures are logged and never fail the operation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let projects = CachedProjectRepository::new(repo, cache, Duration::from_secs(300));
//! ```

mod location;
mod project;

pub use location::CachedLocationRepository;
pub use project::CachedProjectRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use reelscout_core::cache::{pattern_matches, Cache, Result as CacheResult};

    /// Plain map cache without TTL or eviction.
    #[derive(Default)]
    pub struct MockCache {
        pub store: RwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockCache {
        pub async fn contains(&self, key: &str) -> bool {
            self.store.read().await.contains_key(key)
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.store.write().await.remove(key);
            Ok(())
        }

        async fn delete_pattern(&self, pattern: &str) -> CacheResult<()> {
            self.store
                .write()
                .await
                .retain(|key, _| !pattern_matches(pattern, key));
            Ok(())
        }
    }
}
