//! In-memory cache with LRU eviction and lazy TTL expiry.
//!
//! Keys below a project (`project:{id}:...`) are tracked per project so that
//! `delete_pattern("project:{id}:*")` does not scan the whole store, and
//! deleting `project:{id}` drops everything derived from it.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use uuid::Uuid;

use reelscout_core::cache::{
    extract_project_id_from_key, extract_project_id_from_pattern, is_project_child_key,
    is_project_metadata_key, pattern_matches, Cache, Result,
};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|d| Instant::now() + d),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache shared behind `Arc<RwLock<_>>`.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    /// project_id -> child keys currently stored.
    tracking: Arc<RwLock<HashMap<Uuid, HashSet<String>>>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` values (at least one).
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            tracking: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored values, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    async fn untrack(&self, project_id: Uuid, keys: &[String]) {
        let mut tracking = self.tracking.write().await;
        if let Some(tracked) = tracking.get_mut(&project_id) {
            for key in keys {
                tracked.remove(key);
            }
            if tracked.is_empty() {
                tracking.remove(&project_id);
            }
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        {
            let mut store = self.store.write().await;
            store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        }

        if is_project_child_key(key) {
            if let Some(project_id) = extract_project_id_from_key(key) {
                self.tracking
                    .write()
                    .await
                    .entry(project_id)
                    .or_default()
                    .insert(key.to_string());
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let project_id = extract_project_id_from_key(key);

        match project_id {
            Some(project_id) if is_project_metadata_key(key) => {
                let children = self
                    .tracking
                    .write()
                    .await
                    .remove(&project_id)
                    .unwrap_or_default();
                let mut store = self.store.write().await;
                for child in &children {
                    store.pop(child);
                }
            }
            Some(project_id) if is_project_child_key(key) => {
                self.untrack(project_id, &[key.to_string()]).await;
            }
            _ => {}
        }

        self.store.write().await.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let Some(project_id) = extract_project_id_from_pattern(pattern) else {
            let mut store = self.store.write().await;
            let doomed: Vec<String> = store
                .iter()
                .filter(|(key, _)| pattern_matches(pattern, key))
                .map(|(key, _)| key.clone())
                .collect();
            for key in &doomed {
                store.pop(key);
            }
            tracing::trace!(pattern, removed = doomed.len(), "Cache pattern delete");
            return Ok(());
        };

        let doomed: Vec<String> = {
            let tracking = self.tracking.read().await;
            tracking
                .get(&project_id)
                .map(|keys| {
                    keys.iter()
                        .filter(|key| pattern_matches(pattern, key))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };

        if !doomed.is_empty() {
            {
                let mut store = self.store.write().await;
                for key in &doomed {
                    store.pop(key);
                }
            }
            self.untrack(project_id, &doomed).await;
        }

        Ok(())
    }
}
