//! In-memory key-value store using the moka crate.
//!
//! Used for tests and single-node development where Redis is not running.
//! moka evicts on capacity; per-entry TTLs are tracked in a dashmap sidecar
//! and checked on every read, so callers never observe an expired entry.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use moka::future::Cache;

use cuedeck_core::config::store::MemoryStoreConfig;
use cuedeck_core::result::AppResult;
use cuedeck_core::traits::kv::KvStore;

/// In-memory key-value store provider.
#[derive(Debug, Clone)]
pub struct MemoryKvStore {
    /// The underlying moka cache.
    cache: Cache<String, String>,
    /// Expiry deadlines for keys set with a TTL.
    deadlines: std::sync::Arc<DashMap<String, Instant>>,
}

impl MemoryKvStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();
        Self {
            cache,
            deadlines: std::sync::Arc::new(DashMap::new()),
        }
    }

    /// Remove the entry if its deadline has passed. Returns true if expired.
    async fn evict_if_expired(&self, key: &str) -> bool {
        let expired = self
            .deadlines
            .get(key)
            .map(|deadline| *deadline <= Instant::now())
            .unwrap_or(false);
        if expired {
            self.cache.remove(key).await;
            self.deadlines.remove(key);
        }
        expired
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.evict_if_expired(key).await {
            return Ok(None);
        }
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.deadlines.remove(key);
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        self.deadlines.insert(key.to_string(), Instant::now() + ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        self.deadlines.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        if self.evict_if_expired(key).await {
            return Ok(false);
        }
        Ok(self.cache.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
