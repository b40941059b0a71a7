//! Query result cache using moka.
//!
//! Bounded, TTL-expiring memo table keyed by the exact query (plus top-k where
//! relevant). No key normalization: "Carbon" and "carbon" are separate entries.
//! A disabled cache stores nothing and always misses.

use std::hash::Hash;
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

use crate::config::CacheConfig;

pub struct QueryCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    name: &'static str,
    cache: Option<Cache<K, V>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, config: &CacheConfig) -> Self {
        let cache = config.enabled.then(|| {
            Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(Duration::from_secs(config.ttl_seconds))
                .build()
        });
        Self { name, cache }
    }

    pub fn disabled(name: &'static str) -> Self {
        Self { name, cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let cache = self.cache.as_ref()?;
        let hit = cache.get(key);
        debug!(cache = self.name, hit = hit.is_some(), "cache lookup");
        hit
    }

    pub fn insert(&self, key: K, value: V) {
        if let Some(cache) = &self.cache {
            cache.insert(key, value);
        }
    }

    /// Drop every entry. Later lookups miss immediately.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    /// Approximate entry count after flushing pending maintenance.
    pub fn len(&self) -> u64 {
        match &self.cache {
            Some(cache) => {
                cache.run_pending_tasks();
                cache.entry_count()
            }
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
