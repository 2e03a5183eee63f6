//! Query Result Cache
//!
//! Explicit key → result mapping with a per-cache time-to-live. Each entry records
//! the store revision it was computed from and is discarded as soon as the store
//! moves on, so a cached answer is never older than the TTL or than the data.

use crate::search::types::{ScoredResult, SearchPage};
use crate::tags::Tag;

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Entries beyond this count are dropped wholesale.
const MAX_ENTRIES: usize = 10_000;

struct CacheEntry<V> {
    value: V,
    revision: u64,
    inserted_at: Instant,
}

pub struct QueryCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value if it is fresh and belongs to `revision`.
    pub fn get(&self, key: &str, revision: u64) -> Option<V> {
        let fresh = self.entries.get(key).and_then(|entry| {
            let valid = entry.revision == revision && entry.inserted_at.elapsed() < self.ttl;
            valid.then(|| entry.value.clone())
        });

        if fresh.is_none() {
            self.entries.remove_if(key, |_, entry| {
                entry.revision != revision || entry.inserted_at.elapsed() >= self.ttl
            });
        }
        fresh
    }

    pub fn insert(&self, key: String, revision: u64, value: V) {
        if self.ttl.is_zero() {
            return;
        }
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.clear();
        }

        self.entries.insert(
            key,
            CacheEntry {
                value,
                revision,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Serves from cache or computes, stores and returns the value.
    pub fn get_or_compute<F>(&self, key: &str, revision: u64, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key, revision) {
            tracing::trace!("cache hit: {}", key);
            return value;
        }

        let value = compute();
        self.insert(key.to_string(), revision, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Time-to-live per cached operation.
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    pub search_ttl: Duration,
    pub related_ttl: Duration,
    pub trending_ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            search_ttl: Duration::from_secs(5 * 60),
            related_ttl: Duration::from_secs(10 * 60),
            trending_ttl: Duration::from_secs(15 * 60),
        }
    }
}

/// The caches shared by the HTTP handlers.
pub struct DiscoveryCaches {
    pub search: QueryCache<SearchPage>,
    pub related: QueryCache<Vec<ScoredResult>>,
    pub trending: QueryCache<Vec<Tag>>,
}

impl DiscoveryCaches {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            search: QueryCache::new(settings.search_ttl),
            related: QueryCache::new(settings.related_ttl),
            trending: QueryCache::new(settings.trending_ttl),
        }
    }
}

impl Default for DiscoveryCaches {
    fn default() -> Self {
        Self::new(CacheSettings::default())
    }
}
