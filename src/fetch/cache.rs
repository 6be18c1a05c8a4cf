//! Time-bounded fetch cache.
//!
//! Successful page fetches are kept for a fixed time-to-live, up to a maximum
//! number of entries. Expired entries are dropped first when room is needed,
//! then the oldest live entry.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::types::PageFetchResult;

struct CacheEntry {
    inserted_at: Instant,
    value: PageFetchResult,
}

/// In-memory TTL cache keyed by URL, safe for concurrent use.
pub struct FetchCache {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FetchCache {
    /// Creates a cache. A capacity of 0 disables caching.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a clone of the cached result for `url`, if present and not expired.
    pub fn get(&self, url: &str) -> Option<PageFetchResult> {
        self.get_at(url, Instant::now())
    }

    /// Caches `value` under `url`.
    pub fn insert(&self, url: &str, value: PageFetchResult) {
        self.insert_at(url, value, Instant::now());
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get_at(&self, url: &str, now: Instant) -> Option<PageFetchResult> {
        let mut entries = self.lock();
        match entries.get(url) {
            Some(entry) if !self.is_expired(entry, now) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }
        entries.remove(url);
        None
    }

    pub(crate) fn insert_at(&self, url: &str, value: PageFetchResult, now: Instant) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if !entries.contains_key(url) && entries.len() >= self.capacity {
            entries.retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < self.ttl);
        }
        if !entries.contains_key(url) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                log::debug!("Evicting oldest cached fetch: {key}");
                entries.remove(&key);
            }
        }
        entries.insert(
            url.to_string(),
            CacheEntry {
                inserted_at: now,
                value,
            },
        );
    }

    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) >= self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave a half-written entry behind
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for FetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCache")
            .field("ttl", &self.ttl)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
