//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, LruTracker, SystemClock, DEFAULT_CAPACITY};

// == Memory Cache ==
/// Bounded key/value store with per-entry TTL and LRU eviction.
///
/// None of the operations can fail. Expired entries are dropped lazily when a
/// `get` finds them, or in bulk by [`MemoryCache::purge_expired`].
#[derive(Debug)]
pub struct MemoryCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    clock: C,
}

impl<V: Clone> MemoryCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries, using system time.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, SystemClock)
    }
}

impl<V: Clone> Default for MemoryCache<V, SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V: Clone, C: Clock> MemoryCache<V, C> {
    /// Creates a cache reading time from `clock`.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            clock,
        }
    }

    // == Get ==
    /// Retrieves a live value by key and marks it most recently used.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(now) {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        let value = entry.data.clone();
        self.lru.touch(key);
        self.stats.record_hit();
        Some(value)
    }

    // == Set ==
    /// Stores a value under `key` for `ttl`.
    ///
    /// Overwriting an existing key replaces its value, timestamp and TTL
    /// without counting against capacity. A new key arriving at a full cache
    /// first evicts the least recently used entry. Either way the key ends up
    /// most recently used.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        self.lru.touch(&key);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.remove_entry(key);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes every entry. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.record_invalidations(removed);
        self.stats.set_total_entries(0);
        removed
    }

    // == Invalidate Pattern ==
    /// Removes every entry whose key contains `pattern` as a substring.
    ///
    /// An empty pattern matches every key. Returns the number removed.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.contains(pattern))
            .cloned()
            .collect();

        for key in &matching {
            self.remove_entry(key);
        }

        let removed = matching.len();
        self.stats.record_invalidations(removed);
        self.stats.set_total_entries(self.entries.len());
        debug!(pattern, removed, "invalidated cache entries");
        removed
    }

    // == Purge Expired ==
    /// Removes all expired entries without touching recency of live ones.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }

        let removed = expired.len();
        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Contains Key ==
    /// Checks whether `key` is stored, expired or not. Does not bump recency.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Keys ==
    /// Stored keys from least to most recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lru.iter().map(str::to_string).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        self.lru.remove(key);
        self.entries.remove(key).is_some()
    }
}
