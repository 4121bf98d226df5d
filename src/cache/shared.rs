//! Shared Cache Handle
//!
//! Clonable handle around a single [`MemoryCache`]. This is what the
//! composition root builds once and hands to every data-access function and
//! request handler.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::cache::{CacheStats, Clock, MemoryCache, Resource, SystemClock};

type InFlight = Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>;

// == Shared Cache ==
/// Thread-safe, clonable access to one process-wide cache.
///
/// Values are stored and handed back exactly as given; the admin API keeps
/// JSON documents (`V = serde_json::Value`), data-access code may cache any
/// clonable type.
///
/// All operations take the store's write lock, `get` included, since a hit
/// moves the entry to the most recently used position. The lock is never held
/// across a producer call.
#[derive(Debug)]
pub struct SharedCache<V = Value, C = SystemClock> {
    store: Arc<RwLock<MemoryCache<V, C>>>,
    /// Per-key gates used by `get_or_set_coalesced`
    in_flight: InFlight,
}

impl<V, C> Clone for SharedCache<V, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<V: Clone> SharedCache<V, SystemClock> {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self::from_store(MemoryCache::new(capacity))
    }
}

impl<V: Clone, C: Clock> SharedCache<V, C> {
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self::from_store(MemoryCache::with_clock(capacity, clock))
    }

    pub fn from_store(store: MemoryCache<V, C>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // == Get / Set ==
    /// Returns a clone of the live value for `key`.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    /// Stores `value` under `key` for `ttl`.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.store.write().await.set(key, value, ttl);
    }

    // == Removal ==
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    pub async fn clear(&self) -> usize {
        self.store.write().await.clear()
    }

    /// Removes every entry whose key contains `pattern`.
    pub async fn invalidate_pattern(&self, pattern: &str) -> usize {
        self.store.write().await.invalidate_pattern(pattern)
    }

    /// Drops every cached variant of `resource` after a write to it.
    pub async fn invalidate_resource(&self, resource: Resource) -> usize {
        self.invalidate_pattern(&resource.prefix()).await
    }

    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }

    // == Inspection ==
    pub async fn size(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn capacity(&self) -> usize {
        self.store.read().await.capacity()
    }

    /// Stored keys from least to most recently used.
    pub async fn keys(&self) -> Vec<String> {
        self.store.read().await.keys()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Read-Through ==
    /// Returns the cached value for `key`, or runs `producer` and caches its
    /// result for `ttl`.
    ///
    /// A producer error is returned as-is and nothing is stored, so the next
    /// call runs the producer again. Concurrent misses on the same key are not
    /// coalesced: each caller runs its own producer and the last store wins.
    /// Use [`SharedCache::get_or_set_coalesced`] to run one producer per cold
    /// key instead.
    pub async fn get_or_set<E, F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Duration,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(hit) = self.get(key).await {
            return Ok(hit);
        }
        self.produce_and_store(key, producer, ttl).await
    }

    /// Like [`SharedCache::get_or_set`], but callers missing on the same key
    /// queue behind one another and re-check the cache before producing.
    ///
    /// After a successful producer the waiters are served from the cache. If
    /// it fails, the next waiter in line runs its own producer.
    pub async fn get_or_set_coalesced<E, F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Duration,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(hit) = self.get(key).await {
            return Ok(hit);
        }

        let gate = {
            let mut in_flight = self.in_flight.lock().await;
            Arc::clone(in_flight.entry(key.to_string()).or_default())
        };

        let result = {
            let _turn = gate.lock().await;
            match self.get(key).await {
                Some(hit) => Ok(hit),
                None => self.produce_and_store(key, producer, ttl).await,
            }
        };

        self.release_gate(key, &gate).await;
        result
    }

    async fn produce_and_store<E, F, Fut>(
        &self,
        key: &str,
        producer: F,
        ttl: Duration,
    ) -> std::result::Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        debug!(key, "cache miss, loading from source");
        let produced = producer().await?;
        self.set(key, produced.clone(), ttl).await;
        Ok(produced)
    }

    /// Forgets the gate for `key` once nobody else is queued on it.
    async fn release_gate(&self, key: &str, gate: &Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        // One reference in the map, one held by this caller
        let idle = in_flight
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, gate) && Arc::strong_count(gate) == 2);
        if idle {
            in_flight.remove(key);
        }
    }
}
