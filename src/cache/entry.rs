//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

// == Cache Entry ==
/// A stored payload together with the time it was written and its lifetime.
///
/// The payload is opaque to the cache; it is cloned out on reads and never
/// inspected.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub data: V,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Lifetime measured from `stored_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now_ms`.
    pub fn new(data: V, now_ms: u64, ttl: Duration) -> Self {
        Self {
            data,
            stored_at: now_ms,
            ttl,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    ///
    /// A clock that moved backwards yields an age of 0.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry whose age equals its TTL exactly is still
    /// live. It expires once the age is strictly greater than the TTL.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms(self.ttl)
    }
}

fn ttl_ms(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload", 1_000, Duration::from_secs(60));

        assert_eq!(entry.data, "payload");
        assert_eq!(entry.stored_at, 1_000);
        assert!(!entry.is_expired(1_000));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(1, 0, Duration::from_millis(100));

        assert!(!entry.is_expired(50));
        assert!(entry.is_expired(150));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(1, 0, Duration::from_millis(100));

        // Age equal to the TTL is still live
        assert!(!entry.is_expired(100));
        assert!(entry.is_expired(101));
    }

    #[test]
    fn test_zero_ttl_expires_after_any_elapsed_time() {
        let entry = CacheEntry::new(1, 500, Duration::ZERO);

        assert!(!entry.is_expired(500));
        assert!(entry.is_expired(501));
    }

    #[test]
    fn test_clock_moving_backwards_does_not_expire() {
        let entry = CacheEntry::new(1, 10_000, Duration::from_millis(10));
        assert_eq!(entry.age_ms(5_000), 0);
        assert!(!entry.is_expired(5_000));
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = CacheEntry::new(1, 0, Duration::MAX);
        assert!(!entry.is_expired(u64::MAX));
    }
}
