//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and
//! pattern-based invalidation, plus the read-through handle data-access code
//! goes through.

mod clock;
mod entry;
pub mod keys;
mod lru;
mod shared;
mod stats;
mod store;
pub mod ttl;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use keys::Resource;
pub use lru::LruTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::MemoryCache;
pub use ttl::TtlPreset;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_CAPACITY: usize = 200;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
