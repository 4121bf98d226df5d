//! Content Cache - An in-process read-through cache
//!
//! Bounded, expiring, LRU-ordered storage for read-heavy content collections,
//! with substring invalidation and a small admin HTTP surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{MemoryCache, Resource, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
