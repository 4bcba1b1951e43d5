//! Cache Module
//!
//! Bounded in-memory caching with LRU eviction, predicate invalidation and
//! hit/miss accounting.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::LruCache;
