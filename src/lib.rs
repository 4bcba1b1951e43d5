//! Memo Stores - Bounded LRU cache and splay tree memo backends
//!
//! Provides two interchangeable key-value stores, a fixed-capacity LRU cache
//! with predicate invalidation and a self-adjusting splay tree, plus the
//! range-sum and Fibonacci workloads that exercise them.

pub mod arena;
pub mod cache;
pub mod config;
pub mod error;
pub mod memo;
pub mod models;
pub mod splay;
pub mod tasks;
pub mod workloads;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use error::{Result, StoreError};
pub use memo::MemoStore;
pub use splay::SplayTree;
