//! Cache Store Module
//!
//! Bounded LRU cache combining a `HashMap` index with an arena-backed
//! recency list.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::arena::SlotId;
use crate::cache::{CacheStats, RecencyList};
use crate::error::{Result, StoreError};

// == LRU Cache ==
/// Fixed-capacity key-value store that evicts the least recently used entry.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to recency-list handle
    index: HashMap<K, SlotId>,
    /// Entries ordered LRU (head) to MRU (tail)
    order: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity(capacity));
        }
        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value and marks `key` as most recently used.
    ///
    /// Counts a hit when the key is present and a miss otherwise.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.index.get(key) {
            Some(&id) => {
                self.stats.record_hit();
                self.order.move_to_back(id);
                self.order.value(id)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Reads a value without touching recency or statistics.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|&id| self.order.value(id))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Put ==
    /// Inserts or overwrites an entry and marks it most recently used.
    ///
    /// Evicts least recently used entries until the cache is back within
    /// capacity.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(slot) = self.order.value_mut(id) {
                *slot = value;
            }
            self.order.move_to_back(id);
        } else {
            let id = self.order.push_back(key.clone(), value);
            self.index.insert(key, id);
        }
        self.evict_to_capacity();
    }

    // == Remove ==
    /// Removes a single entry, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.order.remove(id).map(|(_, value)| value)
    }

    // == Remove Matching ==
    /// Removes every entry whose key satisfies `predicate`.
    ///
    /// The predicate sees a snapshot of the keys taken before any removal.
    /// Hit and miss counters are not affected. Returns the number removed.
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let doomed: Vec<SlotId> = self
            .order
            .iter()
            .filter(|(_, key, _)| predicate(*key))
            .map(|(id, _, _)| id)
            .collect();

        let count = doomed.len();
        for id in doomed {
            if let Some((key, _)) = self.order.remove(id) {
                self.index.remove(&key);
            }
        }

        if count > 0 {
            debug!(removed = count, remaining = self.len(), "invalidated cache entries");
        }
        count
    }

    // == Reset Capacity ==
    /// Sets a new capacity, evicting least recently used entries as needed.
    ///
    /// A capacity of zero drains the cache; later puts are evicted immediately
    /// until capacity is raised again.
    pub fn reset_capacity(&mut self, new_capacity: usize) {
        debug!(
            old = self.capacity,
            new = new_capacity,
            len = self.len(),
            "resetting cache capacity"
        );
        self.capacity = new_capacity;
        self.evict_to_capacity();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    // == Clear ==
    /// Drops every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(|(_, key, _)| key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_to_capacity(&mut self) {
        while self.order.len() > self.capacity {
            match self.order.pop_front() {
                Some((key, _)) => {
                    self.index.remove(&key);
                    self.stats.record_eviction();
                }
                None => break,
            }
        }
    }
}
