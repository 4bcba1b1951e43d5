//! Range-Sum Query Processor
//!
//! Answers inclusive range sums over an array, optionally through an
//! [`LruCache`] keyed by `(left, right)`. Point updates invalidate every
//! cached range that covers the updated index.

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheStats, LruCache};
use crate::error::{Result, StoreError};

// == Query ==
/// One step of a query workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Query {
    /// Inclusive sum over `left..=right`
    Range { left: usize, right: usize },
    /// Overwrite the element at `index`
    Update { index: usize, value: i64 },
}

// == Range Sum Processor ==
/// Array plus a bounded cache of previously computed range sums.
#[derive(Debug)]
pub struct RangeSumProcessor {
    data: Vec<i64>,
    cache: LruCache<(usize, usize), i64>,
}

impl RangeSumProcessor {
    // == Constructor ==
    /// Wraps `data` with a range cache of the given capacity.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidCapacity` when `capacity` is zero.
    pub fn new(data: Vec<i64>, capacity: usize) -> Result<Self> {
        Ok(Self {
            data,
            cache: LruCache::new(capacity)?,
        })
    }

    // == Uncached Operations ==
    /// Sums `data[left..=right]` directly.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64> {
        self.check_range(left, right)?;
        self.sum_checked(left, right)
    }

    /// Overwrites `data[index]` without touching the cache.
    ///
    /// Cached sums covering `index` become stale; mixing this with the
    /// cached operations is the caller's responsibility.
    pub fn update(&mut self, index: usize, value: i64) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    // == Cached Operations ==
    /// Sums `data[left..=right]`, serving repeats from the cache.
    pub fn range_sum_cached(&mut self, left: usize, right: usize) -> Result<i64> {
        self.check_range(left, right)?;
        if let Some(&sum) = self.cache.get(&(left, right)) {
            return Ok(sum);
        }
        let sum = self.sum_checked(left, right)?;
        self.cache.put((left, right), sum);
        Ok(sum)
    }

    /// Overwrites `data[index]` and drops every cached range containing it.
    pub fn update_cached(&mut self, index: usize, value: i64) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        let dropped = self
            .cache
            .remove_matching(|&(left, right)| left <= index && index <= right);
        debug!(index, dropped, "update invalidated cached ranges");
        Ok(())
    }

    // == Replay ==
    /// Applies one query, returning the sum for range queries.
    pub fn apply(&mut self, query: Query, use_cache: bool) -> Result<Option<i64>> {
        match (query, use_cache) {
            (Query::Range { left, right }, true) => self.range_sum_cached(left, right).map(Some),
            (Query::Range { left, right }, false) => self.range_sum(left, right).map(Some),
            (Query::Update { index, value }, true) => self.update_cached(index, value).map(|_| None),
            (Query::Update { index, value }, false) => self.update(index, value).map(|_| None),
        }
    }

    // == Accessors ==
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &LruCache<(usize, usize), i64> {
        &self.cache
    }

    /// Changes the range cache capacity, evicting oldest ranges as needed.
    pub fn reset_cache_capacity(&mut self, capacity: usize) {
        self.cache.reset_capacity(capacity);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sums an already validated range, failing instead of wrapping.
    ///
    /// Accumulates in i128 so only the final total has to fit in an i64.
    fn sum_checked(&self, left: usize, right: usize) -> Result<i64> {
        let total: i128 = self.data[left..=right].iter().map(|&x| i128::from(x)).sum();
        i64::try_from(total).map_err(|_| StoreError::SumOverflow { left, right })
    }

    fn check_range(&self, left: usize, right: usize) -> Result<()> {
        if left > right || right >= self.data.len() {
            return Err(StoreError::InvalidRange {
                left,
                right,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}
