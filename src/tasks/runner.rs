//! Workload Runner
//!
//! Replays the range-sum workload and the Fibonacci computation with the
//! configured sizes and summarizes the stores' behaviour.

use tracing::info;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{FibonacciReport, QueryReport, RunReport, StatsReport, TreeReport};
use crate::splay::SplayTree;
use crate::workloads::{fibonacci, Query, RangeSumProcessor};

/// Number of distinct ranges the script cycles through.
const RANGE_POOL: usize = 64;

/// Ranges repeated often enough to stay cached.
const HOT_RANGES: usize = 8;

/// Builds a deterministic query mix: every tenth query is a point update,
/// the rest are range queries. Two out of three ranges come from a hot set
/// of eight, the others cycle through a larger pool.
///
/// Returns an empty script when `array_size` is zero.
pub fn scripted_queries(array_size: usize, query_count: usize) -> Vec<Query> {
    if array_size == 0 {
        return Vec::new();
    }
    (0..query_count)
        .map(|i| {
            if i % 10 == 9 {
                Query::Update {
                    index: i.wrapping_mul(7919) % array_size,
                    value: (i % 100) as i64 + 1,
                }
            } else {
                let slot = if i % 3 == 0 {
                    (i * 13) % RANGE_POOL
                } else {
                    i % HOT_RANGES
                };
                let left = (slot * 1543) % array_size;
                let right = left + (slot * 97) % (array_size - left);
                Query::Range { left, right }
            }
        })
        .collect()
}

/// Replays the scripted queries through a cached [`RangeSumProcessor`].
pub fn run_queries(config: &Config) -> Result<QueryReport> {
    let data: Vec<i64> = (0..config.array_size).map(|i| (i % 100) as i64 + 1).collect();
    let mut processor = RangeSumProcessor::new(data, config.cache_capacity)?;
    let queries = scripted_queries(config.array_size, config.query_count);

    let mut range_queries = 0;
    let mut update_queries = 0;
    for query in queries {
        match query {
            Query::Range { .. } => range_queries += 1,
            Query::Update { .. } => update_queries += 1,
        }
        processor.apply(query, true)?;
    }

    let stats = processor.stats();
    info!(
        range_queries,
        update_queries,
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "range query workload finished"
    );
    Ok(QueryReport::new(range_queries, update_queries, &stats))
}

/// Computes `config.fib_target` through an LRU memo and a splay tree memo.
pub fn run_fibonacci(config: &Config) -> Result<FibonacciReport> {
    let n = config.fib_target;
    let mut lru = LruCache::new(config.cache_capacity)?;
    let mut tree = SplayTree::new();

    let via_lru = fibonacci(n, &mut lru)?;
    let via_tree = fibonacci(n, &mut tree)?;
    debug_assert_eq!(via_lru, via_tree);

    info!(n, value = %via_tree, tree_height = tree.height(), "fibonacci workload finished");
    Ok(FibonacciReport {
        n,
        value: via_tree.to_string(),
        lru: StatsReport::from(&lru.stats()),
        splay: TreeReport {
            nodes: tree.len(),
            height: tree.height(),
            root: tree.root_key().copied(),
        },
    })
}

/// Runs every workload and assembles the report.
pub fn run(config: &Config) -> Result<RunReport> {
    let queries = run_queries(config)?;
    let fibonacci = run_fibonacci(config)?;
    Ok(RunReport::new(queries, fibonacci))
}
