//! Integration Tests for the public store API
//!
//! Drives the cache, the splay tree and the workloads the way an external
//! caller would.

use memo_stores::{
    tasks,
    workloads::{fibonacci, Query, RangeSumProcessor},
    Config, LruCache, MemoStore, SplayTree, StoreError,
};

// == Helper Functions ==

fn memoize_squares<M: MemoStore<u64, u64>>(store: &mut M, inputs: &[u64]) -> Vec<u64> {
    inputs
        .iter()
        .map(|&n| match store.recall(&n) {
            Some(v) => v,
            None => {
                let v = n * n;
                store.remember(n, v);
                v
            }
        })
        .collect()
}

// == Bounded Recency Cache ==

#[test]
fn test_cache_capacity_two_scenario() {
    let mut cache = LruCache::new(2).unwrap();
    cache.put('A', 1);
    cache.put('B', 2);
    assert_eq!(cache.get(&'A'), Some(&1));
    cache.put('C', 3);

    let keys: Vec<char> = cache.keys().copied().collect();
    assert_eq!(keys, vec!['A', 'C']);
    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.evictions, 1);
}

#[test]
fn test_cache_invalid_capacity() {
    let err = LruCache::<u8, u8>::new(0).unwrap_err();
    assert_eq!(err, StoreError::InvalidCapacity(0));
}

#[test]
fn test_cache_range_invalidation_then_reinsert() {
    let mut cache = LruCache::new(10).unwrap();
    cache.put((0usize, 9usize), 45i64);
    cache.put((10, 19), 145);
    cache.put((5, 15), 110);

    let removed = cache.remove_matching(|&(l, r)| l <= 12 && 12 <= r);
    assert_eq!(removed, 2);

    cache.put((11, 13), 36);
    assert_eq!(cache.get(&(11, 13)), Some(&36));
    assert_eq!(cache.get(&(0, 9)), Some(&45));
    assert_eq!(cache.get(&(10, 19)), None);
}

#[test]
fn test_cache_hit_rate_percentage() {
    let mut cache = LruCache::new(3).unwrap();
    assert_eq!(cache.stats().hit_rate(), 0.0);
    cache.put(1, "x");
    cache.get(&1);
    cache.get(&1);
    cache.get(&1);
    cache.get(&2);
    assert_eq!(cache.stats().hit_rate(), 75.0);
}

// == Self-Adjusting Search Tree ==

#[test]
fn test_tree_walkthrough() {
    let mut tree = SplayTree::new();
    for (k, v) in [(10, "apple"), (8, "banana"), (3, "cherry"), (7, "date")] {
        tree.insert(k, v);
        assert_eq!(tree.root_key(), Some(&k));
    }

    assert_eq!(tree.find(&7), Some(&"date"));
    assert_eq!(tree.root_key(), Some(&7));
    assert_eq!(tree.find(&3), Some(&"cherry"));
    assert_eq!(tree.root_key(), Some(&3));
    assert_eq!(tree.find(&3), Some(&"cherry"));
    assert_eq!(tree.root_key(), Some(&3));

    assert_eq!(tree.find(&42), None);
    assert_eq!(tree.root_key(), Some(&3));
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_tree_sorted_after_many_inserts() {
    let mut tree = SplayTree::new();
    for i in 0..1000u32 {
        tree.insert((i * 7919) % 1009, i);
    }
    let keys: Vec<u32> = tree.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(keys, sorted);
    assert_eq!(tree.len(), 1000);
}

// == Pluggable Backends ==

#[test]
fn test_backends_are_interchangeable() {
    let inputs = [3, 4, 3, 5, 4, 3];
    let mut cache = LruCache::new(8).unwrap();
    let mut tree = SplayTree::new();

    let a = memoize_squares(&mut cache, &inputs);
    let b = memoize_squares(&mut tree, &inputs);
    assert_eq!(a, vec![9, 16, 9, 25, 16, 9]);
    assert_eq!(a, b);
    assert_eq!(cache.stats().hits, 3);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_fibonacci_through_public_api() {
    let mut tree = SplayTree::new();
    let mut cache = LruCache::new(4).unwrap();
    assert_eq!(fibonacci(90, &mut tree), Ok(2_880_067_194_370_816_120));
    assert_eq!(fibonacci(90, &mut cache), Ok(2_880_067_194_370_816_120));
}

#[test]
fn test_range_processor_end_to_end() {
    let mut processor = RangeSumProcessor::new(vec![5; 20], 4).unwrap();
    assert_eq!(processor.apply(Query::Range { left: 0, right: 19 }, true), Ok(Some(100)));
    assert_eq!(processor.apply(Query::Update { index: 0, value: 0 }, true), Ok(None));
    assert_eq!(processor.apply(Query::Range { left: 0, right: 19 }, true), Ok(Some(95)));
    assert_eq!(processor.stats().misses, 2);
}

// == Runner ==

#[test]
fn test_runner_report_serializes() {
    let config = Config {
        cache_capacity: 32,
        array_size: 1000,
        query_count: 500,
        fib_target: 100,
    };
    let report = tasks::run(&config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["queries"]["range_queries"], 450);
    assert_eq!(json["queries"]["update_queries"], 50);
    assert_eq!(json["fibonacci"]["value"], "354224848179261915075");
    assert_eq!(json["fibonacci"]["splay"]["root"], 100);
    assert!(json["generated_at"].is_string());
}
