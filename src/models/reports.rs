//! Report DTOs for the workload runner
//!
//! Defines the structure of the JSON summary emitted after a run.

use serde::Serialize;

use crate::cache::CacheStats;

/// Cache statistics with the derived hit rate spelled out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate as a percentage
    pub hit_rate: f64,
}

impl From<&CacheStats> for StatsReport {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Outcome of replaying the range-sum workload.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    /// Number of range queries replayed
    pub range_queries: usize,
    /// Number of point updates replayed
    pub update_queries: usize,
    /// Share of range queries, as a percentage
    pub range_share: f64,
    /// Final statistics of the range cache
    pub cache: StatsReport,
}

impl QueryReport {
    /// Creates a new QueryReport from query counts and cache statistics
    pub fn new(range_queries: usize, update_queries: usize, stats: &CacheStats) -> Self {
        let total = range_queries + update_queries;
        let range_share = if total > 0 {
            range_queries as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            range_queries,
            update_queries,
            range_share,
            cache: StatsReport::from(stats),
        }
    }
}

/// Fibonacci term computed through both memo backends.
#[derive(Debug, Clone, Serialize)]
pub struct FibonacciReport {
    /// Requested term
    pub n: u64,
    /// Decimal value; u128 does not fit every JSON reader
    pub value: String,
    /// Statistics of the LRU memo
    pub lru: StatsReport,
    /// Shape of the splay tree memo
    pub splay: TreeReport,
}

/// Shape summary of a splay tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    /// Number of remembered keys
    pub nodes: usize,
    /// Longest root-to-leaf path
    pub height: usize,
    /// Key currently at the root
    pub root: Option<u64>,
}

/// Full summary of one runner invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub queries: QueryReport,
    pub fibonacci: FibonacciReport,
}

impl RunReport {
    /// Creates a new RunReport stamped with the current time
    pub fn new(queries: QueryReport, fibonacci: FibonacciReport) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            queries,
            fibonacci,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_report_from_stats() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.set_total_entries(2);

        let report = StatsReport::from(&stats);
        assert_eq!(report.hits, 3);
        assert_eq!(report.misses, 1);
        assert_eq!(report.total_entries, 2);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_query_report_share() {
        let report = QueryReport::new(9, 1, &CacheStats::new());
        assert_eq!(report.range_share, 90.0);

        let empty = QueryReport::new(0, 0, &CacheStats::new());
        assert_eq!(empty.range_share, 0.0);
    }

    #[test]
    fn test_run_report_timestamp_parses() {
        let report = RunReport::new(
            QueryReport::new(1, 0, &CacheStats::new()),
            FibonacciReport {
                n: 10,
                value: "55".to_string(),
                lru: StatsReport::from(&CacheStats::new()),
                splay: TreeReport {
                    nodes: 9,
                    height: 9,
                    root: Some(10),
                },
            },
        );
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fibonacci"]["value"], "55");
        assert_eq!(json["fibonacci"]["splay"]["root"], 10);
    }
}
