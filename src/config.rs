//! Configuration Module
//!
//! Handles loading the workload runner configuration from environment variables.

use std::env;

/// Workload runner configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of ranges the query cache can hold
    pub cache_capacity: usize,
    /// Number of elements in the range-sum array
    pub array_size: usize,
    /// Number of range/update queries replayed against the processor
    pub query_count: usize,
    /// Fibonacci term computed through both memo backends
    pub fib_target: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Query cache capacity (default: 1000)
    /// - `ARRAY_SIZE` - Range-sum array length (default: 100000)
    /// - `QUERY_COUNT` - Number of queries to replay (default: 50000)
    /// - `FIB_TARGET` - Fibonacci term to compute (default: 90)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            array_size: parse_var("ARRAY_SIZE").unwrap_or(defaults.array_size),
            query_count: parse_var("QUERY_COUNT").unwrap_or(defaults.query_count),
            fib_target: parse_var("FIB_TARGET").unwrap_or(defaults.fib_target),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            array_size: 100_000,
            query_count: 50_000,
            fib_target: 90,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 1000);
        assert_eq!(config.array_size, 100_000);
        assert_eq!(config.query_count, 50_000);
        assert_eq!(config.fib_target, 90);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("ARRAY_SIZE");
        env::remove_var("QUERY_COUNT");
        env::remove_var("FIB_TARGET");

        let config = Config::from_env();
        assert_eq!(config.cache_capacity, 1000);
        assert_eq!(config.array_size, 100_000);
        assert_eq!(config.query_count, 50_000);
        assert_eq!(config.fib_target, 90);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("MEMO_STORES_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_var::<usize>("MEMO_STORES_TEST_GARBAGE"), None);
        env::remove_var("MEMO_STORES_TEST_GARBAGE");
    }
}
