//! Report models for the workload runner
//!
//! Serializable summaries printed by the binary as JSON.

pub mod reports;

// Re-export commonly used types
pub use reports::{FibonacciReport, QueryReport, RunReport, StatsReport, TreeReport};
