//! Tasks Module
//!
//! Drivers that run the workloads end to end and collect a report.
//!
//! # Tasks
//! - Range queries: replays a scripted range/update mix through the LRU cache
//! - Fibonacci: computes one term through both memo backends

mod runner;

pub use runner::{run, run_fibonacci, run_queries, scripted_queries};
