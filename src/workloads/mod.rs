//! Workloads Module
//!
//! Computations that consume the memo stores through their public
//! contracts: a cached range-sum processor and a memoized Fibonacci.

mod fibonacci;
mod query;

pub use fibonacci::{fibonacci, MAX_FIB_TERM};
pub use query::{Query, RangeSumProcessor};
