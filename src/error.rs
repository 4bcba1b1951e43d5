//! Error types for the memo stores
//!
//! Provides unified error handling using thiserror. A missing key is never
//! an error here: lookups return `Option`.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the stores and the workloads built on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Capacity must be at least one entry at construction
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Range bounds are reversed or past the end of the data
    #[error("Invalid range: [{left}, {right}] for length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    /// Index past the end of the data
    #[error("Index out of range: {index} for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Computed value does not fit the result type
    #[error("Arithmetic overflow computing term {0}")]
    Overflow(u64),

    /// Range sum does not fit in an i64
    #[error("Sum over [{left}, {right}] overflows i64")]
    SumOverflow { left: usize, right: usize },
}

// == Result Type Alias ==
/// Convenience Result type for the memo stores.
pub type Result<T> = std::result::Result<T, StoreError>;
