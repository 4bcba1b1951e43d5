//! Memoized Fibonacci
//!
//! Recursive Fibonacci that remembers every computed term in a caller-owned
//! [`MemoStore`].

use crate::error::{Result, StoreError};
use crate::memo::MemoStore;

/// Largest term that fits in a `u128`.
pub const MAX_FIB_TERM: u64 = 186;

/// Computes the `n`th Fibonacci number, `F(0) = 0`, `F(1) = 1`.
///
/// Looks `n` up in `memo` first, otherwise recurses on `n - 1` and `n - 2`
/// and remembers the sum.
///
/// # Errors
/// Returns `StoreError::Overflow` when the term exceeds `u128`.
pub fn fibonacci<M>(n: u64, memo: &mut M) -> Result<u128>
where
    M: MemoStore<u64, u128>,
{
    if n <= 1 {
        return Ok(u128::from(n));
    }
    if n > MAX_FIB_TERM {
        return Err(StoreError::Overflow(n));
    }
    if let Some(known) = memo.recall(&n) {
        return Ok(known);
    }

    let prev = fibonacci(n - 1, memo)?;
    let prev2 = fibonacci(n - 2, memo)?;
    let value = prev.checked_add(prev2).ok_or(StoreError::Overflow(n))?;
    memo.remember(n, value);
    Ok(value)
}
