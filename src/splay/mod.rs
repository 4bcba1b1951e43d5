//! Splay Module
//!
//! Self-adjusting binary search tree used as an unbounded memo store.

mod node;
mod tree;

#[cfg(test)]
mod property_tests;

pub(crate) use node::Node;
pub use tree::{Iter, SplayTree};
