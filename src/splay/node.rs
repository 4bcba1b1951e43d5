//! Splay Tree Node Module
//!
//! Arena-resident tree node. Children and parent are slot handles, so the
//! parent link never owns anything.

use crate::arena::SlotId;

// == Tree Node ==
/// A key-value pair plus its links inside the tree.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub left: Option<SlotId>,
    pub right: Option<SlotId>,
    /// Absent only for the root
    pub parent: Option<SlotId>,
}

impl<K, V> Node<K, V> {
    // == Constructor ==
    /// Creates a detached leaf hanging off `parent`.
    pub fn leaf(key: K, value: V, parent: Option<SlotId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
}
