//! Memo Store Module
//!
//! Common seam over the two backends so a computation can memoize through
//! either one. Callers own the store instance and pass it in explicitly.

use std::hash::Hash;

use crate::cache::LruCache;
use crate::splay::SplayTree;

// == Memo Store Trait ==
/// Minimal key-value contract a memoizing computation needs.
pub trait MemoStore<K, V> {
    /// Returns a copy of the remembered value, if any.
    fn recall(&mut self, key: &K) -> Option<V>;

    /// Remembers `value` for `key`, replacing any earlier value.
    fn remember(&mut self, key: K, value: V);
}

impl<K, V> MemoStore<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn recall(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn remember(&mut self, key: K, value: V) {
        self.put(key, value);
    }
}

impl<K, V> MemoStore<K, V> for SplayTree<K, V>
where
    K: Ord,
    V: Clone,
{
    fn recall(&mut self, key: &K) -> Option<V> {
        self.find(key).cloned()
    }

    fn remember(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}
