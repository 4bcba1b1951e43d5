//! Recency List Module
//!
//! Doubly linked list of cache entries ordered by recency of access, with
//! nodes stored in an [`Arena`] and linked by [`SlotId`].

use crate::arena::{Arena, SlotId};

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// - Head = least recently used (next eviction candidate)
/// - Tail = most recently used
///
/// Every operation except iteration is O(1).
#[derive(Debug)]
pub struct RecencyList<K, V> {
    nodes: Arena<Node<K, V>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Push Back ==
    /// Appends an entry as most recently used and returns its handle.
    pub fn push_back(&mut self, key: K, value: V) -> SlotId {
        let id = self.nodes.insert(Node {
            key,
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    // == Touch ==
    /// Marks an entry as most recently used (moves it to the tail).
    pub fn move_to_back(&mut self, id: SlotId) {
        if self.tail == Some(id) || self.nodes.get(id).is_none() {
            return;
        }
        self.unlink(id);
        let node = &mut self.nodes[id];
        node.prev = self.tail;
        node.next = None;
        if let Some(tail) = self.tail {
            self.nodes[tail].next = Some(id);
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
    }

    // == Pop Front ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let head = self.head?;
        self.remove(head)
    }

    // == Remove ==
    /// Removes an entry by handle.
    pub fn remove(&mut self, id: SlotId) -> Option<(K, V)> {
        self.nodes.get(id)?;
        self.unlink(id);
        self.nodes.remove(id).map(|node| (node.key, node.value))
    }

    // == Peek Front ==
    /// Returns the least recently used entry without removing it.
    #[cfg(test)]
    pub fn front(&self) -> Option<(&K, &V)> {
        self.head.map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    /// Returns the most recently used entry.
    #[cfg(test)]
    pub fn back(&self) -> Option<(&K, &V)> {
        self.tail.map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    #[cfg(test)]
    pub fn key(&self, id: SlotId) -> Option<&K> {
        self.nodes.get(id).map(|node| &node.key)
    }

    pub fn value(&self, id: SlotId) -> Option<&V> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, id: SlotId) -> Option<&mut V> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    // == Length ==
    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Detaches a node from its neighbours without freeing it.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = &self.nodes[id];
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(SlotId, &K, &V)` in LRU to MRU order.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: Option<SlotId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (SlotId, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = &self.list.nodes[id];
        self.current = node.next;
        Some((id, &node.key, &node.value))
    }
}
