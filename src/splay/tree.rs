//! Splay Tree Module
//!
//! Self-adjusting binary search tree. Every insert and every successful
//! find rotates the touched node up to the root, so recently used keys stay
//! cheap to reach again.
//!
//! ## Rotations
//!
//! ```text
//!   rotate_right(x)            rotate_left(x)
//!
//!        x          y            x              y
//!       / \        / \          / \            / \
//!      y   c  =>  a   x        a   y    =>    x   c
//!     / \            / \          / \        / \
//!    a   b          b   c        b   c      a   b
//! ```
//!
//! Splaying applies Zig, Zig-Zig or Zig-Zag steps until the node has no
//! parent. Misses never restructure the tree.

use std::cmp::Ordering;

use tracing::trace;

use crate::arena::{Arena, SlotId};
use crate::splay::Node;

// == Splay Tree ==
/// Unbounded ordered key-value store with move-to-root access.
#[derive(Debug)]
pub struct SplayTree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<SlotId>,
}

impl<K: Ord, V> SplayTree<K, V> {
    // == Constructor ==
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    // == Insert ==
    /// Inserts `key`, or overwrites its value if already present, then splays
    /// that node to the root.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::leaf(key, value, None)));
            return;
        };

        loop {
            match key.cmp(&self.nodes[current].key) {
                Ordering::Less => match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        let id = self.nodes.insert(Node::leaf(key, value, Some(current)));
                        self.nodes[current].left = Some(id);
                        self.splay(id);
                        return;
                    }
                },
                Ordering::Greater => match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        let id = self.nodes.insert(Node::leaf(key, value, Some(current)));
                        self.nodes[current].right = Some(id);
                        self.splay(id);
                        return;
                    }
                },
                Ordering::Equal => {
                    self.nodes[current].value = value;
                    self.splay(current);
                    return;
                }
            }
        }
    }

    // == Find ==
    /// Looks up `key`; on success splays its node to the root.
    ///
    /// A miss returns `None` and leaves the shape untouched.
    pub fn find(&mut self, key: &K) -> Option<&V> {
        let id = self.locate(key)?;
        self.splay(id);
        Some(&self.nodes[id].value)
    }

    /// Read-only membership test; does not splay.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    // == Accessors ==
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|id| &self.nodes[id].key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(SlotId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        deepest
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Plain BST descent without restructuring.
    fn locate(&self, key: &K) -> Option<SlotId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    // == Splay ==
    fn splay(&mut self, id: SlotId) {
        let mut steps = 0usize;
        while let Some(parent) = self.nodes[id].parent {
            let node_is_left = self.nodes[parent].left == Some(id);
            match self.nodes[parent].parent {
                // Zig
                None => {
                    if node_is_left {
                        self.rotate_right(parent);
                    } else {
                        self.rotate_left(parent);
                    }
                }
                Some(grandparent) => {
                    let parent_is_left = self.nodes[grandparent].left == Some(parent);
                    match (node_is_left, parent_is_left) {
                        // Zig-Zig
                        (true, true) => {
                            self.rotate_right(grandparent);
                            self.rotate_right(parent);
                        }
                        (false, false) => {
                            self.rotate_left(grandparent);
                            self.rotate_left(parent);
                        }
                        // Zig-Zag
                        (true, false) => {
                            self.rotate_right(parent);
                            self.rotate_left(grandparent);
                        }
                        (false, true) => {
                            self.rotate_left(parent);
                            self.rotate_right(grandparent);
                        }
                    }
                }
            }
            steps += 1;
        }
        trace!(steps, "splayed node to root");
    }

    /// Promotes the left child of `pivot`. No-op without a left child.
    fn rotate_right(&mut self, pivot: SlotId) {
        let Some(child) = self.nodes[pivot].left else {
            return;
        };

        let inner = self.nodes[child].right;
        self.nodes[pivot].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }

        let parent = self.nodes[pivot].parent;
        self.nodes[child].parent = parent;
        self.replace_child(parent, pivot, child);

        self.nodes[child].right = Some(pivot);
        self.nodes[pivot].parent = Some(child);
    }

    /// Promotes the right child of `pivot`. No-op without a right child.
    fn rotate_left(&mut self, pivot: SlotId) {
        let Some(child) = self.nodes[pivot].right else {
            return;
        };

        let inner = self.nodes[child].left;
        self.nodes[pivot].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }

        let parent = self.nodes[pivot].parent;
        self.nodes[child].parent = parent;
        self.replace_child(parent, pivot, child);

        self.nodes[child].left = Some(pivot);
        self.nodes[pivot].parent = Some(child);
    }

    /// Repoints whichever link held `old` (a parent's child slot or the
    /// root) at `new`.
    fn replace_child(&mut self, parent: Option<SlotId>, old: SlotId, new: SlotId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = Some(new);
                } else {
                    node.right = Some(new);
                }
            }
        }
    }

    /// Panics if parent links, ordering or the node count are inconsistent.
    #[cfg(test)]
    pub(crate) fn debug_validate_invariants(&self) {
        let mut seen = 0usize;
        if let Some(root) = self.root {
            assert!(self.nodes[root].parent.is_none(), "root has a parent");
        }
        let mut stack: Vec<SlotId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            seen += 1;
            let node = &self.nodes[id];
            if let Some(left) = node.left {
                assert_eq!(self.nodes[left].parent, Some(id), "stale parent link");
                assert!(self.nodes[left].key < node.key, "left child out of order");
                stack.push(left);
            }
            if let Some(right) = node.right {
                assert_eq!(self.nodes[right].parent, Some(id), "stale parent link");
                assert!(self.nodes[right].key > node.key, "right child out of order");
                stack.push(right);
            }
        }
        assert_eq!(seen, self.nodes.len(), "unreachable nodes in arena");
        let keys: Vec<&K> = self.keys().collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "in-order keys not sorted");
    }
}

impl<K: Ord, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// == In-order Iterator ==
/// Ascending iterator driven by an explicit stack of left spines.
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: Vec<SlotId>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut current: Option<SlotId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id].left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left_spine(node.right);
        Some((&node.key, &node.value))
    }
}
