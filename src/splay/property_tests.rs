//! Property-Based Tests for Splay Module
//!
//! Uses proptest to check ordering, move-to-root and miss behaviour.

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::splay::SplayTree;

#[derive(Debug, Clone)]
enum TreeOp {
    Insert { key: i16, value: u32 },
    Find { key: i16 },
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        (-64i16..64, any::<u32>()).prop_map(|(key, value)| TreeOp::Insert { key, value }),
        (-64i16..64).prop_map(|key| TreeOp::Find { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // In-order traversal stays sorted and matches a BTreeMap after any
    // sequence of inserts.
    #[test]
    fn prop_inorder_sorted(entries in prop::collection::vec((any::<i32>(), any::<u8>()), 0..200)) {
        let mut tree = SplayTree::new();
        let mut model = BTreeMap::new();
        for (key, value) in entries {
            tree.insert(key, value);
            model.insert(key, value);
        }

        tree.debug_validate_invariants();
        let pairs: Vec<(i32, u8)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(i32, u8)> = model.into_iter().collect();
        prop_assert_eq!(pairs, expected);
    }

    // After every insert or successful find the accessed key is the root;
    // misses leave the root, size and height unchanged.
    #[test]
    fn prop_access_moves_to_root(ops in prop::collection::vec(tree_op_strategy(), 1..150)) {
        let mut tree = SplayTree::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                TreeOp::Insert { key, value } => {
                    tree.insert(key, value);
                    model.insert(key, value);
                    prop_assert_eq!(tree.root_key(), Some(&key));
                }
                TreeOp::Find { key } => {
                    let root_before = tree.root_key().copied();
                    let height_before = tree.height();
                    let found = tree.find(&key).copied();
                    prop_assert_eq!(found, model.get(&key).copied());
                    if found.is_some() {
                        prop_assert_eq!(tree.root_key(), Some(&key));
                    } else {
                        prop_assert_eq!(tree.root_key().copied(), root_before);
                        prop_assert_eq!(tree.height(), height_before);
                    }
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        tree.debug_validate_invariants();
    }

    // Re-finding the root key is idempotent.
    #[test]
    fn prop_refind_root_idempotent(keys in prop::collection::vec(any::<u16>(), 1..60), pick in any::<prop::sample::Index>()) {
        let mut tree = SplayTree::new();
        for &key in &keys {
            tree.insert(key, u32::from(key) * 3);
        }
        let key = keys[pick.index(keys.len())];

        let first = tree.find(&key).copied();
        let height = tree.height();
        let second = tree.find(&key).copied();

        prop_assert_eq!(first, Some(u32::from(key) * 3));
        prop_assert_eq!(first, second);
        prop_assert_eq!(tree.root_key(), Some(&key));
        prop_assert_eq!(tree.height(), height);
    }
}
