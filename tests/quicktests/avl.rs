use bst_avl::{AvlTree, Order, TreeError};

use std::collections::BTreeSet;

use crate::{well_formed, Op};

#[quickcheck]
fn stays_balanced_after_each_insert(xs: Vec<i8>) -> bool {
    let _ = pretty_env_logger::try_init();

    let mut tree = AvlTree::with_capacity(usize::MAX);
    xs.iter().all(|x| {
        let _ = tree.insert(*x);
        well_formed(tree.root(), true)
    })
}

#[quickcheck]
fn stays_balanced_after_each_operation(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::with_capacity(usize::MAX);
    let mut set = BTreeSet::new();

    ops.iter().all(|op| {
        match op {
            Op::Insert(k) => {
                let _ = tree.insert(*k);
                set.insert(*k);
            }
            Op::Delete(k) => {
                let _ = tree.delete(k);
                set.remove(k);
            }
        }
        well_formed(tree.root(), true) && tree.inorder().eq(set.iter())
    })
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let mut tree = AvlTree::with_capacity(usize::MAX);
    for x in &xs {
        let _ = tree.insert(*x);
    }

    // An AVL tree with n nodes is at most ~1.44 * lg(n + 2) tall.
    let n = tree.len() as f64;
    tree.height() as f64 <= 1.45 * (n + 2.0).log2()
}

#[test]
fn round_trip() {
    let _ = pretty_env_logger::try_init();

    let keys = [5, 3, 8, 1, 4, 7, 9];
    let mut tree = AvlTree::new();
    for key in keys {
        tree.insert(key).unwrap();
    }

    for key in keys {
        assert_eq!(tree.search(&key).map(|n| *n.key()), Some(key));
    }
    assert!(tree.search(&100).is_none());
}

#[test]
fn rejecting_a_duplicate_is_idempotent() {
    let mut once = AvlTree::new();
    once.insert(5).unwrap();

    let mut twice = AvlTree::new();
    twice.insert(5).unwrap();
    assert_eq!(twice.insert(5), Err(TreeError::DuplicateKey));

    assert_eq!(twice.len(), 1);
    assert_eq!(once.sideways().to_string(), twice.sideways().to_string());
}

#[test]
fn single_right_rotation() {
    let mut tree = AvlTree::new();
    for key in [30, 20, 10] {
        tree.insert(key).unwrap();
    }

    let root = tree.root().unwrap();
    assert_eq!((*root.key(), root.height()), (20, 1));
    let left = root.left().unwrap();
    let right = root.right().unwrap();
    assert_eq!((*left.key(), left.height()), (10, 0));
    assert_eq!((*right.key(), right.height()), (30, 0));
    assert_eq!(left.parent(), Some(root));
    assert_eq!(right.parent(), Some(root));
    assert!(root.parent().is_none());
}

#[test]
fn capacity_boundary() {
    let mut tree = AvlTree::with_capacity(1);
    tree.insert(1).unwrap();

    assert_eq!(
        tree.insert(2),
        Err(TreeError::CapacityExceeded { capacity: 1 })
    );
    assert_eq!(tree.len(), 1);
}

#[test]
fn traversals_of_empty_tree() {
    let tree = AvlTree::<i32>::new();
    for order in [Order::Pre, Order::In, Order::Post] {
        assert!(matches!(tree.traverse(order), Err(TreeError::EmptyTree)));
    }
    assert_eq!(tree.status().to_string(), "Size: 0\nMax Size: 100\nRoot: NULL\nHeight: -1\n");
}
