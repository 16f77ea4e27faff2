use bst_avl::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::{well_formed, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
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
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::with_capacity(usize::MAX);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder().eq(set.iter()) && tree.len() == set.len() && well_formed(tree.root(), false)
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let mut tree = Tree::with_capacity(usize::MAX);
    for x in &xs {
        let _ = tree.insert(*x);
    }

    let keys: Vec<_> = tree.inorder().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::with_capacity(usize::MAX);
    for x in &xs {
        let _ = tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::with_capacity(usize::MAX);
    for x in &xs {
        let _ = tree.insert(*x);
    }
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && well_formed(tree.root(), false)
}

#[quickcheck]
fn size_never_exceeds_capacity(capacity: u8, xs: Vec<i8>) -> bool {
    let capacity = usize::from(capacity);
    let mut tree = Tree::with_capacity(capacity);
    for x in &xs {
        let _ = tree.insert(*x);
    }

    let distinct: HashSet<_> = xs.iter().collect();
    tree.len() == distinct.len().min(capacity) && tree.len() == tree.inorder().count()
}
