#[macro_use]
extern crate quickcheck_macros;

mod avl;
mod bst;

use bst_avl::NodeRef;
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Delete the K from the tree
    Delete(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Delete(K::arbitrary(g))
        }
    }
}

/// Walks every node below `node` through the public API and returns whether heights and parent
/// links are consistent. When `balanced` is set, also requires the AVL balance rule.
pub(crate) fn well_formed<K>(node: Option<NodeRef<'_, K>>, balanced: bool) -> bool {
    let Some(node) = node else {
        return true;
    };
    let left_height = node.left().map_or(-1, |n| n.height());
    let right_height = node.right().map_or(-1, |n| n.height());

    node.height() == 1 + left_height.max(right_height)
        && (!balanced || (left_height - right_height).abs() <= 1)
        && node.left().map_or(true, |n| n.parent() == Some(node))
        && node.right().map_or(true, |n| n.parent() == Some(node))
        && well_formed(node.left(), balanced)
        && well_formed(node.right(), balanced)
}
