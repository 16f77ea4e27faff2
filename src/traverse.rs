//! Depth-first walks over a tree's keys.
//!
//! Each walk is a lazy iterator holding its own stack, so it never recurses and a new walk always
//! starts again from the root.

use std::iter::FusedIterator;

use crate::node::{NodeId, NodePool};

/// The order a depth-first walk visits nodes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Root, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then root, then right subtree. Yields keys in ascending order.
    In,
    /// Left subtree, then right subtree, then root.
    Post,
}

/// Keys in root-left-right order. See [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, K> {
    pool: &'a NodePool<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(pool: &'a NodePool<K>, root: Option<NodeId>) -> Self {
        Self {
            pool,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let pool = self.pool;
        let node = &pool[self.stack.pop()?];
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// Keys in left-root-right (ascending) order. See [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, K> {
    pool: &'a NodePool<K>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, K> Inorder<'a, K> {
    pub(crate) fn new(pool: &'a NodePool<K>, root: Option<NodeId>) -> Self {
        Self {
            pool,
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, K> Iterator for Inorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let pool = self.pool;
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = pool[id].left;
        }
        let node = &pool[self.stack.pop()?];
        self.current = node.right;
        Some(&node.key)
    }
}

impl<K> FusedIterator for Inorder<'_, K> {}

/// Keys in left-right-root order. See [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, K> {
    pool: &'a NodePool<K>,
    /// Nodes still to visit, flagged once their children have been pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    pub(crate) fn new(pool: &'a NodePool<K>, root: Option<NodeId>) -> Self {
        Self {
            pool,
            stack: root.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let pool = self.pool;
        while let Some((id, expanded)) = self.stack.pop() {
            let node = &pool[id];
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}

/// One of the three walks, picked at runtime. See [`Tree::traverse`][crate::Tree::traverse].
pub enum Traversal<'a, K> {
    /// A [`Preorder`] walk.
    Pre(Preorder<'a, K>),
    /// An [`Inorder`] walk.
    In(Inorder<'a, K>),
    /// A [`Postorder`] walk.
    Post(Postorder<'a, K>),
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(order: Order, pool: &'a NodePool<K>, root: Option<NodeId>) -> Self {
        match order {
            Order::Pre => Self::Pre(Preorder::new(pool, root)),
            Order::In => Self::In(Inorder::new(pool, root)),
            Order::Post => Self::Post(Postorder::new(pool, root)),
        }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        match self {
            Self::Pre(walk) => walk.next(),
            Self::In(walk) => walk.next(),
            Self::Post(walk) => walk.next(),
        }
    }
}

impl<K> FusedIterator for Traversal<'_, K> {}
