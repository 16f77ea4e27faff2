//! A self-balancing Binary Search Tree (specifically, an AVL tree) built on top of [`Tree`].
//!
//! After every insertion the tree walks from the new node's parent up to the root, fixing heights
//! and rotating any node whose subtrees differ in height by more than one. Deletions run the same
//! walk from the parent of the released node.
//!
//! # Examples
//!
//! ```
//! use bst_avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Inserting in ascending order would build a chain in a plain BST.
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(root.height(), 1);
//! assert_eq!(root.left().map(|n| *n.key()), Some(10));
//! assert_eq!(root.right().map(|n| *n.key()), Some(30));
//! ```

use std::fmt;
use std::ops::Deref;

use crate::bst::Tree;
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::node::{NodeId, Subtree};
use crate::util::DeleteResult;

/// An AVL tree holding at most [`capacity`][Tree::capacity] unique keys.
///
/// All read-only operations (search, walks, status, ...) come from the wrapped [`Tree`]. Changes
/// only go through the methods here so the balance is always restored.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    tree: Tree<K>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Deref for AvlTree<K> {
    type Target = Tree<K>;

    fn deref(&self) -> &Tree<K> {
        &self.tree
    }
}

impl<K> AvlTree<K> {
    /// Generates a new, empty `AvlTree` with the default capacity.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Generates a new, empty `AvlTree` accepting at most `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TreeConfig::new().with_capacity(capacity))
    }

    /// Generates a new, empty `AvlTree` from the given settings.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            tree: Tree::with_config(config),
        }
    }

    /// The plain tree underneath.
    pub fn as_tree(&self) -> &Tree<K> {
        &self.tree
    }

    /// Removes every key. The capacity is kept.
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<K> AvlTree<K>
where
    K: Ord + fmt::Debug,
{
    /// Inserts `key` and rebalances.
    ///
    /// # Errors
    ///
    /// - [`TreeError::CapacityExceeded`] when the tree is full.
    /// - [`TreeError::DuplicateKey`] when `key` is already present.
    ///
    /// The tree is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::{AvlTree, TreeError};
    ///
    /// let mut tree = AvlTree::with_capacity(2);
    /// tree.insert(5).unwrap();
    /// assert_eq!(tree.insert(5), Err(TreeError::DuplicateKey));
    ///
    /// tree.insert(6).unwrap();
    /// assert_eq!(tree.insert(7), Err(TreeError::CapacityExceeded { capacity: 2 }));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        let id = self.tree.attach(Subtree::leaf(key))?;
        let parent = self.tree.pool[id].parent;
        self.rebalance_from(parent);
        Ok(())
    }

    /// Deletes `key`, rebalances, and reports whether the key was present.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there is nothing to delete from.
    pub fn delete(&mut self, key: &K) -> Result<bool, TreeError> {
        match self.tree.unlink(key)? {
            DeleteResult::NotFound => Ok(false),
            DeleteResult::Deleted { parent } => {
                self.rebalance_from(parent);
                Ok(true)
            }
        }
    }

    /// Walks from `ancestor` to the root, recomputing each height and rotating wherever the
    /// balance factor leaves `-1..=1`.
    fn rebalance_from(&mut self, mut ancestor: Option<NodeId>) {
        while let Some(id) = ancestor {
            self.tree.pool.update_height(id);
            let balance = self.tree.pool.balance_factor(Some(id));

            if balance > 1 {
                let left = self.tree.pool[id]
                    .left
                    .expect("Left heavy => left child");
                if self.tree.pool.balance_factor(Some(left)) < 0 {
                    self.rotate_left(left);
                }
                self.rotate_right(id);
            } else if balance < -1 {
                let right = self.tree.pool[id]
                    .right
                    .expect("Right heavy => right child");
                if self.tree.pool.balance_factor(Some(right)) > 0 {
                    self.rotate_right(right);
                }
                self.rotate_left(id);
            }

            // After a rotation `id` hangs below the subtree's new root, which is what the walk
            // checks next.
            ancestor = self.tree.pool[id].parent;
            if cfg!(debug_assertions) && balance.abs() > 1 {
                let top = ancestor.expect("Rotated node has a parent");
                assert!(self.tree.pool.balance_factor(Some(top)).abs() <= 1);
            }
        }
    }

    /// Rotate `node` to the left. This moves its right child (the pivot) up into its place and
    /// `node` down to become the pivot's left child. Used when the right subtree is too tall, so
    /// it must only be called when there _is_ a right child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>           Option<parent>
    ///      /                        /
    ///    node                     pivot
    ///    /  \                     /   \
    ///   x   pivot    rotate ->  node   z
    ///        / \                /  \
    ///       y   z              x    y
    /// ```
    fn rotate_left(&mut self, node: NodeId) {
        let pool = &mut self.tree.pool;
        let pivot = pool[node].right.expect("Rotate left => right child");
        log::trace!("rotating left around {:?}", pool[node].key);

        let parent = pool[node].parent;
        let grandchild = pool[pivot].left;

        pool[pivot].parent = parent;
        pool[node].right = grandchild;
        if let Some(grandchild) = grandchild {
            pool[grandchild].parent = Some(node);
        }
        pool[pivot].left = Some(node);
        pool[node].parent = Some(pivot);

        // `node` first, it is now below `pivot`.
        pool.update_height(node);
        pool.update_height(pivot);
        self.tree.replace_child(parent, node, pivot);
    }

    /// Rotate `node` to the right, the mirror image of [`rotate_left`][Self::rotate_left].
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      Option<parent>          Option<parent>
    ///        /                       /
    ///      node                    pivot
    ///      /  \                    /   \
    ///   pivot  z     rotate ->    x    node
    ///    / \                           /  \
    ///   x   y                         y    z
    /// ```
    fn rotate_right(&mut self, node: NodeId) {
        let pool = &mut self.tree.pool;
        let pivot = pool[node].left.expect("Rotate right => left child");
        log::trace!("rotating right around {:?}", pool[node].key);

        let parent = pool[node].parent;
        let grandchild = pool[pivot].right;

        pool[pivot].parent = parent;
        pool[node].left = grandchild;
        if let Some(grandchild) = grandchild {
            pool[grandchild].parent = Some(node);
        }
        pool[pivot].right = Some(node);
        pool[node].parent = Some(pivot);

        pool.update_height(node);
        pool.update_height(pivot);
        self.tree.replace_child(parent, node, pivot);
    }
}
