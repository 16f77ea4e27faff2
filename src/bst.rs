//! A plain Binary Search Tree with a fixed capacity. It keeps keys in search order and tracks every
//! node's height, but it never rebalances: inserting keys in sorted order builds a chain. See
//! [`AvlTree`][crate::AvlTree] for the self-balancing version.
//!
//! # Examples
//!
//! ```
//! use bst_avl::{Tree, TreeError};
//!
//! let mut tree = Tree::with_capacity(8);
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1).unwrap();
//! assert_eq!(tree.search(&1).map(|node| *node.key()), Some(1));
//!
//! // Keys are unique.
//! assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert_eq!(tree.delete(&1), Ok(true));
//! assert_eq!(tree.delete(&1), Err(TreeError::EmptyTree));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::config::TreeConfig;
use crate::display::{Sideways, Status};
use crate::error::{Side, TreeError};
use crate::node::{NodeId, NodePool, NodeRef, Subtree};
use crate::traverse::{Inorder, Order, Postorder, Preorder, Traversal};
use crate::util::DeleteResult;

/// A Binary Search Tree holding at most [`capacity`][Tree::capacity] unique keys.
#[derive(Debug, Clone)]
pub struct Tree<K> {
    pub(crate) pool: NodePool<K>,
    pub(crate) root: Option<NodeId>,
    size: usize,
    capacity: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Inorder<'a, K>;

    fn into_iter(self) -> Inorder<'a, K> {
        self.inorder()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` with the default capacity.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Generates a new, empty `Tree` accepting at most `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TreeConfig::new().with_capacity(capacity))
    }

    /// Generates a new, empty `Tree` from the given settings.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            pool: NodePool::new(),
            root: None,
            size: 0,
            capacity: config.capacity(),
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Maximum number of keys the tree accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether the tree holds as many keys as it accepts.
    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Height of the tree: 0 for a single node, -1 when empty.
    pub fn height(&self) -> isize {
        self.pool.height(self.root)
    }

    /// The root node, `None` when empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(&self.pool, id))
    }

    /// The node holding the smallest key.
    pub fn minimum(&self) -> Option<NodeRef<'_, K>> {
        self.root
            .map(|root| NodeRef::new(&self.pool, self.pool.minimum(root)))
    }

    /// The node holding the largest key.
    pub fn maximum(&self) -> Option<NodeRef<'_, K>> {
        self.root
            .map(|root| NodeRef::new(&self.pool, self.pool.maximum(root)))
    }

    /// Size, capacity, root key and height in one value.
    pub fn status(&self) -> Status<'_, K> {
        Status {
            size: self.size,
            capacity: self.capacity,
            root: self.root().map(|root| root.key()),
            height: self.height(),
        }
    }

    /// A `Display`able drawing of the tree, rotated by +90 degrees.
    pub fn sideways(&self) -> Sideways<'_, K> {
        Sideways::new(&self.pool, self.root)
    }

    /// Keys in root-left-right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(&self.pool, self.root)
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(&self.pool, self.root)
    }

    /// Keys in left-right-root order.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(&self.pool, self.root)
    }

    /// Walks the keys in the given order.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there is nothing to walk.
    pub fn traverse(&self, order: Order) -> Result<Traversal<'_, K>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(Traversal::new(order, &self.pool, self.root))
    }

    /// Removes every key. The capacity is kept.
    pub fn clear(&mut self) {
        let freed = self.pool.free_subtree(self.root.take());
        log::debug!("cleared {freed} nodes");
        self.size = 0;
    }

    /// Points whatever referenced `old` (its parent's child link, or the root) at `new`.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) if self.pool[parent].left == Some(old) => self.pool[parent].left = Some(new),
            Some(parent) => self.pool[parent].right = Some(new),
        }
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.search(&1).map(|node| node.height()), Some(0));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.pool[id];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(NodeRef::new(&self.pool, id)),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

impl<K> Tree<K>
where
    K: Ord + fmt::Debug,
{
    /// Inserts `key`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::CapacityExceeded`] when the tree is full.
    /// - [`TreeError::DuplicateKey`] when `key` is already present.
    ///
    /// The tree is unchanged in both cases.
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        self.insert_subtree(Subtree::leaf(key))
    }

    /// Hangs a pre-built subtree at the position its root key belongs to. The subtree's own keys
    /// are trusted to be in search order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::CapacityExceeded`] when the subtree doesn't fit.
    /// - [`TreeError::DuplicateKey`] when the subtree's root key is already present. The subtree
    ///   is dropped.
    pub fn insert_subtree(&mut self, subtree: Subtree<K>) -> Result<(), TreeError> {
        let id = self.attach(subtree)?;

        let mut ancestor = self.pool[id].parent;
        while let Some(id) = ancestor {
            self.pool.update_height(id);
            ancestor = self.pool[id].parent;
        }
        Ok(())
    }

    /// Deletes `key` and reports whether it was present.
    ///
    /// A node with two children takes its predecessor's key, and the predecessor's node is the
    /// one released.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] when there is nothing to delete from.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// assert_eq!(tree.delete(&2), Ok(true));
    /// assert_eq!(tree.delete(&2), Ok(false));
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(1));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<bool, TreeError> {
        Ok(matches!(self.unlink(key)?, DeleteResult::Deleted { .. }))
    }

    /// Finds the slot for `subtree`, moves it into the pool and links it there. Heights above the
    /// new node are left for the caller to fix.
    pub(crate) fn attach(&mut self, subtree: Subtree<K>) -> Result<NodeId, TreeError> {
        if self.size + subtree.len() > self.capacity {
            log::debug!(
                "rejecting {:?}: {} of {} slots used",
                subtree.key(),
                self.size,
                self.capacity
            );
            return Err(TreeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            parent = Some(id);
            let node = &self.pool[id];
            match subtree.key().cmp(&node.key) {
                Ordering::Less => {
                    side = Side::Left;
                    current = node.left;
                }
                Ordering::Equal => {
                    log::debug!("rejecting duplicate key {:?}", subtree.key());
                    return Err(TreeError::DuplicateKey);
                }
                Ordering::Greater => {
                    side = Side::Right;
                    current = node.right;
                }
            }
        }

        log::debug!("inserting {:?} ({} keys)", subtree.key(), subtree.len());
        let id = self.pool.adopt(subtree);
        self.pool[id].parent = parent;
        match (parent, side) {
            (None, _) => self.root = Some(id),
            (Some(parent), Side::Left) => self.pool[parent].left = Some(id),
            (Some(parent), Side::Right) => self.pool[parent].right = Some(id),
        }
        self.size += self.pool.subtree_size(Some(id));

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                let parent_key = &self.pool[parent].key;
                match side {
                    Side::Left => assert!(self.pool[id].key < *parent_key),
                    Side::Right => assert!(self.pool[id].key > *parent_key),
                }
            }
        }
        Ok(id)
    }

    /// Removes `key` and returns where the released node hung from. Heights are recomputed from
    /// there up to the root.
    pub(crate) fn unlink(&mut self, key: &K) -> Result<DeleteResult, TreeError> {
        if self.is_empty() {
            log::debug!("cannot delete {key:?}: the tree is empty");
            return Err(TreeError::EmptyTree);
        }

        let mut current = self.root;
        let found = loop {
            let Some(id) = current else {
                log::debug!("{key:?} is not in the tree");
                return Ok(DeleteResult::NotFound);
            };
            match key.cmp(&self.pool[id].key) {
                Ordering::Less => current = self.pool[id].left,
                Ordering::Greater => current = self.pool[id].right,
                Ordering::Equal => break id,
            }
        };

        // Two children: the predecessor's key moves into `found` and the predecessor node, which
        // has no right child, is the one released.
        let (target, keeper) = match (self.pool[found].left, self.pool[found].right) {
            (Some(left), Some(_)) => (self.pool.maximum(left), Some(found)),
            _ => (found, None),
        };

        let parent = self.pool[target].parent;
        let child = self.pool[target].left.or(self.pool[target].right);
        if let Some(child) = child {
            self.pool[child].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) if self.pool[parent].left == Some(target) => {
                self.pool[parent].left = child
            }
            Some(parent) => self.pool[parent].right = child,
        }
        let released = self.pool.release(target);
        if let Some(keeper) = keeper {
            self.pool[keeper].key = released.key;
        }

        let mut current = parent;
        while let Some(id) = current {
            self.pool.update_height(id);
            current = self.pool[id].parent;
        }

        self.size -= 1;
        log::debug!("deleted {key:?}");
        Ok(DeleteResult::Deleted { parent })
    }
}
