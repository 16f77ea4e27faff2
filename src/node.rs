//! Node storage shared by the trees in this crate.
//!
//! Nodes live in a [`NodePool`], a table of slots addressed by [`NodeId`]. A node owns its
//! children through the tree shape and only observes its parent, so every link is a plain handle
//! instead of a pointer. Released slots are recycled through a free list.

use std::cmp;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Side, TreeError};

/// Height reported for a missing child. A leaf therefore has a height of 0.
pub(crate) const ABSENT_HEIGHT: isize = -1;

/// Handle to a slot in a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    /// Number of edges on the longest path from this node down to a leaf.
    pub(crate) height: isize,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodePool<K> {
    slots: Vec<Option<Node<K>>>,
    free_list: Vec<usize>,
}

impl<K> Index<NodeId> for NodePool<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        self.slots[id.0]
            .as_ref()
            .expect("NodeId refers to a released node")
    }
}

impl<K> IndexMut<NodeId> for NodePool<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.slots[id.0]
            .as_mut()
            .expect("NodeId refers to a released node")
    }
}

impl<K> NodePool<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Stores a new node and returns its handle. The given children are re-parented to the new
    /// node and its height is computed from theirs.
    pub(crate) fn alloc(
        &mut self,
        key: K,
        left: Option<NodeId>,
        right: Option<NodeId>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let node = Node {
            key,
            height: 0,
            left,
            right,
            parent,
        };
        let id = match self.free_list.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };

        for child in [left, right].into_iter().flatten() {
            self[child].parent = Some(id);
        }
        self.update_height(id);
        id
    }

    /// Moves a detached [`Subtree`] into the pool and returns the handle of its root. The root
    /// has no parent yet.
    pub(crate) fn adopt(&mut self, subtree: Subtree<K>) -> NodeId {
        let Subtree {
            key, left, right, ..
        } = subtree;
        let left = left.map(|left| self.adopt(*left));
        let right = right.map(|right| self.adopt(*right));
        self.alloc(key, left, right, None)
    }

    /// Releases a single node. Its children, if any, must already be linked elsewhere.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots[id.0]
            .take()
            .expect("NodeId refers to a released node");
        self.free_list.push(id.0);
        node
    }

    /// Releases `root` and every node below it. Returns how many nodes were released.
    pub(crate) fn free_subtree(&mut self, root: Option<NodeId>) -> usize {
        let mut stack: Vec<NodeId> = root.into_iter().collect();
        let mut freed = 0;
        while let Some(id) = stack.pop() {
            let node = self.release(id);
            stack.extend(node.left);
            stack.extend(node.right);
            freed += 1;
        }
        freed
    }

    pub(crate) fn subtree_size(&self, root: Option<NodeId>) -> usize {
        let mut stack: Vec<NodeId> = root.into_iter().collect();
        let mut size = 0;
        while let Some(id) = stack.pop() {
            stack.extend(self[id].left);
            stack.extend(self[id].right);
            size += 1;
        }
        size
    }

    /// Number of nodes currently stored.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    pub(crate) fn height(&self, id: Option<NodeId>) -> isize {
        id.map_or(ABSENT_HEIGHT, |id| self[id].height)
    }

    /// Recomputes the height of `id` from its children. Must be called after any change to
    /// `id`'s children.
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let left_height = self.height(self[id].left);
        let right_height = self.height(self[id].right);
        self[id].height = 1 + cmp::max(left_height, right_height);
    }

    /// Left height minus right height, 0 for a missing node.
    pub(crate) fn balance_factor(&self, id: Option<NodeId>) -> isize {
        match id {
            Some(id) => self.height(self[id].left) - self.height(self[id].right),
            None => 0,
        }
    }

    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }
}

/// A detached subtree waiting to be inserted into a tree.
///
/// This is how callers hand a tree more than one key at a time. The keys must already respect the
/// search order (smaller keys on the left), this is not checked.
///
/// # Examples
///
/// ```
/// use bst_avl::{Subtree, Tree};
///
/// let subtree = Subtree::new(2, Some(Subtree::leaf(1)), Some(Subtree::leaf(3)));
/// assert_eq!(subtree.height(), 1);
/// assert_eq!(subtree.len(), 3);
///
/// let mut tree = Tree::new();
/// tree.insert_subtree(subtree).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtree<K> {
    key: K,
    height: isize,
    len: usize,
    left: Option<Box<Subtree<K>>>,
    right: Option<Box<Subtree<K>>>,
}

impl<K> Subtree<K> {
    /// A subtree made of a single node.
    pub fn leaf(key: K) -> Self {
        Self::new(key, None, None)
    }

    /// A subtree rooted at `key` with the given children.
    pub fn new(key: K, left: Option<Subtree<K>>, right: Option<Subtree<K>>) -> Self {
        let left_height = left.as_ref().map_or(ABSENT_HEIGHT, |n| n.height);
        let right_height = right.as_ref().map_or(ABSENT_HEIGHT, |n| n.height);
        let len = 1 + left.as_ref().map_or(0, |n| n.len) + right.as_ref().map_or(0, |n| n.len);
        Self {
            key,
            height: 1 + cmp::max(left_height, right_height),
            len,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The key at the root of this subtree.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Height of this subtree, 0 for a single node.
    pub fn height(&self) -> isize {
        self.height
    }

    /// Number of keys in this subtree.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }
}

/// A read-only view of a node inside a tree, as returned by [`Tree::search`][crate::Tree::search].
pub struct NodeRef<'a, K> {
    pool: &'a NodePool<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

/// Two views are equal when they point at the same node of the same tree.
impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.pool, other.pool) && self.id == other.id
    }
}
impl<K> Eq for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("height", &self.height())
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(pool: &'a NodePool<K>, id: NodeId) -> Self {
        Self { pool, id }
    }

    fn node(&self) -> &'a Node<K> {
        let pool = self.pool;
        &pool[self.id]
    }

    fn view(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.pool, id))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// Height of the subtree rooted here. A leaf has height 0.
    pub fn height(&self) -> isize {
        self.node().height
    }

    /// The child holding smaller keys.
    pub fn left(&self) -> Option<Self> {
        self.view(self.node().left)
    }

    /// The child holding larger keys.
    pub fn right(&self) -> Option<Self> {
        self.view(self.node().right)
    }

    /// The node this one hangs from, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.view(self.node().parent)
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        self.pool.balance_factor(Some(self.id))
    }

    /// The node holding the largest key of the left subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingSubtree`] when this node has no left child.
    pub fn predecessor(&self) -> Result<Self, TreeError> {
        let left = self.node().left.ok_or(TreeError::MissingSubtree(Side::Left))?;
        Ok(Self::new(self.pool, self.pool.maximum(left)))
    }

    /// The node holding the smallest key of the right subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingSubtree`] when this node has no right child.
    pub fn successor(&self) -> Result<Self, TreeError> {
        let right = self
            .node()
            .right
            .ok_or(TreeError::MissingSubtree(Side::Right))?;
        Ok(Self::new(self.pool, self.pool.minimum(right)))
    }
}
