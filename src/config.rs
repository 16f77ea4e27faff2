//! Settings fixed when a tree is created.

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Settings for a [`Tree`][crate::Tree] or [`AvlTree`][crate::AvlTree].
///
/// # Examples
///
/// ```
/// use bst_avl::{Tree, TreeConfig};
///
/// let tree: Tree<i32> = Tree::with_config(TreeConfig::new().with_capacity(3));
/// assert_eq!(tree.capacity(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeConfig {
    /// Settings with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the maximum number of keys the tree accepts.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// The maximum number of keys the tree accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
