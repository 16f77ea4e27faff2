//! Human readable views of a tree.

use std::fmt;

use crate::node::{NodeId, NodePool};

/// A snapshot of a tree's bookkeeping. See [`Tree::status`][crate::Tree::status].
///
/// Its `Display` output is one `Label: value` line per field:
///
/// ```
/// use bst_avl::Tree;
///
/// let mut tree = Tree::with_capacity(10);
/// tree.insert(7).unwrap();
///
/// assert_eq!(
///     tree.status().to_string(),
///     "Size: 1\nMax Size: 10\nRoot: 7\nHeight: 0\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status<'a, K> {
    /// Number of keys in the tree.
    pub size: usize,
    /// Maximum number of keys the tree accepts.
    pub capacity: usize,
    /// Key at the root, `None` when empty.
    pub root: Option<&'a K>,
    /// Height of the root, -1 when empty.
    pub height: isize,
}

impl<K> fmt::Display for Status<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "Max Size: {}", self.capacity)?;
        match self.root {
            Some(root) => writeln!(f, "Root: {root}")?,
            None => writeln!(f, "Root: NULL")?,
        }
        writeln!(f, "Height: {}", self.height)
    }
}

/// Draws a tree rotated by +90 degrees: the right subtree above its parent, the left subtree
/// below, one tab per level and `key(height)` on each line. See
/// [`Tree::sideways`][crate::Tree::sideways].
pub struct Sideways<'a, K> {
    pool: &'a NodePool<K>,
    root: Option<NodeId>,
}

impl<'a, K> Sideways<'a, K> {
    pub(crate) fn new(pool: &'a NodePool<K>, root: Option<NodeId>) -> Self {
        Self { pool, root }
    }
}

impl<K> fmt::Display for Sideways<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order walk, carrying each node's depth on the stack.
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.root.map(|id| (id, 0));
        loop {
            while let Some((id, depth)) = current {
                stack.push((id, depth));
                current = self.pool[id].right.map(|right| (right, depth + 1));
            }
            let Some((id, depth)) = stack.pop() else {
                return Ok(());
            };
            let node = &self.pool[id];
            for _ in 0..depth {
                f.write_str("\t")?;
            }
            writeln!(f, "{}({})", node.key, node.height)?;
            current = node.left.map(|left| (left, depth + 1));
        }
    }
}
