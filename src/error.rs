//! Errors reported by the trees in this crate.
//!
//! Every failure here is recoverable: the operation that reported it left the tree exactly as it
//! was. Running out of memory is not represented, the global allocator aborts the process.

use std::fmt;

use thiserror::Error;

/// Which child of a node an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The child holding smaller keys.
    Left,
    /// The child holding larger keys.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Tree operation error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// The tree already holds as many keys as it was created for.
    #[error("The tree is full (capacity {capacity}).")]
    CapacityExceeded {
        /// The capacity the tree was created with.
        capacity: usize,
    },
    /// The key being inserted is already in the tree.
    #[error("The key already exists in the tree.")]
    DuplicateKey,
    /// The operation needs at least one node.
    #[error("The tree is empty.")]
    EmptyTree,
    /// A predecessor or successor was requested from a node without the subtree it lives in.
    #[error("The node has no {0} subtree.")]
    MissingSubtree(Side),
}
