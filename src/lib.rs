//! This crate exposes a capacity-bounded Binary Search Tree (BST) and an AVL
//! tree built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path
//! from the root `Node` down to a leaf `Node`. Here a leaf has a height of 0
//! and an empty tree a height of -1. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## AVL Tree
//!
//! A plain BST built from sorted keys degenerates into a chain. An AVL tree
//! adds one more invariant:
//!
//! 3. For every `Node`, the heights of its left and right subtrees differ by
//!    at most one.
//!
//! and restores it after each change with rotations, which keeps the height
//! in `O(lg N)` for `N` keys.
//!
//! # Examples
//!
//! ```
//! use bst_avl::{AvlTree, Order, Tree};
//!
//! let mut bst = Tree::new();
//! let mut avl = AvlTree::new();
//! for key in 1..=7 {
//!     bst.insert(key).unwrap();
//!     avl.insert(key).unwrap();
//! }
//!
//! assert_eq!(bst.height(), 6);
//! assert_eq!(avl.height(), 2);
//!
//! let keys: Vec<_> = avl.traverse(Order::Pre).unwrap().copied().collect();
//! assert_eq!(keys, vec![4, 2, 1, 3, 6, 5, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod config;
mod display;
mod error;
mod node;
mod traverse;
mod util;

pub use avl::AvlTree;
pub use bst::Tree;
pub use config::{TreeConfig, DEFAULT_CAPACITY};
pub use display::{Sideways, Status};
pub use error::{Side, TreeError};
pub use node::{NodeRef, Subtree};
pub use traverse::{Inorder, Order, Postorder, Preorder, Traversal};
