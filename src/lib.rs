//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that was
//! inserted and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, a value is stored at most once. Inserting a
//! value that is already present fails with [`Error::DuplicateValue`].
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree does no rebalancing so
//! inserting values in sorted order produces a tree whose height is the number of
//! values. Every walk over the tree is iterative so such trees are slow but never
//! overflow the stack.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use search_tree::{BinarySearchTree, Error};
//!
//! let mut tree = BinarySearchTree::from_values([4, 1, 6, 0, 12, 7, 13, 5]).unwrap();
//!
//! assert_eq!(tree.count(), 8);
//! assert_eq!(tree.to_array(), vec![4, 1, 6, 0, 5, 12, 7, 13]);
//! assert_eq!(tree.insert(6), Err(Error::DuplicateValue));
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert_eq!(tree.remove(&6), Ok(6));
//! assert_eq!(tree.to_array(), vec![4, 1, 7, 0, 5, 12, 13]);
//!
//! // In-order iteration is sorted.
//! assert!(tree.iter().copied().eq([0, 1, 4, 5, 7, 12, 13]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod render;
pub mod traversal;
mod tree;

pub use error::{Error, Result};
pub use render::Pretty;
pub use tree::BinarySearchTree;
