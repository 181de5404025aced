//! This crate exposes a linked Binary Search Tree (BST) that is balanced on demand rather than on
//! every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an item
//! and will sometimes have child `Node`s. The most important invariants
//! of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold an item
//!    less than its own item.
//! 2. For every `Node`, all the `Node`s in its right subtree hold an item
//!    greater than or equal to its own item. Equal items are stored again
//!    rather than overwritten.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an item takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. Adding items in sorted order makes that
//! path as long as the tree itself, so [`Tree::is_balanced`] reports when the
//! height has drifted too far above `O(lg N)` and [`Tree::rebalance`] rebuilds the
//! tree from its sorted items, median first.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=100).collect();
//! assert_eq!(tree.height(), 99);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 6);
//! assert_eq!(tree.find(&42), Some(&42));
//! ```

#![deny(missing_docs)]

mod balance;
pub mod error;
mod node;
mod query;
pub mod traversal;
pub mod tree;

pub use error::Error;
pub use tree::Tree;
