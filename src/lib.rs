//! A height-balanced Binary Search Tree (an AVL tree) of string keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree keeps its records sorted by storing them in `Node`s. Each `Node` holds
//! a key and up to two child `Node`s. For every `Node`, keys in its left subtree compare less
//! than its own key and keys in its right subtree compare greater than or equal to it.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a
//! leaf. An unbalanced tree fed sorted input degrades into a linked list with `height == N`.
//!
//! ## AVL invariant
//!
//! Every `Node` caches the height of its subtree. After each insert, every ancestor of the new
//! leaf checks that its children's heights differ by at most one and, if not, rotates to fix
//! it. That keeps the height below roughly `1.44 * lg(N + 2)`, so inserting, retrieving and the
//! recursion depth of every operation are all `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl_str::Tree;
//!
//! let mut tree = Tree::new();
//! for word in ["delta", "alpha", "charlie", "bravo"] {
//!     tree.insert(word).unwrap();
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 3);
//! assert!(tree.retrieve("echo").is_err());
//! assert_eq!(
//!     tree.iter().collect::<Vec<_>>(),
//!     ["alpha", "bravo", "charlie", "delta"]
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use iter::Iter;
pub use tree::Tree;
