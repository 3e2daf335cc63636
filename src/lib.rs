//! Treefold builds two binary trees from a sequence of integers and walks
//! them in the three classic depth-first orders.
//!
//! Given the same input sequence, the crate constructs two independent
//! trees:
//! - [Bst](model::Bst): a binary search tree ordered by value; smaller
//!   values go left, larger go right, duplicates are dropped.
//! - [LevelTree](model::LevelTree): a binary tree filled strictly in
//!   level order, left to right, ignoring value order; after N insertions
//!   it always has the complete-tree shape for N nodes.
//!
//! Both trees yield their values through the same
//! [Traversal](model::Traversal) iterator in a chosen
//! [TraversalOrder](model::TraversalOrder) (preorder, inorder, postorder).
//! Insertion, traversal, and teardown are all iterative with explicit
//! stacks/worklists, so degenerate shapes (a BST fed sorted input collapses
//! into a chain) are handled at any depth.
//!
//! Input comes from a forgiving line-oriented scanner (see [parser]): one
//! integer per line, whitespace-only and malformed lines silently skipped,
//! trailing content after the number ignored.
//!
//! Limitations:
//! - Values are `i32`
//! - Construction only: no deletion, no balancing, no lookup API
//!
//! # Usage patterns
//! 1. The quick functions below read a value sequence from a string or
//!    file; feed it to [`model::Bst::from_values`] /
//!    [`model::LevelTree::from_values`].
//! 2. For incremental construction, create an empty tree and call `insert`
//!    per value.
//!
//! ## Example
//! ```
//! use treefold::model::{Bst, LevelTree};
//! use treefold::read_values_str;
//!
//! let values = read_values_str("10\n5\n15\n3\n7\n");
//!
//! let bst = Bst::from_values(values.iter().copied());
//! assert_eq!(bst.inorder(), vec![3, 5, 7, 10, 15]);
//!
//! let level = LevelTree::from_values(values);
//! assert_eq!(level.preorder(), vec![10, 5, 3, 7, 15]);
//! ```

pub mod model;
pub mod parser;

use std::io;
use std::path::Path;

// ============================================================================
// Quick input API
// ============================================================================
/// Reads a value sequence from a string using the line-oriented scanning
/// rule.
///
/// See [`parser::read_values_str`] for full documentation.
pub fn read_values_str<S: AsRef<str>>(input: S) -> Vec<i32> {
    parser::read_values_str(input)
}

/// Reads a value sequence from the file at `path`.
///
/// See [`parser::read_values_file`] for full documentation.
pub fn read_values_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<i32>> {
    parser::read_values_file(path)
}
