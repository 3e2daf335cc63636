//! Data model for binary trees over integer sequences.
//!
//! # Tree representation
//! Both tree types own their nodes directly: a [Node] holds an `i32` value
//! and its children as owned slots (`Option<Box<Node>>`). Every node has
//! exactly one owner, trees are acyclic by construction, and the two tree
//! types never share nodes.
//!
//! Two concrete tree types are provided:
//!
//! | Type | Insertion rule | Duplicates |
//! |------|----------------|------------|
//! | [Bst] | value-ordered (smaller left, larger right) | dropped |
//! | [LevelTree] | breadth-first, first free slot left-to-right | kept |
//!
//! The asymmetry is inherent to the two insertion rules: the search tree
//! compares values and collapses equal ones, the level-order tree never
//! looks at values at all.
//!
//! # Traversal
//! Both trees hand out [Traversal], an explicit-stack iterator yielding
//! values in a chosen [TraversalOrder] (preorder, inorder, postorder). See
//! the [traversal] module docs for details.

pub mod bst;
pub mod level_tree;
pub mod node;
pub mod traversal;

pub use bst::Bst;
pub use level_tree::LevelTree;
pub use node::Node;
pub use traversal::Traversal;
pub use traversal::TraversalOrder;
