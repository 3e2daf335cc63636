//! Binary search tree built by value-ordered insertion.

use std::cmp::Ordering;

use crate::model::node::{self, Node};
use crate::model::traversal::{Traversal, TraversalOrder};

// =#========================================================================#=
// BST
// =#========================================================================#=
/// A binary search tree over `i32` values.
///
/// For every node, all values in its left subtree are strictly smaller and
/// all values in its right subtree strictly larger than the node's value.
/// Inserting a value already present leaves the tree unchanged, so the tree
/// holds each value at most once.
///
/// There is no balancing: insertion order determines the shape. Inserting
/// values in sorted order yields a right-leaning chain; all operations stay
/// safe on such chains because insertion, traversal, and teardown are
/// iterative.
///
/// # Example
/// ```
/// use treefold::model::Bst;
///
/// let bst = Bst::from_values([5, 3, 5, 8, 3]);
/// assert_eq!(bst.len(), 3); // duplicates dropped
/// assert_eq!(bst.inorder(), vec![3, 5, 8]);
/// ```
#[derive(Debug)]
pub struct Bst {
    root: Option<Box<Node>>,
    len: usize,
}

impl Bst {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting `values` in iteration order.
    ///
    /// The fold starts from the empty tree; since there is no rebalancing,
    /// the input order fully determines the final shape.
    pub fn from_values<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut bst = Self::new();
        for value in values {
            bst.insert(value);
        }
        bst
    }

    /// Inserts `value`, keeping the search-tree ordering.
    ///
    /// Descends iteratively from the root: strictly smaller values go left,
    /// strictly larger values go right. A value already present is a
    /// duplicate and is dropped without error.
    ///
    /// # Returns
    /// `true` if a node was attached, `false` if `value` was a duplicate.
    pub fn insert(&mut self, value: i32) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Returns a reference to the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns the number of nodes (distinct inserted values).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Returns an iterator over the node values in the given order.
    ///
    /// Each call starts a fresh pass over the same tree.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_> {
        Traversal::new(self.root(), order)
    }

    /// Collects the preorder sequence (value, left, right).
    pub fn preorder(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::Preorder).collect()
    }

    /// Collects the inorder sequence (left, value, right).
    ///
    /// For a search tree this is always strictly increasing.
    pub fn inorder(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::Inorder).collect()
    }

    /// Collects the postorder sequence (left, right, value).
    pub fn postorder(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::Postorder).collect()
    }
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i32> for Bst {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl Drop for Bst {
    fn drop(&mut self) {
        // Iterative teardown; default recursive drop would overflow the
        // stack on long chains.
        node::take_apart(self.root.take());
    }
}
