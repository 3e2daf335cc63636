//! Depth-first traversal over borrowed trees.
//!
//! Provides [TraversalOrder] and the [Traversal] iterator, which yields node
//! values in preorder, inorder, or postorder. The iterator is driven by an
//! explicit stack of work steps instead of recursion, so traversing a
//! degenerate tree (e.g. a BST built from sorted input) is safe at any depth.

use crate::model::node::Node;

// =#========================================================================#=
// TRAVERSAL ORDER
// =#========================================================================#=
/// The three depth-first traversal orders.
///
/// The order determines when a node's own value is visited relative to its
/// subtrees:
/// * `Preorder` - value, left subtree, right subtree
/// * `Inorder` - left subtree, value, right subtree
/// * `Postorder` - left subtree, right subtree, value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    Preorder,
    Inorder,
    Postorder,
}

// =#========================================================================#=
// TRAVERSAL ITERATOR
// =#========================================================================#=
/// One pending unit of traversal work.
///
/// `Descend` expands a subtree into further steps; `Emit` yields a value
/// whose position in the output was already fixed when its node was expanded.
enum Step<'a> {
    Descend(&'a Node),
    Emit(i32),
}

/// Iterator over the values of a tree in a fixed [TraversalOrder].
///
/// Obtained from [`Bst::traverse`](crate::model::Bst::traverse) or
/// [`LevelTree::traverse`](crate::model::LevelTree::traverse). An empty tree
/// yields an empty iterator. The same tree and order always produce the same
/// sequence, and a fresh iterator can be requested any number of times.
///
/// # Example
/// ```
/// use treefold::model::{Bst, TraversalOrder};
///
/// let bst = Bst::from_values([10, 5, 15, 3, 7]);
/// let inorder: Vec<i32> = bst.traverse(TraversalOrder::Inorder).collect();
/// assert_eq!(inorder, vec![3, 5, 7, 10, 15]);
/// ```
pub struct Traversal<'a> {
    order: TraversalOrder,
    stack: Vec<Step<'a>>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a Node>, order: TraversalOrder) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Step::Descend(root));
        }
        Self { order, stack }
    }
}

impl Iterator for Traversal<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some(step) = self.stack.pop() {
            let node = match step {
                Step::Emit(value) => return Some(value),
                Step::Descend(node) => node,
            };

            // Push the continuation in reverse, so the first part of the
            // order is popped first.
            match self.order {
                TraversalOrder::Preorder => {
                    if let Some(right) = node.right() {
                        self.stack.push(Step::Descend(right));
                    }
                    if let Some(left) = node.left() {
                        self.stack.push(Step::Descend(left));
                    }
                    return Some(node.value());
                }
                TraversalOrder::Inorder => {
                    if let Some(right) = node.right() {
                        self.stack.push(Step::Descend(right));
                    }
                    self.stack.push(Step::Emit(node.value()));
                    if let Some(left) = node.left() {
                        self.stack.push(Step::Descend(left));
                    }
                }
                TraversalOrder::Postorder => {
                    self.stack.push(Step::Emit(node.value()));
                    if let Some(right) = node.right() {
                        self.stack.push(Step::Descend(right));
                    }
                    if let Some(left) = node.left() {
                        self.stack.push(Step::Descend(left));
                    }
                }
            }
        }

        None
    }
}
