//! Binary tree built by strict level-order insertion.

use std::collections::VecDeque;

use crate::model::node::{self, Node};
use crate::model::traversal::{Traversal, TraversalOrder};

// =#========================================================================#=
// LEVEL TREE
// =#========================================================================#=
/// A binary tree filled breadth-first, left to right, ignoring value order.
///
/// Each insertion attaches a new leaf in the first empty child slot found by
/// a breadth-first scan from the root, so after inserting N values the tree
/// always has the complete-binary-tree shape for N nodes: every level full
/// except possibly the last, which fills left to right. Value equality is
/// never consulted, so duplicates are kept.
///
/// The scan uses a transient FIFO worklist of node references per insert
/// call; nothing is persisted between calls, and the root never changes once
/// set because slot-filling only ever adds leaves.
///
/// # Example
/// ```
/// use treefold::model::LevelTree;
///
/// let tree = LevelTree::from_values([1, 2, 3, 4, 5]);
/// // root=1, root.left=2, root.right=3, root.left.left=4, root.left.right=5
/// assert_eq!(tree.preorder(), vec![1, 2, 4, 5, 3]);
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(Debug)]
pub struct LevelTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl LevelTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting `values` in iteration order.
    ///
    /// The input order fully determines which value occupies which position:
    /// first value → root, second → root.left, third → root.right, fourth →
    /// root.left.left, and so on, independent of value magnitude.
    pub fn from_values<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Attaches `value` as a new leaf in the first free slot in
    /// breadth-first order.
    ///
    /// The new node is created up front since it is always attached
    /// somewhere. Scanning stops at the first empty left-then-right child
    /// slot; remaining worklist entries are discarded with the call.
    ///
    /// # Panics
    /// Panics if the worklist drains without finding a free slot. That
    /// cannot happen for a tree grown by this method and would indicate a
    /// defect, so it fails loudly rather than producing a malformed tree.
    pub fn insert(&mut self, value: i32) {
        let new_node = Box::new(Node::new(value));
        self.len += 1;

        let Some(root) = self.root.as_mut() else {
            self.root = Some(new_node);
            return;
        };

        let mut worklist: VecDeque<&mut Box<Node>> = VecDeque::new();
        worklist.push_back(root);

        while let Some(current) = worklist.pop_front() {
            match &mut current.left {
                slot @ None => {
                    *slot = Some(new_node);
                    return;
                }
                Some(left) => worklist.push_back(left),
            }
            match &mut current.right {
                slot @ None => {
                    *slot = Some(new_node);
                    return;
                }
                Some(right) => worklist.push_back(right),
            }
        }

        unreachable!("level-order worklist drained without an open child slot");
    }

    /// Returns a reference to the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns the number of nodes, which equals the number of inserted
    /// values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels, 0 for an empty tree.
    ///
    /// By the complete-shape invariant this is `floor(log2(len)) + 1` for a
    /// non-empty tree.
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
    pub fn inorder(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::Inorder).collect()
    }

    /// Collects the postorder sequence (left, right, value).
    pub fn postorder(&self) -> Vec<i32> {
        self.traverse(TraversalOrder::Postorder).collect()
    }
}

impl Default for LevelTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i32> for LevelTree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl Drop for LevelTree {
    fn drop(&mut self) {
        node::take_apart(self.root.take());
    }
}
