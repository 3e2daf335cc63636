//! Tree node storage.
//!
//! Provides [Node], the single node type shared by both tree builders.
//! A node owns its children directly (`Option<Box<Node>>`), so every node
//! has exactly one owner and trees are acyclic by construction.

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A binary tree node holding an `i32` value and owning its children.
///
/// Nodes are created on insertion and their value is never mutated
/// afterwards. Both [Bst](crate::model::Bst) and
/// [LevelTree](crate::model::LevelTree) are built from this type; the two
/// trees never share nodes.
#[derive(Debug)]
pub struct Node {
    pub(crate) value: i32,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Creates a node with no children.
    pub(crate) fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns a reference to the left child, if present.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns a reference to the right child, if present.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

// ============================================================================
// Subtree helpers (crate-internal)
// ============================================================================
/// Releases a subtree without recursing.
///
/// Children are detached onto an explicit stack before their parent is
/// dropped, so a degenerate chain of any depth (e.g. a BST built from sorted
/// input) never overflows the call stack during teardown. No-op on `None`.
pub(crate) fn take_apart(root: Option<Box<Node>>) {
    let mut stack = Vec::new();
    stack.extend(root);
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // node drops here with both child slots already empty
    }
}

/// Returns the number of levels of the subtree, 0 for `None`.
///
/// Computed level by level rather than by recursion.
pub(crate) fn height(root: Option<&Node>) -> usize {
    let mut levels = 0;
    let mut current: Vec<&Node> = Vec::new();
    current.extend(root);

    while !current.is_empty() {
        levels += 1;
        let mut next = Vec::with_capacity(current.len() * 2);
        for node in current {
            next.extend(node.left());
            next.extend(node.right());
        }
        current = next;
    }

    levels
}
