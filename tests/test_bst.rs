use pretty_assertions::assert_eq;
use treefold::model::{Bst, TraversalOrder};

#[test]
fn test_empty_tree() {
    let bst = Bst::new();
    assert!(bst.is_empty());
    assert_eq!(bst.len(), 0);
    assert_eq!(bst.height(), 0);
    assert!(bst.root().is_none());
    assert_eq!(bst.preorder(), Vec::<i32>::new());
    assert_eq!(bst.inorder(), Vec::<i32>::new());
    assert_eq!(bst.postorder(), Vec::<i32>::new());
}

#[test]
fn test_single_value() {
    let bst = Bst::from_values([42]);
    assert_eq!(bst.len(), 1);
    assert_eq!(bst.height(), 1);
    assert_eq!(bst.root().map(|root| root.value()), Some(42));
    assert_eq!(bst.preorder(), vec![42]);
}

#[test]
fn test_scenario_traversals() {
    let bst = Bst::from_values([10, 5, 15, 3, 7]);
    assert_eq!(bst.preorder(), vec![10, 5, 3, 7, 15]);
    assert_eq!(bst.inorder(), vec![3, 5, 7, 10, 15]);
    assert_eq!(bst.postorder(), vec![3, 7, 5, 15, 10]);
}

#[test]
fn test_scenario_structure() {
    let bst = Bst::from_values([10, 5, 15, 3, 7]);
    let root = bst.root().unwrap();
    assert_eq!(root.value(), 10);

    let left = root.left().unwrap();
    assert_eq!(left.value(), 5);
    assert_eq!(left.left().map(|node| node.value()), Some(3));
    assert_eq!(left.right().map(|node| node.value()), Some(7));

    let right = root.right().unwrap();
    assert_eq!(right.value(), 15);
    assert!(right.left().is_none());
    assert!(right.right().is_none());

    assert_eq!(bst.height(), 3);
}

#[test]
fn test_insert_reports_duplicates() {
    let mut bst = Bst::new();
    assert!(bst.insert(5));
    assert!(bst.insert(3));
    assert!(!bst.insert(5));
    assert!(bst.insert(8));
    assert!(!bst.insert(3));
    assert_eq!(bst.len(), 3);
    assert_eq!(bst.inorder(), vec![3, 5, 8]);
}

#[test]
fn test_duplicates_leave_tree_unchanged() {
    let bst = Bst::from_values([5, 3, 5, 8, 3]);
    let reference = Bst::from_values([5, 3, 8]);
    assert_eq!(bst.len(), 3);
    assert_eq!(bst.preorder(), reference.preorder());
    assert_eq!(bst.postorder(), reference.postorder());
}

#[test]
fn test_negative_and_mixed_values() {
    let bst = Bst::from_values([0, -10, 10, -5, 5]);
    assert_eq!(bst.inorder(), vec![-10, -5, 0, 5, 10]);
    assert_eq!(bst.root().map(|root| root.value()), Some(0));
}

#[test]
fn test_sorted_input_degenerates_into_chain() {
    // No rebalancing: sorted input produces a right-leaning chain.
    let n = 10_000;
    let bst = Bst::from_values(0..n);
    assert_eq!(bst.len(), n as usize);
    assert_eq!(bst.height(), n as usize);

    // Iterative traversal and teardown handle the full depth.
    let inorder = bst.inorder();
    assert_eq!(inorder.len(), n as usize);
    assert!(inorder.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(bst.preorder(), inorder);
}

#[test]
fn test_traverse_is_repeatable() {
    let bst = Bst::from_values([4, 2, 6, 1, 3, 5, 7]);
    let first: Vec<i32> = bst.traverse(TraversalOrder::Postorder).collect();
    let second: Vec<i32> = bst.traverse(TraversalOrder::Postorder).collect();
    assert_eq!(first, second);
}

#[test]
fn test_collect_from_iterator() {
    let bst: Bst = [7, 1, 9, 1].into_iter().collect();
    assert_eq!(bst.inorder(), vec![1, 7, 9]);
}
