
use std::fmt::Debug;

use crate::linked::Node;
use crate::Tree;

/// Walks the whole tree and asserts that every element sits between the
/// bounds set by its ancestors (left <= node <= right) and that `len` matches
/// the number of reachable nodes.
pub(crate) fn assert_invariants<T: Ord + Debug>(tree: &Tree<T>) {
    let mut count = 0;
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = tree
        .root
        .as_deref()
        .map(|root| (root, None, None))
        .into_iter()
        .collect();

    while let Some((node, low, high)) = stack.pop() {
        count += 1;
        if let Some(low) = low {
            assert!(*low <= node.data, "{:?} is left of {:?}", node.data, low);
        }
        if let Some(high) = high {
            assert!(node.data <= *high, "{:?} is right of {:?}", node.data, high);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, low, Some(&node.data)));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some(&node.data), high));
        }
    }

    assert_eq!(count, tree.len());
    assert_eq!(tree.root.is_none(), tree.is_empty());
}
