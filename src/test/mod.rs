//! Shared helpers for the property tests.


use crate::node::Node;

/// Walks the whole subtree and asserts the cached heights, the AVL balance and the key order.
/// Returns the subtree height.
pub(crate) fn assert_avl(node: Option<&Node>) -> usize {
    let Some(node) = node else {
        return 0;
    };

    let left_height = assert_avl(node.left.as_deref());
    let right_height = assert_avl(node.right.as_deref());

    assert_eq!(node.height, left_height.max(right_height) + 1);
    assert!(
        left_height.abs_diff(right_height) <= 1,
        "unbalanced at {:?}: {} vs {}",
        node.key,
        left_height,
        right_height
    );
    if let Some(left) = &node.left {
        assert!(left.key <= node.key);
    }
    if let Some(right) = &node.right {
        assert!(right.key >= node.key);
    }

    node.height
}

/// The tallest an AVL tree holding `n` nodes can be.
pub(crate) fn max_avl_height(n: usize) -> usize {
    (1.45 * ((n + 2) as f64).log2()) as usize
}
