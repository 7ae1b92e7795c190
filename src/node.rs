//! The owned AVL node and the pure functions that restructure subtrees.
//!
//! Every function here takes the subtree it works on by value and hands back the (possibly new)
//! subtree root, so the caller just stores whatever comes back in the link it took the subtree
//! from.

use tracing::trace;

use crate::error::{Error, Result};

/// An optional, exclusively owned child.
pub(crate) type Link = Option<Box<Node>>;

/// A `Node` owns a copy of its key and both of its children.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: String,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,

    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// Height of a possibly empty subtree.
pub(crate) fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

impl Node {
    /// Allocates a leaf holding a copy of `key`. Fails without side effects if the key's storage
    /// can't be reserved.
    pub(crate) fn new_boxed(key: &str) -> Result<Box<Self>> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(key.len())
            .map_err(|_| Error::AllocationFailure { len: key.len() })?;
        owned.push_str(key);

        Ok(Box::new(Node {
            key: owned,
            height: 1,
            left: None,
            right: None,
        }))
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Left subtree height minus right subtree height. Positive means left-heavy.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Finds the first node on the search path whose key equals `key`.
    pub(crate) fn find(&self, key: &str) -> Option<&Self> {
        let mut current = Some(self);
        while let Some(node) = current {
            current = if key == node.key {
                return Some(node);
            } else if key < node.key.as_str() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Calls `visit` with every key of this subtree in ascending order.
    pub(crate) fn visit_in_order(&self, visit: &mut impl FnMut(&str)) {
        if let Some(left) = &self.left {
            left.visit_in_order(visit);
        }
        visit(&self.key);
        if let Some(right) = &self.right {
            right.visit_in_order(visit);
        }
    }

    /// Right-to-left in-order walk that reports how deep each node sits below the subtree root.
    /// Printing each key indented by its depth draws the tree rotated a quarter turn.
    pub(crate) fn visit_structural(&self, depth: usize, visit: &mut impl FnMut(&str, usize)) {
        if let Some(right) = &self.right {
            right.visit_structural(depth + 1, visit);
        }
        visit(&self.key, depth);
        if let Some(left) = &self.left {
            left.visit_structural(depth + 1, visit);
        }
    }
}

/// Attaches `new` as a leaf under `root` and rebalances every ancestor on the way back up. Keys
/// strictly less than a node's key go left, everything else (duplicates included) goes right.
pub(crate) fn insert(root: Link, new: Box<Node>) -> Box<Node> {
    let Some(mut root) = root else {
        return new;
    };

    if new.key < root.key {
        root.left = Some(insert(root.left.take(), new));
    } else {
        root.right = Some(insert(root.right.take(), new));
    }

    rebalance(root)
}

/// Restores the AVL invariant at `root`, assuming both children already satisfy it and differ in
/// height by at most 2.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for the case names.
pub(crate) fn rebalance(mut root: Box<Node>) -> Box<Node> {
    root.fix_height();

    let balanced = match root.balance_factor() {
        bf if bf > 1 => {
            let (outer, inner) = root
                .left
                .as_ref()
                .map_or((0, 0), |l| (height(&l.left), height(&l.right)));
            // A tie resolves to the single rotation.
            if outer >= inner {
                trace!(key = %root.key, "LL case");
                rotate_right(root)
            } else {
                trace!(key = %root.key, "LR case");
                root.left = root.left.take().map(rotate_left);
                rotate_right(root)
            }
        }
        bf if bf < -1 => {
            let (outer, inner) = root
                .right
                .as_ref()
                .map_or((0, 0), |r| (height(&r.right), height(&r.left)));
            if outer >= inner {
                trace!(key = %root.key, "RR case");
                rotate_left(root)
            } else {
                trace!(key = %root.key, "RL case");
                root.right = root.right.take().map(rotate_right);
                rotate_left(root)
            }
        }
        _ => root,
    };

    if cfg!(debug_assertions) {
        let left_height = height(&balanced.left);
        let right_height = height(&balanced.right);
        assert_eq!(balanced.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
        if let Some(left) = &balanced.left {
            assert!(left.key <= balanced.key);
        }
        if let Some(right) = &balanced.right {
            assert!(right.key >= balanced.key);
        }
    }

    balanced
}

/// Rotates the left child up to become the subtree root. A subtree without a left child is
/// returned untouched.
///
/// ```text
///      root              pivot
///      /  \              /   \
///   pivot  z    ->      x    root
///   /  \                     /  \
///  x    y                   y    z
/// ```
pub(crate) fn rotate_right(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.left.take() else {
        return root;
    };

    root.left = pivot.right.take();
    root.fix_height();

    pivot.right = Some(root);
    pivot.fix_height();
    pivot
}

/// Mirror image of [`rotate_right`]: the right child moves up and `root` becomes its left child.
pub(crate) fn rotate_left(mut root: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = root.right.take() else {
        return root;
    };

    root.right = pivot.left.take();
    root.fix_height();

    pivot.left = Some(root);
    pivot.fix_height();
    pivot
}
