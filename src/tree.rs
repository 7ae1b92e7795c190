//! The tree handle. It owns the root node and keeps a running count of inserted keys.
//!
//! # Examples
//!
//! ```
//! use avl_str::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(matches!(tree.retrieve("fig"), Err(Error::NotFound { .. })));
//!
//! tree.insert("fig")?;
//! tree.insert("apple")?;
//! tree.insert("fig")?;
//!
//! // Duplicates are kept and counted.
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.retrieve("fig")?, "fig");
//!
//! // Keys come back in ascending order.
//! assert_eq!(tree.iter().collect::<Vec<_>>(), ["apple", "fig", "fig"]);
//!
//! tree.destroy();
//! # Ok::<(), Error>(())
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of string keys. Keys that
/// compare equal are all kept; each lands in the right subtree of the first equal key met on the
/// way down.
pub struct Tree {
    root: Link,
    count: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    /// Releases every node children-first. This uses an explicit stack instead of recursion.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        let mut released = 0usize;

        while let Some(mut node) = stack.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => {
                    released += 1;
                    drop(node);
                }
                (left, right) => {
                    // Revisit this node once both children are gone.
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }

        if released > 0 {
            debug!(released, "released tree nodes");
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("count", &self.count)
            .field("root", &self.root)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`. An empty tree owns no heap memory.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Fallible counterpart of [`Tree::new`] for callers that treat creation like any other
    /// operation that may run out of memory. Creating an empty tree never allocates, so this
    /// always succeeds.
    pub fn create() -> Result<Self> {
        Ok(Self::new())
    }

    /// Builds a tree by inserting `keys` in order. Stops at the first key that can't be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_str::Tree;
    ///
    /// let tree = Tree::try_from_keys(["b", "a", "c"]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn try_from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key.as_ref())?;
        }
        Ok(tree)
    }

    /// Inserts a copy of `key` and rebalances. Inserting a key that is already present adds
    /// another node for it rather than replacing the existing one.
    ///
    /// If storage for the key can't be obtained, [`Error::AllocationFailure`] is returned and the
    /// tree is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_str::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("kiwi").unwrap();
    /// tree.insert("kiwi").unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.retrieve("kiwi"), Ok("kiwi"));
    /// ```
    pub fn insert(&mut self, key: &str) -> Result<()> {
        let new = Node::new_boxed(key).map_err(|err| {
            warn!(len = key.len(), "failed to allocate node");
            err
        })?;

        self.root = Some(node::insert(self.root.take(), new));
        self.count += 1;
        Ok(())
    }

    /// Finds the stored copy of `key`. With duplicates present this is the first match on the
    /// search path, which is usually the shallowest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_str::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("plum").unwrap();
    ///
    /// assert_eq!(tree.retrieve("plum"), Ok("plum"));
    /// assert_eq!(
    ///     tree.retrieve("lime"),
    ///     Err(Error::NotFound { key: "lime".into() })
    /// );
    /// ```
    pub fn retrieve(&self, key: &str) -> Result<&str> {
        self.root
            .as_deref()
            .and_then(|root| root.find(key))
            .map(|node| node.key.as_str())
            .ok_or_else(|| Error::NotFound { key: key.into() })
    }

    /// Whether at least one node holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.retrieve(key).is_ok()
    }

    /// Number of keys inserted so far, duplicates included.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.count)
    }

    /// Calls `visit` with every key in ascending order.
    pub fn traverse(&self, mut visit: impl FnMut(&str)) {
        if let Some(root) = &self.root {
            root.visit_in_order(&mut visit);
        }
    }

    /// Calls `visit` with every key and its depth (0 at the root), right subtree first. Writing
    /// each key on its own line indented by its depth shows the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_str::Tree;
    ///
    /// let tree = Tree::try_from_keys(["A", "B", "C"]).unwrap();
    ///
    /// let mut drawing = String::new();
    /// tree.traverse_structural(|key, depth| {
    ///     drawing.push_str(&"\t".repeat(depth));
    ///     drawing.push_str(key);
    ///     drawing.push('\n');
    /// });
    ///
    /// assert_eq!(drawing, "\tC\nB\n\tA\n");
    /// ```
    pub fn traverse_structural(&self, mut visit: impl FnMut(&str, usize)) {
        if let Some(root) = &self.root {
            root.visit_structural(0, &mut visit);
        }
    }

    /// Releases every node and the handle itself. Going out of scope does the same.
    pub fn destroy(self) {
        drop(self);
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}
