//! Errors reported by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Everything that can go wrong when talking to a [`Tree`][crate::Tree]. Both variants are
/// recoverable: a failed operation leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for a new node (or its copy of the key) couldn't be obtained.
    #[error("could not allocate storage for a key of {len} bytes")]
    AllocationFailure {
        /// Length of the key that was being inserted.
        len: usize,
    },
    /// No node holds the requested key.
    #[error("key {key:?} not found")]
    NotFound {
        /// The key that was searched for.
        key: String,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
