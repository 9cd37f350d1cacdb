//! Errors reported by tree and handle operations.
//!
//! Looking for an element that isn't there is not an error: [`Tree::remove`]
//! returns `Ok(None)` and [`Tree::contains`] returns `false`.
//!
//! [`Tree::remove`]: crate::Tree::remove
//! [`Tree::contains`]: crate::Tree::contains

use thiserror::Error;

/// Everything that can go wrong when operating on a tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The handle was never created or has already been destroyed.
    #[error("the tree handle is absent (never created or already destroyed)")]
    NullHandle,
    /// The operation needs at least one element.
    #[error("the operation requires a non-empty tree")]
    EmptyTree,
    /// Memory for a new node could not be reserved. The tree was left unchanged.
    #[error("could not allocate a tree node")]
    OutOfMemory,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
