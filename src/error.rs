//! Errors reported by tree operations.
//!
//! Looking up or removing a value that isn't stored is not an error: those operations report
//! absence through `Option`. Only operations that need a root to exist fail.

use thiserror::Error;

/// Errors for operations with structural preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs a root node but the tree is empty.
    #[error("Attempted to operate on an empty tree where not allowed")]
    EmptyTree,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
