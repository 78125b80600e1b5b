//! Error types for Arbor Core

use thiserror::Error;

/// Result type alias using Arbor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Arbor error types
///
/// Every failure the tree engine can report falls into one of these three
/// kinds. All are deterministic given the same tree state and none is
/// retryable.
#[derive(Error, Debug)]
pub enum Error {
    /// The referenced node id does not exist in the tree
    #[error("Node not found: {0}")]
    NotFound(String),

    /// The operation violates a structural rule given current state
    /// (duplicate id, second root, deleting/moving the root, expanding a
    /// branch, collapsing a leaf)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A move would make a node its own ancestor
    #[error("Circular reference: {0}")]
    CircularReference(String),
}

impl Error {
    /// True if this error is the not-found kind
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
