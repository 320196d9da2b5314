//! Error types reported by [`Tree`](crate::tree::Tree) operations.
//!
//! Every failure here is synchronous and reported straight back to the
//! caller. Inserting a duplicate value and removing an absent value are
//! silent no-ops, not errors.

use thiserror::Error;

/// Failures raised by tree construction and queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// [`Tree::build`](crate::tree::Tree::build) was called with no values.
    #[error("cannot build a tree from an empty set of values")]
    EmptyInput,

    /// [`Tree::find`](crate::tree::Tree::find) was called without a value to
    /// search for.
    #[error("a search requires a value to look for")]
    InvalidQuery,

    /// A [`find`](crate::tree::Tree::find) descent reached an empty subtree
    /// without matching. Searching a tree with no root lands here too.
    #[error("the tree has no node holding {0}")]
    EmptyTree(i64),

    /// A [`depth`](crate::tree::Tree::depth) descent ran off the tree
    /// without reaching the target node.
    #[error("node with value {0} is not in this tree")]
    NodeNotFound(i64),
}

/// Result alias for tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;
