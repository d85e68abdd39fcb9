use thiserror::Error;

/// Errors returned by the fallible [`Tree`](crate::Tree) operations.
///
/// A failed operation never leaves the tree partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvlError {
    /// The element being searched for or removed is not stored in the tree.
    #[error("element is not in the tree")]
    NotFound,
    /// A range query was given a lower bound greater than its upper bound.
    #[error("lower bound cannot be greater than upper bound")]
    InvertedBounds,
}
