//! Errors returned by fallible [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Why a [`Tree`][crate::Tree] mutation could not be carried out. A failed operation never
/// leaves the tree partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The item to remove is not stored in the tree.
    #[error("item not in tree")]
    KeyNotFound,
}
