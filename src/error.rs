/// Errors returned by fallible [`Tree`][crate::Tree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// `remove` was asked for an item the tree does not hold.
    #[error("item not found in tree")]
    NotFound,
}
