/// Everything that can go wrong when operating on a [`BinarySearchTree`][crate::BinarySearchTree].
///
/// A failed operation never modifies the tree.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The value being inserted is already stored in the tree.
    #[error("value is already present in the tree")]
    DuplicateValue,
    /// The value being removed is not stored in the tree.
    #[error("value is not present in the tree")]
    ValueNotFound,
    /// The tree has no root node.
    #[error("tree is empty")]
    EmptyTree,
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;
