/// Errors raised while bulk-constructing a tree from level-ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StructureError {
    /// No keys (and no values) were supplied.
    #[error("keys and values must not be empty")]
    Empty,
    /// The key and value sequences have different lengths.
    #[error("got {keys} keys but {values} values")]
    LengthMismatch { keys: usize, values: usize },
    /// The level-order placement breaks the BST property.
    #[error("key, value pairs did not satisfy the BST property")]
    BstViolation,
    /// The same key appears more than once.
    #[error("key, value pairs contain a duplicate key")]
    DuplicateKey,
}

/// Error returned by strict insertion. Carries the rejected entry back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError<K, V> {
    #[error("insert error - duplicate key {0:?}")]
    DuplicateKey(K, V),
}

impl<K, V> InsertError<K, V> {
    pub fn into_entry(self) -> (K, V) {
        match self {
            InsertError::DuplicateKey(key, value) => (key, value),
        }
    }
}
