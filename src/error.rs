use thiserror::Error;

/// Error types for `intvec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IntVecError {
    /// Index is beyond the current sequence length
    #[error("Index out of bounds: index {index} is beyond sequence length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the sequence
        length: usize,
    },
}

/// Result alias for `intvec` operations
pub type Result<T> = std::result::Result<T, IntVecError>;
