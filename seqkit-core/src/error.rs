use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Only offsets can be wrong: there are no other failure modes. Operations
/// never clamp an out of range offset; they report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An offset lies outside `0..=len` of the sequence it was applied to.
    #[error("offset {index} is out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
