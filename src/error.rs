//! Errors reported by `RingBuffer` operations.

use thiserror::Error;

/// Result type for fallible `RingBuffer` operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error value for a failed `RingBuffer` operation.
///
/// Every variant is recoverable; the buffer is left unchanged when an
/// operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The buffer was constructed with a capacity below one.
    #[error("capacity must be at least 1, got {capacity}")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: usize,
    },

    /// A pop or peek was attempted on an empty buffer.
    #[error("the buffer is empty")]
    EmptyBuffer,

    /// The head was updated while the buffer was empty.
    #[error("cannot update the head of an empty buffer")]
    InvalidOperation,

    /// A logical index outside `0..len()` was used.
    #[error(transparent)]
    IndexOutOfRange(#[from] OutOfRange),
}

/// The two ways a logical index can miss the live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum OutOfRange {
    /// The buffer holds no elements at all.
    #[error("index out of range: the buffer is empty but the index is {index}")]
    Empty {
        /// The requested logical index.
        index: usize,
    },

    /// The index is at or past the number of live elements.
    #[error("index out of range: the len is {len} but the index is {index}")]
    BeyondCount {
        /// The requested logical index.
        index: usize,
        /// The number of live elements.
        len: usize,
    },
}

impl OutOfRange {
    pub(crate) fn check(index: usize, len: usize) -> Result<(), OutOfRange> {
        if len == 0 {
            Err(OutOfRange::Empty { index })
        } else if index >= len {
            Err(OutOfRange::BeyondCount { index, len })
        } else {
            Ok(())
        }
    }
}
