//! Error types for the store layer.
//!
//! Every failure here is a deterministic function of the caller's input:
//! a stale handle, a count that disagrees with its data, or an index past
//! the end of a sequence. Nothing is retried.

use crate::{Axis, PathHandle};

/// Errors raised by [`PathArena`](crate::PathArena) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The handle was never issued by this arena, or its path was destroyed.
    #[error("invalid or destroyed path handle {handle}")]
    InvalidHandle { handle: PathHandle },

    /// A `set_x`/`set_y` call declared a count that its data does not have.
    #[error("{axis} sequence declared {declared} elements but {actual} were supplied")]
    LengthMismatch {
        axis: Axis,
        declared: u64,
        actual: usize,
    },

    /// An indexed read went past the end of a sequence.
    #[error("{axis} index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { axis: Axis, index: u64, len: usize },

    /// Every handle index this arena can address is in use or retired.
    #[error("path arena exhausted its handle space")]
    ResourceExhausted,
}

impl StoreError {
    /// True for errors caused by addressing a path that is not live.
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, StoreError::InvalidHandle { .. })
    }
}
