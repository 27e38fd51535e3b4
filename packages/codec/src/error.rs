//! Error types for the codec layer.

use tsf_path_store::{Axis, StoreError};

/// Errors raised while encoding, decoding or moving TSF buffers.
///
/// Decode failures are never partial: when one of these is returned, no
/// path was built and no handle was issued.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// The caller's reported length disagrees with the buffer it handed over.
    #[error("reported length {reported} does not match buffer length {actual}")]
    LengthMismatch { reported: usize, actual: usize },

    /// The buffer ends before a field it must contain.
    #[error("buffer truncated reading {field}: need {needed} more bytes, {available} available")]
    Truncated {
        field: &'static str,
        needed: u64,
        available: usize,
    },

    /// The leading version tag names a layout this build cannot read.
    #[error("unsupported TSF version {version}")]
    UnsupportedVersion { version: u32 },

    /// Bytes remain after the last field the buffer declares.
    #[error("buffer is {actual} bytes but its declared lengths account for {expected}")]
    TrailingBytes { expected: usize, actual: usize },

    /// A declared sequence length exceeds the configured element limit.
    #[error("{axis} sequence declares {count} elements, limit is {limit}")]
    TooManyElements { axis: Axis, count: u64, limit: u64 },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl CodecError {
    /// True when the input bytes themselves are malformed, as opposed to a
    /// store or transport failure around them.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodecError::LengthMismatch { .. }
                | CodecError::Truncated { .. }
                | CodecError::UnsupportedVersion { .. }
                | CodecError::TrailingBytes { .. }
                | CodecError::TooManyElements { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn truncated_display() {
        let e = CodecError::Truncated {
            field: "x_values",
            needed: 80,
            available: 12,
        };
        let display = e.to_string();
        assert!(display.contains("x_values"));
        assert!(display.contains("80"));
        assert!(display.contains("12"));
        assert!(e.is_malformed());
    }

    #[test]
    fn store_error_converts() {
        let e: CodecError = StoreError::ResourceExhausted.into();
        assert!(matches!(e, CodecError::Store(StoreError::ResourceExhausted)));
        assert!(!e.is_malformed());
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e: CodecError = io_err.into();
        assert!(matches!(e, CodecError::Io(_)));
        assert!(e.to_string().contains("file not found"));
    }
}
