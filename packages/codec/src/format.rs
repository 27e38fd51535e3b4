//! Layout constants and the version tag shared by every TSF revision.
//!
//! Only the leading version tag is common to all layouts: a little-endian
//! `u32` at offset 0. Everything after it is owned by the codec registered
//! for that version.

use std::fmt;

use bytes::Buf;

use crate::CodecError;

/// File extension for persisted TSF buffers, without the dot.
pub const FILE_EXTENSION: &str = "tsf";

/// Version 1: little-endian, `u32` id, `u64` counts, `f64` values.
pub const TSF_VERSION_1: u32 = 1;

/// The version written by [`TsfCodec`](crate::TsfCodec) by default.
pub const CURRENT_VERSION: u32 = TSF_VERSION_1;

/// Width of the leading version tag.
pub const VERSION_LEN: usize = 4;

/// Width of one sequence count.
pub const COUNT_LEN: usize = 8;

/// Width of one sequence element.
pub const VALUE_LEN: usize = 8;

/// The fixed fields of a TSF buffer that can be read without decoding the
/// sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub id: u32,
    pub x_count: u64,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TSF v{} id={} x_count={}",
            self.version, self.id, self.x_count
        )
    }
}

/// Read the version tag without consuming the buffer.
pub fn read_version(bytes: &[u8]) -> Result<u32, CodecError> {
    if bytes.len() < VERSION_LEN {
        return Err(CodecError::Truncated {
            field: "version",
            needed: VERSION_LEN as u64,
            available: bytes.len(),
        });
    }
    let mut buf = bytes;
    Ok(buf.get_u32_le())
}

/// True when `file` carries the `.tsf` extension (case-insensitive).
pub fn has_tsf_extension(file: &std::path::Path) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXTENSION))
}
