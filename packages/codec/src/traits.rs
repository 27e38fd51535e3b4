//! The per-version codec trait and its registry.

use bytes::Bytes;
use tsf_path_store::Path;

use crate::format::{Header, TSF_VERSION_1};
use crate::v1::TsfV1;
use crate::{CodecError, DecodeOptions};

/// One revision of the TSF layout.
///
/// Each implementation owns everything after the version tag. New layouts
/// are added as new implementations and registered in
/// [`codec_for_version`]; existing ones are never changed, so files written
/// by an older build stay readable.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Codec>`.
pub trait Codec: Send + Sync {
    /// The version tag this codec writes and accepts.
    fn version(&self) -> u32;

    /// Encode a path, version tag included.
    fn encode(&self, path: &Path) -> Result<Bytes, CodecError>;

    /// Decode a complete buffer, version tag included.
    ///
    /// The whole buffer must be consumed; leftover bytes are an error.
    fn decode(&self, bytes: &[u8]) -> Result<Path, CodecError>;

    /// Read the fixed header without decoding the sequences.
    fn header(&self, bytes: &[u8]) -> Result<Header, CodecError>;
}

/// Look up the codec for a version tag.
///
/// Returns `None` for versions this build does not know.
pub fn codec_for_version(version: u32, options: DecodeOptions) -> Option<Box<dyn Codec>> {
    match version {
        TSF_VERSION_1 => Some(Box::new(TsfV1::new(options))),
        _ => None,
    }
}

/// Version tags this build can read, oldest first.
pub fn supported_versions() -> &'static [u32] {
    &[TSF_VERSION_1]
}
