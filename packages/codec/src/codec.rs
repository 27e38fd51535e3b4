//! Serialization of stored paths.

use bytes::Bytes;
use tsf_path_store::{Path, PathArena, PathHandle};

use crate::format::{self, Header, CURRENT_VERSION};
use crate::traits::codec_for_version;
use crate::{CodecError, DecodeOptions};

/// Reads and writes TSF buffers for paths held in a [`PathArena`].
///
/// Writing always uses one version (by default [`CURRENT_VERSION`]).
/// Reading dispatches on the buffer's own version tag, so files written by
/// any supported revision stay readable.
///
/// # Example
///
/// ```rust
/// use tsf_codec::{CodecError, TsfCodec};
/// use tsf_path_store::PathArena;
///
/// let codec = TsfCodec::new();
/// let mut arena = PathArena::new();
///
/// let original = arena.create(5)?;
/// arena.set_x(original, &[0.5, 1.5], 2)?;
/// let bytes = codec.serialize(&arena, original)?;
///
/// let copy = codec.deserialize(&mut arena, &bytes, Some(bytes.len()))?;
/// assert_eq!(arena.id(copy)?, 5);
/// assert_eq!(&*arena.x(copy)?, &[0.5, 1.5]);
/// # Ok::<(), CodecError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TsfCodec {
    options: DecodeOptions,
    write_version: u32,
}

impl Default for TsfCodec {
    fn default() -> Self {
        Self::with_options(DecodeOptions::default())
    }
}

impl TsfCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            options,
            write_version: CURRENT_VERSION,
        }
    }

    /// Write a specific layout revision instead of the current one.
    pub fn writing_version(mut self, version: u32) -> Result<Self, CodecError> {
        if codec_for_version(version, self.options).is_none() {
            return Err(CodecError::UnsupportedVersion { version });
        }
        self.write_version = version;
        Ok(self)
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn write_version(&self) -> u32 {
        self.write_version
    }

    // === Paths ===

    pub fn encode(&self, path: &Path) -> Result<Bytes, CodecError> {
        let codec = codec_for_version(self.write_version, self.options).ok_or(
            CodecError::UnsupportedVersion {
                version: self.write_version,
            },
        )?;
        let bytes = codec.encode(path)?;
        log::debug!(
            "encoded path id {} as TSF v{} ({} bytes)",
            path.id(),
            self.write_version,
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decode a buffer into a new path.
    ///
    /// `length` is the size the caller believes the buffer has; pass `None`
    /// when the slice length is authoritative. A reported length that
    /// differs from `bytes.len()` is rejected before anything is read.
    pub fn decode(&self, bytes: &[u8], length: Option<usize>) -> Result<Path, CodecError> {
        if let Some(reported) = length {
            if reported != bytes.len() {
                return Err(CodecError::LengthMismatch {
                    reported,
                    actual: bytes.len(),
                });
            }
        }

        let version = format::read_version(bytes)?;
        let codec = codec_for_version(version, self.options)
            .ok_or(CodecError::UnsupportedVersion { version })?;
        let path = codec.decode(bytes).inspect_err(|e| {
            log::debug!("rejected {} byte TSF buffer: {}", bytes.len(), e);
        })?;

        log::debug!(
            "decoded path id {} from TSF v{} ({} bytes)",
            path.id(),
            version,
            bytes.len()
        );
        Ok(path)
    }

    /// Read the fixed header fields without decoding the sequences.
    pub fn peek_header(&self, bytes: &[u8]) -> Result<Header, CodecError> {
        let version = format::read_version(bytes)?;
        codec_for_version(version, self.options)
            .ok_or(CodecError::UnsupportedVersion { version })?
            .header(bytes)
    }

    // === Arena ===

    /// Encode the path behind `handle`. The path is left untouched.
    pub fn serialize(&self, arena: &PathArena, handle: PathHandle) -> Result<Bytes, CodecError> {
        self.encode(arena.get(handle)?)
    }

    /// Decode a buffer into a brand-new path in `arena`.
    ///
    /// The path is fully decoded before it is inserted, so on any error the
    /// arena is unchanged and no handle exists.
    pub fn deserialize(
        &self,
        arena: &mut PathArena,
        bytes: &[u8],
        length: Option<usize>,
    ) -> Result<PathHandle, CodecError> {
        let path = self.decode(bytes, length)?;
        Ok(arena.insert(path)?)
    }
}

/// [`TsfCodec::serialize`] with default options.
pub fn serialize(arena: &PathArena, handle: PathHandle) -> Result<Bytes, CodecError> {
    TsfCodec::default().serialize(arena, handle)
}

/// [`TsfCodec::deserialize`] with default options.
pub fn deserialize(
    arena: &mut PathArena,
    bytes: &[u8],
    length: Option<usize>,
) -> Result<PathHandle, CodecError> {
    TsfCodec::default().deserialize(arena, bytes, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(arena: &mut PathArena, id: u32, n: usize) -> PathHandle {
        let handle = arena.create(id).unwrap();
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = (0..n).map(|i| -(i as f64)).collect();
        arena.set_x(handle, &x, n as u64).unwrap();
        arena.set_y(handle, &y, n as u64).unwrap();
        handle
    }

    #[test]
    fn serialize_leaves_store_live() {
        let mut arena = PathArena::new();
        let handle = populated(&mut arena, 4, 10);
        let before = arena.get(handle).unwrap().clone();

        let codec = TsfCodec::new();
        let first = codec.serialize(&arena, handle).unwrap();
        let second = codec.serialize(&arena, handle).unwrap();

        assert_eq!(first, second);
        assert_eq!(arena.get(handle).unwrap(), &before);
    }

    #[test]
    fn deserialize_creates_new_handle() {
        let mut arena = PathArena::new();
        let original = populated(&mut arena, 4, 10);
        let bytes = serialize(&arena, original).unwrap();

        let copy = deserialize(&mut arena, &bytes, None).unwrap();
        assert_ne!(copy, original);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(copy).unwrap(), arena.get(original).unwrap());

        arena.destroy(original).unwrap();
        assert_eq!(arena.x_count(copy), Ok(10));
    }

    #[test]
    fn serialize_destroyed_handle_fails() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.destroy(handle).unwrap();

        let err = serialize(&arena, handle).unwrap_err();
        assert!(matches!(err, CodecError::Store(e) if e.is_invalid_handle()));
    }

    #[test]
    fn reported_length_must_match() {
        let mut arena = PathArena::new();
        let handle = populated(&mut arena, 1, 3);
        let bytes = serialize(&arena, handle).unwrap();

        for reported in [0, bytes.len() - 1, bytes.len() + 1] {
            let err = deserialize(&mut arena, &bytes, Some(reported)).unwrap_err();
            assert!(matches!(err, CodecError::LengthMismatch { .. }));
        }
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn failed_decode_leaves_arena_unchanged() {
        let mut arena = PathArena::new();
        let cases: [&[u8]; 4] = [
            &[],
            &[1, 0, 0],
            &[1, 0, 0, 0, 5, 0],
            &[9, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        for bytes in cases {
            assert!(deserialize(&mut arena, bytes, None).is_err());
        }
        assert!(arena.is_empty());
    }

    #[test]
    fn unknown_version_is_reported() {
        let mut bytes = TsfCodec::new().encode(&Path::new(1)).unwrap().to_vec();
        bytes[..4].copy_from_slice(&7u32.to_le_bytes());
        let err = TsfCodec::new().decode(&bytes, None).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedVersion { version: 7 }));
    }

    #[test]
    fn writing_unknown_version_is_refused() {
        assert!(TsfCodec::new().writing_version(2).is_err());
        assert_eq!(TsfCodec::new().writing_version(1).unwrap().write_version(), 1);
    }

    #[test]
    fn element_limit_applies_on_deserialize() {
        let mut arena = PathArena::new();
        let handle = populated(&mut arena, 1, 100);
        let bytes = serialize(&arena, handle).unwrap();

        let strict = TsfCodec::with_options(DecodeOptions::with_max_elements(99));
        let err = strict.deserialize(&mut arena, &bytes, None).unwrap_err();
        assert!(matches!(err, CodecError::TooManyElements { count: 100, .. }));
    }

    #[test]
    fn limited_codec_serializes_only_what_it_can_read() {
        let mut arena = PathArena::new();
        let strict = TsfCodec::with_options(DecodeOptions::with_max_elements(2));

        for n in 0..5 {
            let handle = populated(&mut arena, n as u32, n);
            let written = strict.serialize(&arena, handle);
            let unlimited = serialize(&arena, handle).unwrap();
            let read = strict.deserialize(&mut arena, &unlimited, None);

            assert_eq!(written.is_ok(), read.is_ok(), "{} elements", n);
            match written {
                Ok(bytes) => {
                    let copy = strict.deserialize(&mut arena, &bytes, None).unwrap();
                    assert_eq!(arena.x_count(copy), Ok(n as u64));
                }
                Err(err) => {
                    assert!(matches!(err, CodecError::TooManyElements { limit: 2, .. }));
                }
            }
        }
    }

    #[test]
    fn peek_header_matches_store() {
        let mut arena = PathArena::new();
        let handle = populated(&mut arena, 42, 6);
        let bytes = serialize(&arena, handle).unwrap();

        let header = TsfCodec::new().peek_header(&bytes).unwrap();
        assert_eq!(header.version, CURRENT_VERSION);
        assert_eq!(header.id, 42);
        assert_eq!(header.x_count, 6);
    }
}
