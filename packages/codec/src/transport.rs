//! Moving TSF buffers through files and text.
//!
//! A `.tsf` file holds exactly one buffer and nothing else. The text form
//! is the same buffer in base64url (RFC 4648 section 5, padded).

use std::fs;
use std::path::Path as FsPath;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use tsf_path_store::{Path, PathArena, PathHandle};

use crate::{CodecError, TsfCodec};

impl TsfCodec {
    // === Files ===

    /// Encode `path` and write it to `file`, replacing any existing content.
    pub fn write_file(&self, file: impl AsRef<FsPath>, path: &Path) -> Result<(), CodecError> {
        let file = file.as_ref();
        let bytes = self.encode(path)?;
        fs::write(file, &bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), file.display());
        Ok(())
    }

    /// Read a whole file and decode it as one TSF buffer.
    pub fn read_file(&self, file: impl AsRef<FsPath>) -> Result<Path, CodecError> {
        let file = file.as_ref();
        let bytes = fs::read(file)?;
        log::debug!("read {} bytes from {}", bytes.len(), file.display());
        self.decode(&bytes, Some(bytes.len()))
    }

    /// Serialize the path behind `handle` into `file`. The path stays live.
    pub fn serialize_to_file(
        &self,
        arena: &PathArena,
        handle: PathHandle,
        file: impl AsRef<FsPath>,
    ) -> Result<(), CodecError> {
        self.write_file(file, arena.get(handle)?)
    }

    /// Deserialize `file` into a new path in `arena`.
    pub fn deserialize_from_file(
        &self,
        arena: &mut PathArena,
        file: impl AsRef<FsPath>,
    ) -> Result<PathHandle, CodecError> {
        let path = self.read_file(file)?;
        Ok(arena.insert(path)?)
    }

    // === Text ===

    pub fn to_base64(&self, path: &Path) -> Result<String, CodecError> {
        Ok(URL_SAFE.encode(self.encode(path)?))
    }

    /// Decode base64url text. Surrounding whitespace is ignored.
    pub fn from_base64(&self, text: &str) -> Result<Path, CodecError> {
        let bytes = URL_SAFE.decode(text.trim())?;
        self.decode(&bytes, Some(bytes.len()))
    }

    pub fn serialize_to_base64(
        &self,
        arena: &PathArena,
        handle: PathHandle,
    ) -> Result<String, CodecError> {
        self.to_base64(arena.get(handle)?)
    }

    pub fn deserialize_from_base64(
        &self,
        arena: &mut PathArena,
        text: &str,
    ) -> Result<PathHandle, CodecError> {
        let path = self.from_base64(text)?;
        Ok(arena.insert(path)?)
    }
}
