//! TSF Codec: a fixed, versioned binary layout for paths
//!
//! This layer turns a [`Path`](tsf_path_store::Path) into a flat byte
//! buffer and back. The layout is a plain tuple (version tag, id, then two
//! length-prefixed `f64` sequences) with byte order and widths pinned per
//! version, so independently built readers and writers agree without
//! negotiation. There is no compression and no indirection.
//!
//! Use this layer for:
//! - Persisting paths to `.tsf` files
//! - Passing paths between processes or languages as bytes or base64url text
//! - Inspecting a buffer's header without decoding it
//!
//! # Example
//!
//! ```rust
//! use tsf_codec::{deserialize, serialize, CodecError};
//! use tsf_path_store::PathArena;
//!
//! let mut arena = PathArena::new();
//! let handle = arena.create(5)?;
//! arena.set_y(handle, &[2.0, 4.0, 8.0], 3)?;
//!
//! let bytes = serialize(&arena, handle)?;
//! arena.destroy(handle)?;
//!
//! let restored = deserialize(&mut arena, &bytes, Some(bytes.len()))?;
//! assert_eq!(arena.y_count(restored)?, 3);
//! # Ok::<(), CodecError>(())
//! ```
//!
//! # Versions
//!
//! | Version | Layout |
//! |---|---|
//! | 1 | see [`v1`] |

pub use bytes::Bytes;

mod codec;
mod error;
pub mod format;
mod options;
mod traits;
mod transport;
pub mod v1;

pub use codec::{deserialize, serialize, TsfCodec};
pub use error::CodecError;
pub use format::{Header, CURRENT_VERSION, FILE_EXTENSION};
pub use options::{DecodeOptions, DEFAULT_MAX_ELEMENTS, MAX_ELEMENTS_ENV};
pub use traits::{codec_for_version, supported_versions, Codec};
