//! TSF Path Store: handle-addressed storage for 2-D paths
//!
//! A path is an identifier plus two independent `f64` coordinate sequences.
//! Paths live in a [`PathArena`] and are addressed by [`PathHandle`]s that
//! are checked on every use, so a destroyed or foreign handle is reported
//! as [`StoreError::InvalidHandle`] rather than touching freed memory.
//!
//! Use this layer for:
//! - Owning paths behind opaque handles (for example across a C ABI)
//! - Whole-sequence replacement with declared-length checks
//! - Borrowed, zero-copy reads of stored sequences
//!
//! Serialization lives one layer up, in `tsf-codec`.
//!
//! # Example
//!
//! ```rust
//! use tsf_path_store::{PathArena, StoreError};
//!
//! let mut arena = PathArena::new();
//! let handle = arena.create(5)?;
//! arena.set_x(handle, &[1.0, 2.0], 2)?;
//! arena.set_y(handle, &[3.0, 4.0], 2)?;
//!
//! let x = arena.x(handle)?;
//! assert_eq!(&*x, &[1.0, 2.0]);
//! # Ok::<(), StoreError>(())
//! ```

mod arena;
mod error;
mod handle;
mod path;
mod view;

pub use arena::PathArena;
pub use error::StoreError;
pub use handle::PathHandle;
pub use path::{Axis, Path};
pub use view::SequenceView;
