//! The process-wide arena behind every C handle.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;
use tsf_codec::{DecodeOptions, TsfCodec};
use tsf_path_store::{PathArena, PathHandle};

pub(crate) struct Registry {
    pub arena: PathArena,
    pub codec: TsfCodec,
}

lazy_static! {
    static ref REGISTRY: Mutex<Registry> = Mutex::new(Registry {
        arena: PathArena::new(),
        codec: TsfCodec::with_options(DecodeOptions::from_env()),
    });
}

/// Lock the registry. A panic in another caller never leaves the arena in a
/// torn state, so a poisoned lock is taken over as-is.
pub(crate) fn registry() -> MutexGuard<'static, Registry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Decode a raw handle, logging values no arena could have issued.
pub(crate) fn handle_from_raw(raw: u64, op: &str) -> Option<PathHandle> {
    let handle = PathHandle::from_raw(raw);
    if handle.is_none() {
        log::warn!("{}: {:#x} is not a path handle", op, raw);
    }
    handle
}

/// Turn a failure into `None`, logging it at the boundary.
pub(crate) fn report<T, E: std::fmt::Display>(op: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed: {}", op, e);
            None
        }
    }
}
