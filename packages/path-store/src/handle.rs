//! Generation-checked handles.

use std::fmt;

/// An opaque reference to a path owned by a [`PathArena`](crate::PathArena).
///
/// A handle pairs a slot index with the generation the slot had when the
/// path was created. Destroying a path bumps the slot's generation, so any
/// copy of the old handle stops resolving instead of aliasing whatever path
/// reuses the slot later.
///
/// Handles are plain `Copy` values and carry no ownership. Passing a handle
/// to a different arena than the one that issued it is reported as an
/// invalid handle unless that arena happens to hold a live path at the same
/// index and generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathHandle {
    index: u32,
    generation: u32,
}

impl PathHandle {
    /// Raw value that never names a live path.
    pub const INVALID_RAW: u64 = 0;

    pub(crate) const fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }

    /// Pack the handle into a single integer for transport across a C ABI.
    ///
    /// The generation occupies the high 32 bits and the slot index the low
    /// 32 bits. Generations start at 1, so the result is never
    /// [`INVALID_RAW`](Self::INVALID_RAW).
    pub fn to_raw(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.index)
    }

    /// Unpack a value produced by [`to_raw`](Self::to_raw).
    ///
    /// Returns `None` for values no arena ever issues (generation zero).
    /// A `Some` result is only a well-formed handle; whether it is live is
    /// decided by the arena.
    pub fn from_raw(raw: u64) -> Option<Self> {
        let generation = (raw >> 32) as u32;
        if generation == 0 {
            return None;
        }
        Some(Self {
            index: raw as u32,
            generation,
        })
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
