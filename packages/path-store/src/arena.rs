//! The arena that owns every live path.

use crate::{Axis, Path, PathHandle, SequenceView, StoreError};

struct Slot {
    generation: u32,
    path: Option<Path>,
}

/// Owns paths and hands out [`PathHandle`]s to them.
///
/// Each path is an independent resource: it is created empty, populated by
/// whole-sequence replacement, read through fallible accessors and released
/// exactly once by [`destroy`](Self::destroy). After that, every operation
/// on its handle fails with [`StoreError::InvalidHandle`].
///
/// The arena does no locking. Distinct arenas are fully independent; a
/// single arena shared between threads must be wrapped by the caller.
///
/// # Example
///
/// ```rust
/// use tsf_path_store::{PathArena, StoreError};
///
/// let mut arena = PathArena::new();
/// let handle = arena.create(5)?;
/// arena.set_x(handle, &[0.0, 1.5, 3.0], 3)?;
///
/// assert_eq!(arena.id(handle)?, 5);
/// assert_eq!(arena.x_count(handle)?, 3);
/// assert_eq!(arena.y_count(handle)?, 0);
///
/// arena.destroy(handle)?;
/// assert!(arena.x_count(handle).is_err());
/// # Ok::<(), StoreError>(())
/// ```
#[derive(Default)]
pub struct PathArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    // === Lifecycle ===

    /// Allocate an empty path with the given identifier.
    pub fn create(&mut self, id: u32) -> Result<PathHandle, StoreError> {
        self.insert(Path::new(id))
    }

    /// Adopt an already-built path.
    pub fn insert(&mut self, path: Path) -> Result<PathHandle, StoreError> {
        let id = path.id();
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.path = Some(path);
                PathHandle::from_parts(index, slot.generation)
            }
            None => {
                let index =
                    u32::try_from(self.slots.len()).map_err(|_| StoreError::ResourceExhausted)?;
                self.slots.push(Slot {
                    generation: 1,
                    path: Some(path),
                });
                PathHandle::from_parts(index, 1)
            }
        };
        self.live += 1;
        log::trace!("created path {} (id {})", handle, id);
        Ok(handle)
    }

    /// Release the path and invalidate its handle.
    ///
    /// Destroying a handle twice is an error, as is destroying a handle this
    /// arena never issued.
    pub fn destroy(&mut self, handle: PathHandle) -> Result<(), StoreError> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation() && slot.path.is_some())
            .ok_or(StoreError::InvalidHandle { handle })?;

        slot.path = None;
        self.live -= 1;

        // A slot whose generation cannot advance is retired for good.
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(handle.index() as u32);
        }
        log::trace!("destroyed path {}", handle);
        Ok(())
    }

    // === Mutation ===

    /// Replace the x sequence with a copy of `values`.
    ///
    /// `count` is the caller's declared length and must equal
    /// `values.len()`. On failure the stored sequence is unchanged.
    pub fn set_x(
        &mut self,
        handle: PathHandle,
        values: &[f64],
        count: u64,
    ) -> Result<(), StoreError> {
        self.set(handle, Axis::X, values, count)
    }

    /// Replace the y sequence with a copy of `values`. See [`set_x`](Self::set_x).
    pub fn set_y(
        &mut self,
        handle: PathHandle,
        values: &[f64],
        count: u64,
    ) -> Result<(), StoreError> {
        self.set(handle, Axis::Y, values, count)
    }

    pub fn set(
        &mut self,
        handle: PathHandle,
        axis: Axis,
        values: &[f64],
        count: u64,
    ) -> Result<(), StoreError> {
        let path = self.path_mut(handle)?;
        if count != values.len() as u64 {
            return Err(StoreError::LengthMismatch {
                axis,
                declared: count,
                actual: values.len(),
            });
        }
        path.replace(axis, values.to_vec());
        Ok(())
    }

    /// Replace a sequence with an owned buffer, without copying.
    pub fn replace(
        &mut self,
        handle: PathHandle,
        axis: Axis,
        values: Vec<f64>,
    ) -> Result<(), StoreError> {
        self.path_mut(handle)?.replace(axis, values);
        Ok(())
    }

    // === Access ===

    pub fn get(&self, handle: PathHandle) -> Result<&Path, StoreError> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.path.as_ref())
            .ok_or(StoreError::InvalidHandle { handle })
    }

    fn path_mut(&mut self, handle: PathHandle) -> Result<&mut Path, StoreError> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.path.as_mut())
            .ok_or(StoreError::InvalidHandle { handle })
    }

    pub fn id(&self, handle: PathHandle) -> Result<u32, StoreError> {
        Ok(self.get(handle)?.id())
    }

    pub fn x_count(&self, handle: PathHandle) -> Result<u64, StoreError> {
        self.count(handle, Axis::X)
    }

    pub fn y_count(&self, handle: PathHandle) -> Result<u64, StoreError> {
        self.count(handle, Axis::Y)
    }

    pub fn count(&self, handle: PathHandle, axis: Axis) -> Result<u64, StoreError> {
        Ok(self.get(handle)?.coords(axis).len() as u64)
    }

    /// Borrow the x sequence. The view ends at the next mutation of the arena.
    pub fn x(&self, handle: PathHandle) -> Result<SequenceView<'_>, StoreError> {
        self.view(handle, Axis::X)
    }

    /// Borrow the y sequence. The view ends at the next mutation of the arena.
    pub fn y(&self, handle: PathHandle) -> Result<SequenceView<'_>, StoreError> {
        self.view(handle, Axis::Y)
    }

    pub fn view(&self, handle: PathHandle, axis: Axis) -> Result<SequenceView<'_>, StoreError> {
        Ok(SequenceView::new(axis, self.get(handle)?.coords(axis)))
    }

    pub fn x_item(&self, handle: PathHandle, index: u64) -> Result<f64, StoreError> {
        self.item(handle, Axis::X, index)
    }

    pub fn y_item(&self, handle: PathHandle, index: u64) -> Result<f64, StoreError> {
        self.item(handle, Axis::Y, index)
    }

    pub fn item(&self, handle: PathHandle, axis: Axis, index: u64) -> Result<f64, StoreError> {
        let values = self.get(handle)?.coords(axis);
        usize::try_from(index)
            .ok()
            .and_then(|i| values.get(i).copied())
            .ok_or(StoreError::IndexOutOfBounds {
                axis,
                index,
                len: values.len(),
            })
    }

    // === Bookkeeping ===

    pub fn contains(&self, handle: PathHandle) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of live paths.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_starts_empty() {
        let mut arena = PathArena::new();
        let handle = arena.create(12).unwrap();

        assert_eq!(arena.id(handle), Ok(12));
        assert_eq!(arena.x_count(handle), Ok(0));
        assert_eq!(arena.y_count(handle), Ok(0));
        assert!(arena.x(handle).unwrap().is_empty());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn set_replaces_whole_sequence() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();

        arena.set_x(handle, &[1.0, 2.0, 3.0], 3).unwrap();
        arena.set_x(handle, &[9.0], 1).unwrap();
        arena.set_y(handle, &[4.0, 5.0], 2).unwrap();

        assert_eq!(arena.x(handle).unwrap(), vec![9.0]);
        assert_eq!(arena.y(handle).unwrap(), vec![4.0, 5.0]);
        assert_eq!(arena.x_count(handle), Ok(1));
        assert_eq!(arena.y_count(handle), Ok(2));
    }

    #[test]
    fn set_copies_caller_buffer() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();

        let mut source = vec![1.0, 2.0];
        arena.set_x(handle, &source, 2).unwrap();
        source[0] = 100.0;

        assert_eq!(arena.x_item(handle, 0), Ok(1.0));
    }

    #[test]
    fn set_rejects_count_mismatch() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.set_y(handle, &[7.0], 1).unwrap();

        let err = arena.set_y(handle, &[1.0, 2.0], 3).unwrap_err();
        assert_eq!(
            err,
            StoreError::LengthMismatch {
                axis: Axis::Y,
                declared: 3,
                actual: 2,
            }
        );
        assert_eq!(arena.y(handle).unwrap(), vec![7.0]);
    }

    #[test]
    fn sequences_are_independent_lengths() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.set_x(handle, &[1.0, 2.0, 3.0, 4.0], 4).unwrap();

        assert_eq!(arena.x_count(handle), Ok(4));
        assert_eq!(arena.y_count(handle), Ok(0));
    }

    #[test]
    fn read_accessors_are_idempotent() {
        let mut arena = PathArena::new();
        let handle = arena.create(3).unwrap();
        arena.set_x(handle, &[0.5; 16], 16).unwrap();

        assert_eq!(arena.x_count(handle), arena.x_count(handle));
        assert_eq!(arena.x_count(handle), Ok(16));
    }

    #[test]
    fn item_bounds_are_checked() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.set_x(handle, &[1.0, 2.0], 2).unwrap();

        assert_eq!(arena.x_item(handle, 1), Ok(2.0));
        assert_eq!(
            arena.x_item(handle, 2),
            Err(StoreError::IndexOutOfBounds {
                axis: Axis::X,
                index: 2,
                len: 2,
            })
        );
        assert!(arena.y_item(handle, 0).is_err());
    }

    #[test]
    fn destroyed_handle_fails_everywhere() {
        let mut arena = PathArena::new();
        let handle = arena.create(9).unwrap();
        arena.set_x(handle, &[1.0], 1).unwrap();
        arena.destroy(handle).unwrap();

        let invalid = StoreError::InvalidHandle { handle };
        assert_eq!(arena.id(handle), Err(invalid.clone()));
        assert_eq!(arena.x_count(handle), Err(invalid.clone()));
        assert_eq!(arena.y_count(handle), Err(invalid.clone()));
        assert!(arena.x(handle).is_err());
        assert!(arena.y(handle).is_err());
        assert_eq!(arena.x_item(handle, 0), Err(invalid.clone()));
        assert_eq!(arena.set_x(handle, &[2.0], 1), Err(invalid.clone()));
        assert_eq!(arena.destroy(handle), Err(invalid));
        assert!(arena.is_empty());
    }

    #[test]
    fn invalid_handle_wins_over_length_mismatch() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.destroy(handle).unwrap();

        let err = arena.set_x(handle, &[1.0], 5).unwrap_err();
        assert!(err.is_invalid_handle());
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut arena = PathArena::new();
        let old = arena.create(1).unwrap();
        arena.destroy(old).unwrap();

        let new = arena.create(2).unwrap();
        assert_ne!(old, new);
        assert_eq!(old.index(), new.index());

        assert!(arena.id(old).is_err());
        assert_eq!(arena.id(new), Ok(2));
        assert!(arena.destroy(old).is_err());
        assert!(arena.contains(new));
    }

    #[test]
    fn handles_from_another_arena_are_rejected() {
        let mut a = PathArena::new();
        let b = PathArena::new();
        let handle = a.create(1).unwrap();

        assert!(b.get(handle).is_err());
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut arena = PathArena::new();
        let handle = arena.create(1).unwrap();
        arena.slots[0].generation = u32::MAX;
        let last = PathHandle::from_parts(0, u32::MAX);

        arena.destroy(last).unwrap();
        assert!(arena.free.is_empty());

        let next = arena.create(2).unwrap();
        assert_eq!(next.index(), 1);
        assert!(arena.get(handle).is_err());
        assert!(arena.get(last).is_err());
    }

    #[test]
    fn many_paths_stay_independent() {
        let mut arena = PathArena::new();
        let handles: Vec<_> = (0..64).map(|id| arena.create(id).unwrap()).collect();

        for (i, handle) in handles.iter().enumerate() {
            let values = vec![i as f64; i];
            arena.set_y(*handle, &values, i as u64).unwrap();
        }
        for handle in handles.iter().step_by(2) {
            arena.destroy(*handle).unwrap();
        }

        assert_eq!(arena.len(), 32);
        for (i, handle) in handles.iter().enumerate().skip(1).step_by(2) {
            assert_eq!(arena.id(*handle), Ok(i as u32));
            assert_eq!(arena.y_count(*handle), Ok(i as u64));
        }
    }
}
