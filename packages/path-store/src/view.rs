//! Borrowed views into a stored sequence.

use std::ops::Deref;

use crate::Axis;

/// A read-only view of one coordinate sequence owned by a live path.
///
/// The view borrows the arena, so it cannot outlive the path's next
/// `set_x`/`set_y` or its `destroy`. Callers on the far side of a C ABI get
/// the same pointer and length through `as_ptr` and `len` and must
/// copy out before either event.
#[derive(Clone, Copy, Debug)]
pub struct SequenceView<'a> {
    axis: Axis,
    values: &'a [f64],
}

impl<'a> SequenceView<'a> {
    pub(crate) fn new(axis: Axis, values: &'a [f64]) -> Self {
        Self { axis, values }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.values
    }
}

impl Deref for SequenceView<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.values
    }
}

impl AsRef<[f64]> for SequenceView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.values
    }
}

impl PartialEq<[f64]> for SequenceView<'_> {
    fn eq(&self, other: &[f64]) -> bool {
        self.values == other
    }
}

impl PartialEq<Vec<f64>> for SequenceView<'_> {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.values == other.as_slice()
    }
}
