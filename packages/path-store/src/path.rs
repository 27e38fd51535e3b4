//! The path entity: an identifier plus two coordinate sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names one of the two coordinate sequences of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2-D path.
///
/// The identifier is fixed at construction. Each sequence is replaced as a
/// whole; there is no element-wise mutation. The two sequences are
/// independent and may have different lengths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    id: u32,
    #[serde(default)]
    x: Vec<f64>,
    #[serde(default)]
    y: Vec<f64>,
}

impl Path {
    /// An empty path with the given identifier.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// A populated path. Takes ownership of both sequences.
    pub fn with_coords(id: u32, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { id, x, y }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn coords(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Replace one sequence, dropping the old buffer.
    pub fn replace(&mut self, axis: Axis, values: Vec<f64>) {
        match axis {
            Axis::X => self.x = values,
            Axis::Y => self.y = values,
        }
    }

    /// Take the sequences apart, leaving nothing behind.
    pub fn into_parts(self) -> (u32, Vec<f64>, Vec<f64>) {
        (self.id, self.x, self.y)
    }

    /// Compare two paths by the bit pattern of every coordinate.
    ///
    /// Unlike `==`, this treats `NaN` as equal to an identical `NaN` and
    /// distinguishes `0.0` from `-0.0`.
    pub fn bitwise_eq(&self, other: &Path) -> bool {
        fn same(a: &[f64], b: &[f64]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(l, r)| l.to_bits() == r.to_bits())
        }
        self.id == other.id && same(&self.x, &other.x) && same(&self.y, &other.y)
    }
}
