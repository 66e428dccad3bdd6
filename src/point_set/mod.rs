//! Read-only point-set abstractions consumed by the miniball computation.

pub use self::io::{read_point_set, write_point_set, PointSetIoError};

pub mod io;

use crate::math::Real;
use core::fmt;

/// Read-only access to the Euclidean coordinates of a set of `n` points.
///
/// Algorithms in this crate do not take their input as a slice of vectors,
/// as this would force the caller to store the points in a particular
/// layout. Instead they query the coordinates through this trait, which any
/// existing point container can implement.
///
/// The consumers of a `PointSet` assume the underlying point set to be
/// *immutable*: it must not change for the lifetime of one computation.
///
/// For a ready-made, array-backed implementation see [`ArrayPointSet`].
pub trait PointSet {
    /// The number of points in the point set.
    fn size(&self) -> usize;

    /// The dimension of the ambient space of the points.
    ///
    /// Each point has `dimension()` Euclidean coordinates.
    fn dimension(&self) -> usize;

    /// The `j`-th Euclidean coordinate of the `i`-th point.
    ///
    /// Panics if `i >= size()` or `j >= dimension()`.
    fn coord(&self, i: usize, j: usize) -> Real;
}

/// A [`PointSet`] storing `n` `d`-dimensional points in a flat, row-major
/// array of `Real`s.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayPointSet {
    dim: usize,
    len: usize,
    coords: Vec<Real>,
}

impl ArrayPointSet {
    /// Creates an array-backed point set holding `n` `d`-dimensional points,
    /// all initialized to the origin.
    pub fn new(d: usize, n: usize) -> Self {
        ArrayPointSet {
            dim: d,
            len: n,
            coords: vec![0.0; n * d],
        }
    }

    /// Creates an array-backed point set from a row-major coordinate array.
    ///
    /// Panics if `d == 0` or if `coords.len()` is not a multiple of `d`.
    pub fn from_coords(d: usize, coords: Vec<Real>) -> Self {
        assert!(d > 0, "The ambient dimension must be positive.");
        assert!(
            coords.len() % d == 0,
            "The number of coordinates must be a multiple of the dimension."
        );
        ArrayPointSet {
            dim: d,
            len: coords.len() / d,
            coords,
        }
    }

    /// Sets the `j`-th Euclidean coordinate of the `i`-th point.
    ///
    /// Panics if `i >= size()` or `j >= dimension()`.
    pub fn set(&mut self, i: usize, j: usize, value: Real) {
        assert!(i < self.len && j < self.dim);
        self.coords[i * self.dim + j] = value;
    }
}

impl PointSet for ArrayPointSet {
    fn size(&self) -> usize {
        self.len
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn coord(&self, i: usize, j: usize) -> Real {
        assert!(i < self.len && j < self.dim);
        self.coords[i * self.dim + j]
    }
}

impl fmt::Display for ArrayPointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for i in 0..self.len {
            write!(f, "[")?;
            for j in 0..self.dim {
                write!(f, "{}", self.coord(i, j))?;
                if j < self.dim - 1 {
                    write!(f, ",")?;
                }
            }
            write!(f, "]")?;
            if i < self.len - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}
