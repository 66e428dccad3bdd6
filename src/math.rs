//! Type aliases for the scalar and the dynamically-sized algebra types.

use na::{DMatrix, DVector};

/// The scalar type used throughout this crate.
///
/// The tolerances of the miniball algorithm are tuned for double precision,
/// so no single-precision flavor is offered.
pub use f64 as Real;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The vector type; the dimension is determined at runtime.
pub type Vector = DVector<Real>;

/// The matrix type; the dimensions are determined at runtime.
pub type Matrix = DMatrix<Real>;
