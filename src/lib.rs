/*!
miniball
========

**miniball** computes the smallest enclosing ball (a.k.a. *miniball*) of a
finite set of points in d-dimensional Euclidean space: the unique ball of
minimal radius that contains all the points.

The dimension is a runtime quantity and may be large; the algorithm is an
incremental scheme that maintains the affine hull of a small support set
through a rank-one-updatable QR decomposition and walks the ball's center
toward the true minimizer.

```
use miniball::{ArrayPointSet, Miniball};

// The four corners of the unit square.
let pts = ArrayPointSet::from_coords(2, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);

let mb = Miniball::new(&pts);
assert!((mb.squared_radius() - 0.5).abs() < 1.0e-14);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::needless_range_loop)] // Coordinate loops access points through `PointSet::coord`.

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod miniball;
pub mod point_set;

pub use crate::miniball::{Miniball, Quality};
pub use crate::point_set::{ArrayPointSet, PointSet};
