//! Post-hoc quality measures of a computed miniball.

use crate::math::Real;
use core::fmt;

/// Information about the quality of a computed miniball.
///
/// Produced by [`Miniball::verify`](super::Miniball::verify), which
/// recomputes every measure independently of the main loop's bookkeeping.
/// All measures are in theory exact zeros or positive numbers; rounding
/// errors may perturb them slightly.
#[derive(Debug, Clone, PartialEq)]
pub struct Quality {
    /// A measure for the consistency of the internally used QR
    /// factorization of the support.
    ///
    /// In theory zero; non-zero values stem from rounding errors.
    pub qr_inconsistency: Real,

    /// A measure for the minimality of the computed ball: the smallest
    /// affine coefficient of the center with respect to the final support.
    ///
    /// In theory positive; rounding errors may render it slightly negative.
    pub min_convex_coefficient: Real,

    /// The maximal distance by which an input point lies *outside* the
    /// ball, divided by the radius.
    ///
    /// Zero if and only if all points are contained in the ball.
    pub max_overlength: Real,

    /// The maximal distance by which a support point falls *short of* the
    /// boundary, divided by the radius.
    ///
    /// In theory zero; a larger value means the ball is enclosing but not
    /// minimal.
    pub max_underlength: Real,

    /// The number of iterations of the main loop.
    pub iterations: usize,

    /// The size of the final support.
    pub support_size: usize,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quality [qr_inconsistency={}, min_convex_coefficient={}, \
             max_overlength={}, max_underlength={}, iterations={}, \
             support_size={}]",
            self.qr_inconsistency,
            self.min_convex_coefficient,
            self.max_overlength,
            self.max_underlength,
            self.iterations,
            self.support_size
        )
    }
}
