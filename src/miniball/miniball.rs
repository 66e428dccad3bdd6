//! The miniball driver: the outer convergence loop around the affine-hull
//! tracker.

use super::quality::Quality;
use super::subspan::Subspan;
use crate::math::{Real, Vector};
use crate::point_set::PointSet;

// Numerical tolerance of the drop and walk phases, relative to the current
// radius.
const EPS: Real = 1.0e-14;

/// The smallest enclosing ball (a.k.a. *miniball*) of a set of points.
///
/// The miniball `MB(P)` of a non-empty set `P` of points in d-dimensional
/// Euclidean space is the smallest ball that contains all points of `P`.
///
/// The ball is computed eagerly by [`Miniball::new`] from any [`PointSet`],
/// which is assumed immutable for the duration of the computation. The
/// resulting instance is itself immutable: it does not reflect subsequent
/// changes to the underlying point set, and recomputation requires a new
/// instance.
///
/// The input may be empty, in which case [`Miniball::is_empty`] returns
/// `true` and accessing the center or radius panics.
///
/// ```
/// use miniball::{ArrayPointSet, Miniball};
///
/// let pts = ArrayPointSet::from_coords(2, vec![1.0, 2.0, 5.0, 2.0]);
/// let mb = Miniball::new(&pts);
///
/// assert_eq!(mb.center().as_slice(), &[3.0, 2.0]);
/// assert_eq!(mb.radius(), 2.0);
/// ```
pub struct Miniball<'a, P: ?Sized + PointSet> {
    points: &'a P,
    len: usize,
    dim: usize,
    center: Vector,
    squared_radius: Real,
    radius: Real,
    support: Option<Subspan<'a, P>>,
    iterations: usize,
}

fn sqr(x: Real) -> Real {
    x * x
}

impl<'a, P: ?Sized + PointSet> Miniball<'a, P> {
    /// Computes the miniball of the given point set.
    pub fn new(points: &'a P) -> Self {
        let len = points.size();
        let dim = points.dimension();
        let mut result = Miniball {
            points,
            len,
            dim,
            center: Vector::zeros(dim),
            squared_radius: 0.0,
            radius: 0.0,
            support: None,
            iterations: 0,
        };
        if len > 0 {
            result.init_ball();
            result.compute();
        }
        result
    }

    /// Whether the miniball is the empty set, i.e. whether the input point
    /// set was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of points in the input point set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The dimension of the ambient space.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The center of the miniball.
    ///
    /// Panics if the miniball is empty.
    pub fn center(&self) -> &Vector {
        assert!(!self.is_empty(), "An empty miniball has no center.");
        &self.center
    }

    /// The radius of the miniball, a number >= 0.
    ///
    /// Panics if the miniball is empty.
    pub fn radius(&self) -> Real {
        assert!(!self.is_empty(), "An empty miniball has no radius.");
        self.radius
    }

    /// The squared radius of the miniball.
    ///
    /// Panics if the miniball is empty.
    pub fn squared_radius(&self) -> Real {
        assert!(!self.is_empty(), "An empty miniball has no radius.");
        self.squared_radius
    }

    /// The number of points of the final support, a number between 1 and
    /// `dimension() + 1`.
    ///
    /// The *support* is a set of input points lying on the boundary of the
    /// miniball whose own miniball already equals the whole miniball.
    ///
    /// Panics if the miniball is empty.
    pub fn support_size(&self) -> usize {
        self.support().size()
    }

    /// The number of iterations the main loop took to converge.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn support(&self) -> &Subspan<'a, P> {
        self.support
            .as_ref()
            .expect("An empty miniball has no support.")
    }

    fn support_mut(&mut self) -> &mut Subspan<'a, P> {
        self.support
            .as_mut()
            .expect("An empty miniball has no support.")
    }

    /// Sets up the initial ball with an arbitrary point of the input as
    /// center and exactly one farthest point in the support. This ball
    /// contains all points and its radius is at most twice the optimum.
    fn init_ball(&mut self) {
        // Center at the first point.
        for i in 0..self.dim {
            self.center[i] = self.points.coord(0, i);
        }

        // Find a farthest point. The comparison is `>=`, so among equally
        // far points the one with the largest index wins; this tie-break is
        // part of the documented, reproducible behavior.
        self.squared_radius = 0.0;
        let mut farthest = 0;
        for j in 1..self.len {
            let mut dist = 0.0;
            for i in 0..self.dim {
                dist += sqr(self.points.coord(j, i) - self.center[i]);
            }
            if dist >= self.squared_radius {
                self.squared_radius = dist;
                farthest = j;
            }
        }
        self.radius = self.squared_radius.sqrt();

        self.support = Some(Subspan::new(self.points, farthest));
    }

    /// The main loop.
    ///
    /// Each iteration computes the point of `aff(support)` closest to the
    /// current center and walks toward it as far as possible, i.e. until
    /// some point would leave the ball and must be inserted into the
    /// support. Before walking, members whose affine coefficient has turned
    /// non-positive are dropped; when no such member exists the center lies
    /// in `conv(support)` and is optimal.
    fn compute(&mut self) {
        let mut center_to_aff = Vector::zeros(self.dim);
        let mut lambdas = Vector::zeros(self.dim + 1);

        // Invariant: B(center, radius) contains the whole point set and has
        // the support members on its boundary.
        loop {
            self.iterations += 1;
            log::debug!(
                "iteration {}: {} points on the boundary, radius {}",
                self.iterations,
                self.support_size(),
                self.radius
            );

            // The walking direction and its length.
            let mut dist_to_aff_sq = self.dist_to_aff(&mut center_to_aff);
            let mut dist_to_aff = dist_to_aff_sq.sqrt();

            // The support-size test guards configurations of d + 2 or more
            // nearly cospherical points, for which the distance to the
            // affine hull may never fall under the tolerance.
            while dist_to_aff <= EPS * self.radius || self.support_size() == self.dim + 1 {
                if !self.successful_drop(&mut lambdas) {
                    // The center lies in conv(support): optimal.
                    return;
                }
                dist_to_aff_sq = self.dist_to_aff(&mut center_to_aff);
                dist_to_aff = dist_to_aff_sq.sqrt();
            }

            // Determine how far we can walk along `center_to_aff` without
            // losing a point of the input set.
            let (scale, stopper) =
                self.find_stop_fraction(&center_to_aff, dist_to_aff, dist_to_aff_sq);

            match stopper {
                Some(stopper) => {
                    // Walk as far as allowed, then pin the stopper onto the
                    // boundary.
                    self.center.axpy(scale, &center_to_aff, 1.0);
                    self.update_radius();
                    self.support_mut().add(stopper);
                }
                None => {
                    // Nothing blocks the way into the affine hull.
                    self.center += &center_to_aff;
                    self.update_radius();

                    // In exact arithmetic the distance to the affine hull is
                    // now zero; attempt the drop right away instead of
                    // relying on the tolerance test of the next iteration.
                    if !self.successful_drop(&mut lambdas) {
                        return;
                    }
                }
            }
        }
    }

    fn dist_to_aff(&self, center_to_aff: &mut Vector) -> Real {
        self.support()
            .shortest_vector_to_span(&self.center, center_to_aff)
    }

    /// Recomputes the radius from the distance between the center and any
    /// support member (they all lie on the boundary).
    fn update_radius(&mut self) {
        let any = self.support().any_member();
        self.squared_radius = 0.0;
        for i in 0..self.dim {
            self.squared_radius += sqr(self.points.coord(any, i) - self.center[i]);
        }
        self.radius = self.squared_radius.sqrt();
        log::trace!("current radius = {}", self.radius);
    }

    /// If the center does not lie in `conv(support)` yet, removes a support
    /// member with a non-positive affine coefficient and returns `true`.
    /// Returns `false` (leaving the support untouched) when the center lies
    /// in the convex hull, i.e. when the ball is optimal.
    ///
    /// Precondition: the center lies in `aff(support)`.
    fn successful_drop(&mut self, lambdas: &mut Vector) -> bool {
        self.support().find_affine_coefficients(&self.center, lambdas);

        // The strict `<` makes the first member carrying the globally
        // smallest coefficient win; this tie-break is part of the
        // documented, reproducible behavior.
        let mut smallest = 0;
        let mut minimum: Real = 1.0;
        for i in 0..self.support_size() {
            if lambdas[i] < minimum {
                minimum = lambdas[i];
                smallest = i;
            }
        }

        if minimum <= 0.0 {
            log::trace!("dropping local member {}", smallest);
            self.support_mut().remove(smallest);
            return true;
        }
        false
    }

    /// The (positive) fraction of `center_to_aff` that can be walked before
    /// some non-support point would leave the ball, together with the index
    /// of that most restrictive point ("stopper"), if any.
    fn find_stop_fraction(
        &self,
        center_to_aff: &Vector,
        dist_to_aff: Real,
        dist_to_aff_sq: Real,
    ) -> (Real, Option<usize>) {
        // We would like to walk the full length of center_to_aff ...
        let mut scale: Real = 1.0;
        let mut stopper = None;
        let mut center_to_point = Vector::zeros(self.dim);

        // ... but one of the points might hinder us.
        for j in 0..self.len {
            if self.support().is_member(j) {
                continue;
            }

            for i in 0..self.dim {
                center_to_point[i] = self.points.coord(j, i) - self.center[i];
            }
            let dir_point_prod = center_to_aff.dot(&center_to_point);

            // Points on the far side of aff(support) stay enclosed whatever
            // happens and can be ignored.
            if dist_to_aff_sq - dir_point_prod < EPS * self.radius * dist_to_aff {
                continue;
            }

            // The fraction of the walk at which point j reaches the
            // boundary of the shrinking ball.
            let bound = (self.squared_radius - center_to_point.norm_squared())
                / (2.0 * (dist_to_aff_sq - dir_point_prod));
            if bound < scale {
                log::trace!("stopper {} with fraction {}", j, bound);
                scale = bound;
                stopper = Some(j);
            }
        }

        (scale, stopper)
    }

    /// Recomputes independent measures of the solution quality from the
    /// final state.
    ///
    /// Intended for testing and validation; the measures are not consulted
    /// by the computation itself, and this method is not particularly
    /// efficient.
    ///
    /// Panics if the miniball is empty.
    pub fn verify(&self) -> Quality {
        assert!(!self.is_empty(), "An empty miniball has no quality.");
        let support = self.support();

        let qr_inconsistency = support.representation_error();

        // Is the center really in the convex hull of the support?
        let mut lambdas = Vector::zeros(self.dim + 1);
        support.find_affine_coefficients(&self.center, &mut lambdas);
        let mut min_convex_coefficient: Real = 1.0;
        for k in 0..support.size() {
            if lambdas[k] <= min_convex_coefficient {
                min_convex_coefficient = lambdas[k];
            }
        }

        // Are all points inside the ball, and all support points really on
        // the boundary?
        let mut max_overlength: Real = 0.0;
        let mut min_underlength: Real = 0.0;
        for k in 0..self.len {
            let mut sq_dist = 0.0;
            for i in 0..self.dim {
                sq_dist += sqr(self.points.coord(k, i) - self.center[i]);
            }
            let ball_error = sq_dist.sqrt() - self.radius;

            if ball_error > max_overlength {
                max_overlength = ball_error;
            }
            if support.is_member(k) && ball_error < min_underlength {
                min_underlength = ball_error;
            }
        }

        // A zero-radius ball (a single distinct point) is exact.
        let (max_overlength, max_underlength) = if self.radius > 0.0 {
            (
                max_overlength / self.radius,
                (min_underlength / self.radius).abs(),
            )
        } else {
            (0.0, 0.0)
        };

        Quality {
            qr_inconsistency,
            min_convex_coefficient,
            max_overlength,
            max_underlength,
            iterations: self.iterations,
            support_size: support.size(),
        }
    }
}
