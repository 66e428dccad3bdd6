//! Affine hull of a subset of a point set, tracked through an updatable
//! QR decomposition.

use crate::math::{Matrix, Real, Vector};
use crate::point_set::PointSet;

/// Affine hull of a non-empty set of affinely independent points.
///
/// An instance represents the affine hull `aff(M)` of a non-empty set `M`
/// of affinely independent points. The set `M` is not stored explicitly;
/// its members are identified by their (zero-based) indices into a borrowed
/// [`PointSet`], which must not change for the lifetime of the instance.
///
/// Internally, the members are kept in an ordered list whose last entry is
/// distinguished as the *origin*, and the matrix whose columns are the
/// offsets `member - origin` of the non-origin members is maintained in
/// factored form `A = QR`, with `Q` orthogonal and `R` upper triangular
/// over the active rank. Insertions and deletions update the factorization
/// in `O(d^2)` through Givens rotations; no decomposition is ever recomputed
/// from scratch.
pub(crate) struct Subspan<'a, P: ?Sized + PointSet> {
    points: &'a P,

    // Ambient dimension (not to be confused with the rank below).
    dim: usize,

    // membership[i] iff point i belongs to M.
    membership: Vec<bool>,

    // members[i] is the global index of the i-th member of M;
    // members[rank] is the origin.
    members: Vec<usize>,

    // (dim x dim) orthogonal and upper-triangular factors. Only the leading
    // `rank` columns of R are meaningful; entries below the triangle are
    // stale storage and never read.
    q: Matrix,
    r: Matrix,

    // Rank of R, i.e. the number of members minus one.
    rank: usize,
}

/// Givens coefficients `(c, s)` satisfying
///
/// ```text
/// c * a + s * b = +/- sqrt(a^2 + b^2)
/// c * b - s * a = 0
/// ```
///
/// The signs are unspecified; nothing must rely on them.
///
/// Source: Golub & Van Loan, "Matrix Computations" (2nd edition), p. 216.
fn givens(a: Real, b: Real) -> (Real, Real) {
    if b == 0.0 {
        (1.0, 0.0)
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = 1.0 / (1.0 + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = 1.0 / (1.0 + t * t).sqrt();
        (c, c * t)
    }
}

impl<'a, P: ?Sized + PointSet> Subspan<'a, P> {
    /// Constructs the affine hull of the single-member set `M = {points[k]}`.
    pub fn new(points: &'a P, k: usize) -> Self {
        let dim = points.dimension();
        let mut membership = vec![false; points.size()];
        membership[k] = true;

        let mut members = Vec::with_capacity(dim + 1);
        members.push(k);

        log::trace!("subspan rank: 0");

        Subspan {
            points,
            dim,
            membership,
            members,
            q: Matrix::identity(dim, dim),
            r: Matrix::zeros(dim, dim),
            rank: 0,
        }
    }

    /// The ambient dimension.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The size of `M`, a number between 1 and `dim + 1`.
    pub fn size(&self) -> usize {
        self.rank + 1
    }

    /// Whether the point with global index `i` is a member of `M`.
    pub fn is_member(&self, i: usize) -> bool {
        assert!(i < self.points.size());
        self.membership[i]
    }

    /// The global index of an arbitrary member of `M` (in fact, the origin).
    pub fn any_member(&self) -> usize {
        self.origin()
    }

    /// The global index of the `i`-th member of `M`.
    ///
    /// The members are internally ordered in an arbitrary way; the order
    /// only changes through [`Subspan::add`] and [`Subspan::remove`].
    pub fn global_index(&self, i: usize) -> usize {
        assert!(i < self.size());
        self.members[i]
    }

    fn origin(&self) -> usize {
        self.members[self.rank]
    }

    /// Adds the point with global index `index` to `M`.
    ///
    /// Precondition: `!is_member(index)` and `size() <= dim`.
    ///
    /// Complexity: `O(dim^2)`.
    pub fn add(&mut self, index: usize) {
        assert!(!self.is_member(index), "The point is already a member.");

        // Offset of the new point from the origin; this becomes the next
        // column of A = QR.
        let o = self.origin();
        let mut u = Vector::zeros(self.dim);
        for i in 0..self.dim {
            u[i] = self.points.coord(index, i) - self.points.coord(o, i);
        }
        self.append_column(&u);

        // The new point slips in right before the origin.
        self.membership[index] = true;
        self.members.insert(self.rank, index);
        self.rank += 1;

        log::trace!("subspan rank: {}", self.rank);
        debug_assert!(self.q_is_orthogonal());
    }

    /// Removes the `local`-th member from `M`.
    ///
    /// Precondition: `size() > 1` and `local < size()`.
    ///
    /// Complexity: `O(dim^2)`.
    pub fn remove(&mut self, local: usize) {
        assert!(local < self.size(), "Not a valid member position.");
        assert!(self.size() > 1, "Cannot remove the last member.");

        self.membership[self.members[local]] = false;

        if local == self.rank {
            // The origin goes away. We elect the right-most regular member,
            // i.e. column rank - 1 of R, as the new origin, so every offset
            // column of A = QR must be corrected by
            // u = old origin - new origin.
            let o = self.origin();
            let new_origin = self.members[self.rank - 1];
            let mut u = Vector::zeros(self.dim);
            for i in 0..self.dim {
                u[i] = self.points.coord(o, i) - self.points.coord(new_origin, i);
            }

            let _ = self.members.pop();
            self.rank -= 1;

            log::trace!("subspan rank: {}", self.rank);

            self.special_rank_1_update(&u);
        } else {
            // General case: drop one column of R and shift the higher
            // columns one slot to the left.
            for j in local + 1..self.rank {
                let column = self.r.column(j).into_owned();
                self.r.set_column(j - 1, &column);
            }
            let _ = self.members.remove(local);
            self.rank -= 1;

            // The shift leaves a subdiagonal band behind.
            self.hessenberg_clear(local);
        }

        debug_assert!(self.q_is_orthogonal());
    }

    /// Computes into `w` the vector from `p` to the point of `aff(M)`
    /// nearest to `p`, and returns its squared length.
    ///
    /// Complexity: `O(dim * rank)`.
    pub fn shortest_vector_to_span(&self, p: &Vector, w: &mut Vector) -> Real {
        // Start with the vector from p to the origin ...
        let o = self.origin();
        for i in 0..self.dim {
            w[i] = self.points.coord(o, i) - p[i];
        }

        // ... and remove its components along the hull directions.
        for j in 0..self.rank {
            let scale = w.dot(&self.q.column(j));
            w.axpy(-scale, &self.q.column(j), 1.0);
        }

        w.norm_squared()
    }

    /// Computes the `size()` coefficients of the representation of `p` as
    /// an affine combination of the members of `M`.
    ///
    /// The `i`-th coefficient `lambdas[i]` corresponds to the member with
    /// global index `global_index(i)`; the coefficients sum to one.
    ///
    /// Precondition: `p` lies in `aff(M)`; the result is undefined
    /// otherwise.
    ///
    /// Complexity: `O(dim^2)`.
    pub fn find_affine_coefficients(&self, p: &Vector, lambdas: &mut Vector) {
        // Relative position of p, i.e. u = p - origin.
        let o = self.origin();
        let mut u = Vector::zeros(self.dim);
        for i in 0..self.dim {
            u[i] = p[i] - self.points.coord(o, i);
        }

        let mut w = self.q.tr_mul(&u);

        // Backsubstitution against R. Writing s for the sum of the
        // non-origin coefficients,
        //
        //   p = origin + sum_j lambda_j (member_j - origin)
        //     = sum_j lambda_j member_j + (1 - s) origin,
        //
        // so the origin's coefficient is 1 - s.
        let mut origin_lambda = 1.0;
        for j in (0..self.rank).rev() {
            for k in j + 1..self.rank {
                w[j] -= lambdas[k] * self.r[(j, k)];
            }
            let lambda = w[j] / self.r[(j, j)];
            lambdas[j] = lambda;
            origin_lambda -= lambda;
        }
        lambdas[self.rank] = origin_lambda;
    }

    /// The maximal deviation of the members' affine self-representation
    /// from the exact unit coefficients.
    ///
    /// Diagnostic only; allocates scratch storage freely.
    pub fn representation_error(&self) -> Real {
        let mut lambdas = Vector::zeros(self.size());
        let mut pt = Vector::zeros(self.dim);
        let mut max: Real = 0.0;

        for j in 0..self.size() {
            for i in 0..self.dim {
                pt[i] = self.points.coord(self.global_index(j), i);
            }

            // A member's own coefficient should be one, all others zero.
            self.find_affine_coefficients(&pt, &mut lambdas);
            for i in 0..self.size() {
                let expected = if i == j { 1.0 } else { 0.0 };
                let error = (lambdas[i] - expected).abs();
                if error > max {
                    max = error;
                }
            }
        }

        max
    }

    /// Appends `u` as a new column to the right of `A = QR`, updating `Q`
    /// and `R`. The rank is not altered; the caller does that afterwards.
    fn append_column(&mut self, u: &Vector) {
        assert!(self.rank < self.dim, "The affine hull already spans the space.");

        // New column R[.., rank] = Q^T u.
        for i in 0..self.dim {
            self.r[(i, self.rank)] = self.q.column(i).dot(u);
        }

        // Zero the entries below the diagonal of the new column, from the
        // bottom row upward; entry j is cleared with the help of entry j - 1.
        for j in (self.rank + 1..self.dim).rev() {
            let (c, s) = givens(self.r[(j - 1, self.rank)], self.r[(j, self.rank)]);

            // Rotate one R-entry (the other one is an implicit zero).
            self.r[(j - 1, self.rank)] =
                c * self.r[(j - 1, self.rank)] + s * self.r[(j, self.rank)];

            self.rotate_q_columns(j - 1, j, c, s);
        }
    }

    /// Updates the decomposition `A = QR` to `A + u * [1, ..., 1] = Q'R'`.
    fn special_rank_1_update(&mut self, u: &Vector) {
        let mut w = self.q.tr_mul(u);

        // Rotate w down to a multiple of the first unit vector, recording
        // the rotations in R and Q; entry k is cleared with entry k - 1.
        for k in (1..self.dim).rev() {
            let (c, s) = givens(w[k - 1], w[k]);
            w[k - 1] = c * w[k - 1] + s * w[k];

            // Rotate two R-rows. The first column of the pair is handled
            // separately to account for the implicit zero at (k, k - 1).
            self.r[(k, k - 1)] = -s * self.r[(k - 1, k - 1)];
            self.r[(k - 1, k - 1)] *= c;
            for j in k..self.rank {
                let a = self.r[(k - 1, j)];
                let b = self.r[(k, j)];
                self.r[(k - 1, j)] = c * a + s * b;
                self.r[(k, j)] = c * b - s * a;
            }

            self.rotate_q_columns(k - 1, k, c, s);
        }

        // Adding w * [1, ..., 1] now amounts to adding w[0] to the first
        // row of every active column, the other entries of w being zero.
        for j in 0..self.rank {
            self.r[(0, j)] += w[0];
        }

        self.hessenberg_clear(0);
    }

    /// Given `R` in lower Hessenberg form with the subdiagonal entries of
    /// columns `0..pos` already zero, clears the remaining subdiagonal
    /// entries via Givens rotations.
    fn hessenberg_clear(&mut self, mut pos: usize) {
        while pos < self.rank {
            // pos is the column index of the entry to be cleared.
            let (c, s) = givens(self.r[(pos, pos)], self.r[(pos + 1, pos)]);

            // Rotate the two partial R-rows; of the first pair only one
            // entry is needed, the other one is an implicit zero.
            self.r[(pos, pos)] = c * self.r[(pos, pos)] + s * self.r[(pos + 1, pos)];
            for j in pos + 1..self.rank {
                let a = self.r[(pos, j)];
                let b = self.r[(pos + 1, j)];
                self.r[(pos, j)] = c * a + s * b;
                self.r[(pos + 1, j)] = c * b - s * a;
            }

            self.rotate_q_columns(pos, pos + 1, c, s);
            pos += 1;
        }
    }

    fn rotate_q_columns(&mut self, j0: usize, j1: usize, c: Real, s: Real) {
        for i in 0..self.dim {
            let a = self.q[(i, j0)];
            let b = self.q[(i, j1)];
            self.q[(i, j0)] = c * a + s * b;
            self.q[(i, j1)] = c * b - s * a;
        }
    }

    fn q_is_orthogonal(&self) -> bool {
        let qtq = self.q.tr_mul(&self.q);
        relative_eq!(
            qtq,
            Matrix::identity(self.dim, self.dim),
            epsilon = 1.0e-8
        )
    }
}
