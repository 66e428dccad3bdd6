use miniball::ArrayPointSet;
use rand::Rng;

/// Generates `n` points of dimension `d` with coordinates drawn uniformly
/// from `[0, 1)`.
pub fn random_point_set(d: usize, n: usize, rng: &mut impl Rng) -> ArrayPointSet {
    let mut pts = ArrayPointSet::new(d, n);
    for i in 0..n {
        for j in 0..d {
            pts.set(i, j, rng.gen());
        }
    }
    pts
}
