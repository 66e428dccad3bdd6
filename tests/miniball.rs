mod common;

use common::random_point_set;
use miniball::{ArrayPointSet, Miniball, PointSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn empty_point_set_yields_an_empty_ball() {
    let pts = ArrayPointSet::new(3, 0);
    let mb = Miniball::new(&pts);
    assert!(mb.is_empty());
    assert_eq!(mb.len(), 0);
    assert_eq!(mb.iterations(), 0);
}

#[test]
#[should_panic]
fn center_of_an_empty_ball_panics() {
    let pts = ArrayPointSet::new(3, 0);
    let mb = Miniball::new(&pts);
    let _ = mb.center();
}

#[test]
#[should_panic]
fn radius_of_an_empty_ball_panics() {
    let pts = ArrayPointSet::new(2, 0);
    let mb = Miniball::new(&pts);
    let _ = mb.radius();
}

#[test]
fn single_point() {
    let pts = ArrayPointSet::from_coords(3, vec![1.0, -2.0, 3.5]);
    let mb = Miniball::new(&pts);

    assert!(!mb.is_empty());
    assert_eq!(mb.center().as_slice(), &[1.0, -2.0, 3.5]);
    assert_eq!(mb.radius(), 0.0);
    assert_eq!(mb.squared_radius(), 0.0);
    assert_eq!(mb.support_size(), 1);
}

#[test]
fn identical_points_collapse_to_a_zero_radius_ball() {
    let pts = ArrayPointSet::from_coords(3, vec![3.0, 1.0, 0.0, 3.0, 1.0, 0.0]);
    let mb = Miniball::new(&pts);

    assert_eq!(mb.center().as_slice(), &[3.0, 1.0, 0.0]);
    assert_eq!(mb.radius(), 0.0);
}

#[test]
fn two_points() {
    // The miniball of two points is centered at their midpoint, with the
    // half-distance as radius. This configuration is exact in binary
    // floating point.
    let pts = ArrayPointSet::from_coords(2, vec![1.0, 2.0, 5.0, 2.0]);
    let mb = Miniball::new(&pts);

    assert_eq!(mb.center().as_slice(), &[3.0, 2.0]);
    assert_eq!(mb.radius(), 2.0);
    assert_eq!(mb.squared_radius(), 4.0);
    assert_eq!(mb.support_size(), 2);
}

#[test]
fn unit_cube_in_dimension_10() {
    // All 1024 vertices of the unit cube. The miniball is centered at
    // (0.5, ..., 0.5) with squared radius d / 4 = 2.5.
    let d = 10;
    let n = 1 << d;
    let mut pts = ArrayPointSet::new(d, n);
    for i in 0..n {
        for j in 0..d {
            pts.set(i, j, ((i >> j) & 1) as f64);
        }
    }

    let mb = Miniball::new(&pts);
    assert!((mb.squared_radius() - 2.5).abs() <= 1.0e-9);
    for j in 0..d {
        assert!((mb.center()[j] - 0.5).abs() <= 1.0e-9);
    }
    assert!(mb.support_size() >= 1 && mb.support_size() <= d + 1);

    let quality = mb.verify();
    assert!(quality.max_overlength <= 1.0e-9);
}

#[test]
fn standard_simplex_with_10_vertices() {
    // The n standard basis vectors of R^n. The miniball is centered at
    // (1/n, ..., 1/n) with squared radius 1 - 1/n = 0.9.
    let n = 10;
    let mut pts = ArrayPointSet::new(n, n);
    for i in 0..n {
        pts.set(i, i, 1.0);
    }

    let mb = Miniball::new(&pts);
    assert!((mb.squared_radius() - 0.9).abs() <= 1.0e-9);
    for j in 0..n {
        assert!((mb.center()[j] - 0.1).abs() <= 1.0e-9);
    }

    let quality = mb.verify();
    assert!(quality.max_overlength <= 1.0e-9);
    assert!(quality.max_underlength <= 1.0e-9);
}

#[test]
fn random_point_sets_are_enclosed_with_the_support_on_the_boundary() {
    let mut rng = StdRng::seed_from_u64(31415);

    for &(d, n) in &[(2, 100), (3, 1000), (5, 500), (10, 200)] {
        let pts = random_point_set(d, n, &mut rng);
        let mb = Miniball::new(&pts);

        assert!(!mb.is_empty());
        assert!(mb.radius() > 0.0);
        assert!(mb.support_size() >= 1 && mb.support_size() <= d + 1);
        assert!(mb.iterations() > 0);

        // Every input point lies within radius (up to tolerance) of the
        // center.
        let tolerance = 1.0e-10 * mb.radius();
        for i in 0..n {
            let mut sq_dist = 0.0;
            for j in 0..d {
                sq_dist += (pts.coord(i, j) - mb.center()[j]).powi(2);
            }
            assert!(sq_dist.sqrt() <= mb.radius() + tolerance);
        }

        let quality = mb.verify();
        assert!(quality.qr_inconsistency <= 1.0e-10);
        assert!(quality.max_overlength <= 1.0e-10);
        assert!(quality.max_underlength <= 1.0e-10);
        assert!(quality.min_convex_coefficient >= -1.0e-9);
    }
}

#[test]
fn recomputation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(2718);
    let pts = random_point_set(4, 300, &mut rng);

    let first = Miniball::new(&pts);
    let second = Miniball::new(&pts);

    // Bitwise identical: the tie-break rules leave no room for variation.
    assert_eq!(first.center().as_slice(), second.center().as_slice());
    assert_eq!(first.squared_radius(), second.squared_radius());
    assert_eq!(first.support_size(), second.support_size());
    assert_eq!(first.iterations(), second.iterations());
}

#[test]
fn quality_display_lists_all_measures() {
    let pts = ArrayPointSet::from_coords(2, vec![1.0, 2.0, 5.0, 2.0]);
    let mb = Miniball::new(&pts);
    let text = mb.verify().to_string();

    assert!(text.contains("qr_inconsistency"));
    assert!(text.contains("support_size=2"));
}
