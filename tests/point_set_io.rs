mod common;

use common::random_point_set;
use miniball::point_set::{read_point_set, write_point_set, PointSetIoError};
use miniball::{Miniball, PointSet};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::Path;

fn open_fixture(name: &str) -> File {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    File::open(path).expect("missing test fixture")
}

#[test]
fn reads_the_documented_format() {
    let pts = read_point_set("3 2\n0 0\n2 3\n4 5\n".as_bytes()).unwrap();
    assert_eq!(pts.size(), 3);
    assert_eq!(pts.dimension(), 2);
    assert_eq!(pts.coord(1, 0), 2.0);
    assert_eq!(pts.coord(2, 1), 5.0);
}

#[test]
fn truncated_input_is_rejected() {
    let result = read_point_set("3 2\n0 0\n2".as_bytes());
    assert!(matches!(
        result,
        Err(PointSetIoError::UnexpectedEnd { position: 6 })
    ));
}

#[test]
fn malformed_header_is_rejected() {
    let result = read_point_set("three 2\n0 0\n".as_bytes());
    assert!(matches!(
        result,
        Err(PointSetIoError::InvalidInteger { position: 1, .. })
    ));
}

#[test]
fn malformed_coordinate_is_rejected() {
    let result = read_point_set("1 2\n0 oops\n".as_bytes());
    assert!(matches!(
        result,
        Err(PointSetIoError::InvalidCoordinate { position: 4, .. })
    ));
}

#[test]
fn write_then_read_preserves_the_points() {
    let mut rng = StdRng::seed_from_u64(161803);
    let pts = random_point_set(4, 25, &mut rng);

    let mut buffer = Vec::new();
    write_point_set(&mut buffer, &pts).unwrap();
    let read_back = read_point_set(buffer.as_slice()).unwrap();

    assert_eq!(read_back, pts);
}

// Regression fixtures: loading a recorded point file and computing its
// miniball must reproduce the recorded center and squared radius. Both
// fixtures are exact in binary floating point, hence the 1e-15 absolute
// tolerance.

#[test]
fn fixture_three_points_2d() {
    let pts = read_point_set(open_fixture("three_points_2d.pts")).unwrap();
    let mb = Miniball::new(&pts);

    assert!((mb.center()[0] - 2.0).abs() <= 1.0e-15);
    assert!((mb.center()[1] - 0.5).abs() <= 1.0e-15);
    assert!((mb.squared_radius() - 1.25).abs() <= 1.0e-15);
}

#[test]
fn fixture_two_points_3d() {
    let pts = read_point_set(open_fixture("two_points_3d.pts")).unwrap();
    let mb = Miniball::new(&pts);

    assert!((mb.center()[0] - 3.0).abs() <= 1.0e-15);
    assert!((mb.center()[1] - 2.0).abs() <= 1.0e-15);
    assert!((mb.center()[2] - 3.0).abs() <= 1.0e-15);
    assert!((mb.squared_radius() - 4.0).abs() <= 1.0e-15);
}
