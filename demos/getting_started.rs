use miniball::{ArrayPointSet, Miniball};

fn main() {
    // The eight corners of the unit cube.
    let mut pts = ArrayPointSet::new(3, 8);
    for i in 0..8 {
        for j in 0..3 {
            pts.set(i, j, ((i >> j) & 1) as f64);
        }
    }

    let mb = Miniball::new(&pts);
    println!(
        "center = {:?}, squared radius = {}",
        mb.center().as_slice(),
        mb.squared_radius()
    );
}
