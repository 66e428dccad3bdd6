//! Reads a point set from a file given on the command line, computes its
//! miniball and prints the result together with its quality measures.

use miniball::point_set::read_point_set;
use miniball::Miniball;
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: fromfile <point-file>");
        return ExitCode::FAILURE;
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    let pts = match read_point_set(file) {
        Ok(pts) => pts,
        Err(err) => {
            eprintln!("cannot read {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    let mb = Miniball::new(&pts);
    if mb.is_empty() {
        println!("empty point set, no ball computed");
        return ExitCode::SUCCESS;
    }

    println!("center         = {:?}", mb.center().as_slice());
    println!("radius         = {}", mb.radius());
    println!("squared radius = {}", mb.squared_radius());
    println!("quality        = {}", mb.verify());
    ExitCode::SUCCESS
}
