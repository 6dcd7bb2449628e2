// main.rs
//
// Minimal demo: compute the boundaries of two sample material classes and
// print them as CSV (`category,kind,x,y`) for any plotting tool to draw on
// log-log axes. Set RUST_LOG=debug to see the pipeline's decisions.

use ashby_hull::pipeline::serial::SerialBoundaryOps;
use ashby_hull::{Boundary, BoundaryOps, HullConfig, InterpolationMode, rounded_hull};
use nalgebra::Point2;

fn category(x: &[f64], y: &[f64]) -> Vec<Point2<f64>> {
    x.iter().zip(y).map(|(&x, &y)| Point2::new(x, y)).collect()
}

fn print_boundary(name: &str, kind: &str, boundary: &Boundary) {
    for p in boundary.to_polyline(64) {
        println!("{},{},{},{}", name, kind, p.x, p.y);
    }
}

fn main() {
    env_logger::init();

    // Young's modulus vs. density style sample data
    let foams = category(
        &[16.0, 36.0, 38.0, 75.0, 78.0, 170.0, 35.0, 70.0, 70.0, 115.0, 165.0, 470.0],
        &[0.0003, 0.023, 0.001, 0.004, 0.08, 0.2, 0.001, 0.08, 0.003, 0.012, 0.2, 0.48],
    );
    let ceramics = category(
        &[2350.0, 3000.0, 3000.0, 3500.0, 15300.0, 2550.0, 3290.0, 3210.0, 3980.0, 15900.0],
        &[400.0, 280.0, 300.0, 215.0, 600.0, 472.0, 310.0, 460.0, 413.0, 720.0],
    );
    let single = category(&[900.0], &[2.0]);
    let names = ["foams", "technical ceramics", "single sample"];
    let categories = [foams.clone(), ceramics, single];

    let config = HullConfig::default()
        .with_resample_count(200)
        .with_interpolation(InterpolationMode::PeriodicCubicSpline);

    println!("category,kind,x,y");
    let results = SerialBoundaryOps::new().compute_boundaries(&categories, &config);
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(boundary) => {
                let kind = if boundary.is_fallback() { "fallback" } else { "hull" };
                print_boundary(name, kind, &boundary);
            },
            Err(err) => log::error!("{}: {}", name, err),
        }
    }

    // linear-space rounded hull, as used for annotations on linear axes
    match rounded_hull(&foams, 10.0, 8) {
        Ok(boundary) => print_boundary("foams", "rounded", &boundary),
        Err(err) => log::error!("foams: {}", err),
    }
}
