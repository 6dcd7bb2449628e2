//! Test support library
//! Provides sample categories & helper functions for tests.
#![allow(dead_code)]

use ashby_hull::float_types::Real;
use nalgebra::Point2;

/// Zips separate x and y columns into points.
pub fn category(x: &[Real], y: &[Real]) -> Vec<Point2<Real>> {
    x.iter().zip(y).map(|(&x, &y)| Point2::new(x, y)).collect()
}

/// Foam sample data (modulus vs. density style, spans four decades in y).
pub fn foams() -> Vec<Point2<Real>> {
    category(
        &[16.0, 36.0, 38.0, 75.0, 78.0, 170.0, 35.0, 70.0, 70.0, 115.0, 165.0, 470.0],
        &[0.0003, 0.023, 0.001, 0.004, 0.08, 0.2, 0.001, 0.08, 0.003, 0.012, 0.2, 0.48],
    )
}

/// Technical ceramics sample data.
pub fn ceramics() -> Vec<Point2<Real>> {
    category(
        &[2350.0, 3000.0, 3000.0, 3500.0, 15300.0, 2550.0, 3290.0, 3210.0, 3980.0, 15900.0],
        &[400.0, 280.0, 300.0, 215.0, 600.0, 472.0, 310.0, 460.0, 413.0, 720.0],
    )
}

/// Corners of the `[1, 10] × [1, 10]` square.
pub fn unit_decade_square() -> Vec<Point2<Real>> {
    vec![
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 10.0),
        Point2::new(10.0, 1.0),
        Point2::new(10.0, 10.0),
    ]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Points mapped to natural-log coordinates.
pub fn log_points(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    points.iter().map(|p| Point2::new(p.x.ln(), p.y.ln())).collect()
}
