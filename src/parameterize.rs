//! Chord-length parameterization of a closed polygon.

use crate::float_types::Real;
use nalgebra::Point2;

/// Cumulative chord length from the first vertex, normalized by the perimeter.
///
/// `ring` is a closed polygon (first vertex repeated at the end). The result has
/// the same length as `ring`, starts at `0` and ends at exactly `1`. Hull
/// vertices are unevenly spaced, so fitting a spline against vertex index would
/// distort curvature; fitting against arc length does not.
///
/// A ring with zero perimeter gets uniform index spacing instead.
pub fn parameterize(ring: &[Point2<Real>]) -> Vec<Real> {
    let mut t = Vec::with_capacity(ring.len());
    let mut total = 0.0;
    if let Some(first) = ring.first() {
        let mut prev = first;
        for p in ring {
            total += (p - prev).norm();
            t.push(total);
            prev = p;
        }
    }

    if total > 0.0 && total.is_finite() {
        for v in &mut t {
            *v /= total;
        }
    } else {
        let last = ring.len().saturating_sub(1).max(1) as Real;
        for (i, v) in t.iter_mut().enumerate() {
            *v = i as Real / last;
        }
    }
    if let Some(end) = t.last_mut() {
        *end = 1.0;
    }
    t
}
