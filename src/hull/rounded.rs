//! Convex hull with a constant padding and circular corners.
//!
//! Each hull edge is pushed outward by `padding` along its normal and every
//! vertex is replaced by an arc of radius `padding` joining the two shifted
//! edges. The result is the Minkowski sum of the hull with a disc, sampled as a
//! polyline. Unlike the smooth pipeline this works directly in data units.

use super::extract::{convex_ring, extents, finite_points};
use crate::boundary::Boundary;
use crate::errors::{HullError, Result};
use crate::fallback::FallbackShape;
use crate::float_types::{Real, TAU};
use nalgebra::{Point2, Vector2};

/// Counter-clockwise outward normal of the edge `a → b`.
fn outward_normal(a: &Point2<Real>, b: &Point2<Real>) -> Vector2<Real> {
    let d = b - a;
    Vector2::new(d.y, -d.x).normalize()
}

/// Distinct support points standing in for a hull that does not exist:
/// the extremes along the wider axis for collinear input, the points
/// themselves when there are fewer than three.
fn degenerate_support(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    let finite = finite_points(points);
    let extent = extents(&finite);
    let axis = if extent.x >= extent.y { 0 } else { 1 };
    let lo = finite.iter().copied().min_by(|a, b| a[axis].total_cmp(&b[axis]));
    let hi = finite.iter().copied().max_by(|a, b| a[axis].total_cmp(&b[axis]));
    match (lo, hi) {
        (Some(lo), Some(hi)) if lo != hi => vec![lo, hi],
        (Some(lo), _) => vec![lo],
        _ => Vec::new(),
    }
}

/// Rounded, padded convex hull of `points`.
///
/// `arc_segments` is the number of chords per corner arc. One point yields a
/// circle, two (or a collinear set) a stadium. No finite point at all yields a
/// NaN point fallback.
pub fn rounded_hull(points: &[Point2<Real>], padding: Real, arc_segments: usize) -> Result<Boundary> {
    if !padding.is_finite() || padding <= 0.0 {
        return Err(HullError::invalid_config(format!(
            "rounded hull padding must be positive and finite, got {}",
            padding
        )));
    }
    if arc_segments == 0 {
        return Err(HullError::invalid_config("rounded hull needs at least one arc segment"));
    }

    let vertices = match convex_ring(points) {
        Ok(mut ring) => {
            ring.pop();
            ring
        },
        Err(reason) => {
            log::debug!("rounded hull on degenerate input: {}", reason);
            degenerate_support(points)
        },
    };

    match vertices.len() {
        0 => Ok(FallbackShape::Point { p: Point2::new(Real::NAN, Real::NAN) }.into()),
        1 => {
            let c = vertices[0];
            let count = 4 * arc_segments;
            Ok(Boundary::Curve(
                (0..count)
                    .map(|i| {
                        let theta = TAU * i as Real / count as Real;
                        c + Vector2::new(theta.cos(), theta.sin()) * padding
                    })
                    .collect(),
            ))
        },
        k => {
            let mut out = Vec::with_capacity(k * (arc_segments + 1));
            for i in 0..k {
                let prev = &vertices[(i + k - 1) % k];
                let here = &vertices[i];
                let next = &vertices[(i + 1) % k];
                let n_prev = outward_normal(prev, here);
                let n_next = outward_normal(here, next);
                let start = n_prev.y.atan2(n_prev.x);
                let sweep = (n_next.y.atan2(n_next.x) - start).rem_euclid(TAU);
                for j in 0..=arc_segments {
                    let theta = start + sweep * j as Real / arc_segments as Real;
                    out.push(here + Vector2::new(theta.cos(), theta.sin()) * padding);
                }
            }
            Ok(Boundary::Curve(out))
        },
    }
}
