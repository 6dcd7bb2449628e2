//! Boundaries for point sets too small or too thin to have a hull.
//!
//! With one or two points (or a collinear set) a convex hull is undefined, but
//! the chart still has to show where the category sits, so the points' bounding
//! box is turned into an ellipse, a segment or a single marker.

use crate::float_types::{Real, tolerance};
use crate::hull::extract::{extents, finite_points};
use nalgebra::{Point2, Vector2};

/// Shape drawn in place of a hull.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackShape {
    /// Ellipse with semi-axes `radii` (before rotation) turned by `angle` radians
    Ellipse {
        center: Point2<Real>,
        radii: Vector2<Real>,
        angle: Real,
    },
    /// Straight segment along the one axis that has spread
    Segment { p0: Point2<Real>, p1: Point2<Real> },
    /// All points coincide
    Point { p: Point2<Real> },
}

/// Picks a shape from the spread of the finite rows of `points`.
///
/// - both extents > 0: ellipse centered on the bounding box, semi-axes equal to
///   the half-extents times `scale`, tilted by `atan(smaller / larger extent)`
///   so it hints at the data trend;
/// - one extent > 0: segment through the box center along that axis, its
///   half-length scaled by `scale`;
/// - otherwise: a point at the center.
///
/// With no finite rows at all the result is a point at NaN, which renderers skip.
pub fn fallback(points: &[Point2<Real>], scale: Real) -> FallbackShape {
    let finite = finite_points(points);
    if finite.is_empty() {
        return FallbackShape::Point { p: Point2::new(Real::NAN, Real::NAN) };
    }

    let mut mins = finite[0].coords;
    let mut maxs = finite[0].coords;
    for p in &finite[1..] {
        mins = mins.inf(&p.coords);
        maxs = maxs.sup(&p.coords);
    }
    let center = Point2::from((mins + maxs) * 0.5);
    let extent = extents(&finite);
    let half = extent * 0.5 * scale;

    // relative to the magnitude of the coordinates, so 1e-12 spreads on 1e5 data count as flat
    let magnitude = mins.abs().sup(&maxs.abs()).max().max(1.0);
    let has_x = extent.x > tolerance() * magnitude;
    let has_y = extent.y > tolerance() * magnitude;

    match (has_x, has_y) {
        (true, true) => {
            let angle = (extent.x.min(extent.y) / extent.x.max(extent.y)).atan();
            FallbackShape::Ellipse { center, radii: half, angle }
        },
        (true, false) => FallbackShape::Segment {
            p0: Point2::new(center.x - half.x, center.y),
            p1: Point2::new(center.x + half.x, center.y),
        },
        (false, true) => FallbackShape::Segment {
            p0: Point2::new(center.x, center.y - half.y),
            p1: Point2::new(center.x, center.y + half.y),
        },
        (false, false) => FallbackShape::Point { p: center },
    }
}
