//! The drawable result of the pipeline.

use crate::fallback::FallbackShape;
use crate::float_types::{Real, TAU};
use geo::{Contains, Coord, LineString, Point, Polygon as GeoPolygon};
use nalgebra::{Point2, Rotation2, Vector2};

/// Boundary of one category.
///
/// A [`Boundary::Curve`] is implicitly closed: its last point is *not* a copy of
/// the first, and the renderer is expected to connect them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Smooth closed curve sampled at evenly spaced parameters
    Curve(Vec<Point2<Real>>),
    /// Shape used when the points cannot form a hull
    Fallback(FallbackShape),
}

impl From<FallbackShape> for Boundary {
    fn from(shape: FallbackShape) -> Self {
        Boundary::Fallback(shape)
    }
}

impl Boundary {
    /// Points of a smooth curve, `None` for fallback shapes.
    pub fn points(&self) -> Option<&[Point2<Real>]> {
        match self {
            Boundary::Curve(points) => Some(points),
            Boundary::Fallback(_) => None,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Boundary::Fallback(_))
    }

    /// Polyline approximation suitable for drawing, open like [`Boundary::Curve`].
    ///
    /// `segments` is the number of vertices used for an ellipse (clamped to at
    /// least 3); curves are returned as they are, a segment yields its two
    /// endpoints and a point yields itself.
    pub fn to_polyline(&self, segments: usize) -> Vec<Point2<Real>> {
        match self {
            Boundary::Curve(points) => points.clone(),
            Boundary::Fallback(FallbackShape::Ellipse { center, radii, angle }) => {
                let segments = segments.max(3);
                let rotation = Rotation2::new(*angle);
                (0..segments)
                    .map(|i| {
                        let theta = TAU * (i as Real) / (segments as Real);
                        center + rotation * Vector2::new(radii.x * theta.cos(), radii.y * theta.sin())
                    })
                    .collect()
            },
            Boundary::Fallback(FallbackShape::Segment { p0, p1 }) => vec![*p0, *p1],
            Boundary::Fallback(FallbackShape::Point { p }) => vec![*p],
        }
    }

    /// Axis-aligned bounding box as `(min, max)`, `None` for an empty curve.
    pub fn bounding_box(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        match self {
            Boundary::Fallback(FallbackShape::Ellipse { center, radii, angle }) => {
                let (sin, cos) = angle.sin_cos();
                let half = Vector2::new(
                    (radii.x * radii.x * cos * cos + radii.y * radii.y * sin * sin).sqrt(),
                    (radii.x * radii.x * sin * sin + radii.y * radii.y * cos * cos).sqrt(),
                );
                Some((center - half, center + half))
            },
            _ => {
                let points = self.to_polyline(3);
                let first = points.first()?;
                let (mins, maxs) = points[1..].iter().fold(
                    (first.coords, first.coords),
                    |(mins, maxs), p| (mins.inf(&p.coords), maxs.sup(&p.coords)),
                );
                Some((Point2::from(mins), Point2::from(maxs)))
            },
        }
    }

    /// Whether `point` lies inside the boundary or within `eps` of it.
    ///
    /// Segments and points only contain what lies within `eps` of them.
    pub fn contains(&self, point: &Point2<Real>, eps: Real) -> bool {
        match self {
            Boundary::Curve(points) => {
                if points.len() < 3 {
                    return points.iter().any(|p| (p - point).norm() <= eps);
                }
                let ring: LineString<Real> =
                    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
                let polygon = GeoPolygon::new(ring, vec![]);
                polygon.contains(&Point::new(point.x, point.y))
                    || distance_to_ring(points, point) <= eps
            },
            Boundary::Fallback(FallbackShape::Ellipse { center, radii, angle }) => {
                let local = Rotation2::new(-*angle) * (point - center);
                let grow = |r: Real| (r + eps).max(Real::EPSILON);
                (local.x / grow(radii.x)).powi(2) + (local.y / grow(radii.y)).powi(2) <= 1.0
            },
            Boundary::Fallback(FallbackShape::Segment { p0, p1 }) => {
                distance_to_segment(p0, p1, point) <= eps
            },
            Boundary::Fallback(FallbackShape::Point { p }) => (p - point).norm() <= eps,
        }
    }
}

fn distance_to_segment(a: &Point2<Real>, b: &Point2<Real>, p: &Point2<Real>) -> Real {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let u = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * u)).norm()
}

/// Distance from `p` to the closed polyline through `points`.
fn distance_to_ring(points: &[Point2<Real>], p: &Point2<Real>) -> Real {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| distance_to_segment(a, b, p))
        .fold(Real::INFINITY, Real::min)
}
