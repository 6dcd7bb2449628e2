//! Convex hull of a working-space point cloud, in either padding mode.

use crate::config::{HullConfig, PaddingMode};
use crate::errors::Degenerate;
use crate::float_types::{Real, tolerance};
use geo::{Area, ConvexHull, MultiPoint, Point};
use nalgebra::{Point2, Vector2};

/// Rows that are finite in both coordinates.
pub fn finite_points(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .copied()
        .collect()
}

/// Per-axis extent `(max - min)` of the given points; zeros for an empty slice.
pub fn extents(points: &[Point2<Real>]) -> Vector2<Real> {
    let mut mins = Vector2::repeat(Real::INFINITY);
    let mut maxs = Vector2::repeat(Real::NEG_INFINITY);
    for p in points {
        mins = mins.inf(&p.coords);
        maxs = maxs.sup(&p.coords);
    }
    if points.is_empty() { Vector2::zeros() } else { maxs - mins }
}

/// Twice the signed area of a closed ring (positive when counter-clockwise).
pub(crate) fn signed_area2(ring: &[Point2<Real>]) -> Real {
    ring.windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum()
}

/// Convex hull of the finite rows of `points`.
///
/// Returns the hull as a counter-clockwise ring whose first vertex is repeated
/// at the end, or [`Degenerate`] when fewer than three distinct, non-collinear
/// points are available.
pub(crate) fn convex_ring(points: &[Point2<Real>]) -> Result<Vec<Point2<Real>>, Degenerate> {
    let finite = finite_points(points);
    if finite.len() < 3 {
        return Err(Degenerate::TooFewPoints(finite.len()));
    }

    let extent = extents(&finite).max();
    if extent <= tolerance() {
        return Err(Degenerate::Collinear);
    }

    let multi: MultiPoint<Real> = finite.iter().map(|p| Point::new(p.x, p.y)).collect();
    let hull = multi.convex_hull();
    if hull.unsigned_area() <= tolerance() * extent * extent {
        return Err(Degenerate::Collinear);
    }

    // Drop coincident neighbours so chord lengths stay strictly positive
    let eps = tolerance() * extent;
    let mut ring: Vec<Point2<Real>> = Vec::with_capacity(hull.exterior().0.len() + 1);
    for c in hull.exterior().coords() {
        let p = Point2::new(c.x, c.y);
        if ring.last().is_none_or(|last: &Point2<Real>| (p - last).norm() > eps) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && (ring[ring.len() - 1] - ring[0]).norm() <= eps {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(Degenerate::Collinear);
    }
    ring.push(ring[0]);

    if signed_area2(&ring) < 0.0 {
        ring.reverse();
    }
    Ok(ring)
}

/// Hull polygon of the working points under the configured padding mode.
///
/// - [`PaddingMode::Scale`]: the hull of the points as given (they are already
///   expanded by the transform pipeline).
/// - [`PaddingMode::Extend`]: the hull of four copies shifted by `(0, ±margin)`
///   and `(±margin, 0)`, which pads both axes independently.
pub fn extract(
    working: &[Point2<Real>],
    config: &HullConfig,
) -> Result<Vec<Point2<Real>>, Degenerate> {
    match config.padding {
        PaddingMode::Scale => convex_ring(working),
        PaddingMode::Extend(_) => {
            let finite = finite_points(working);
            if finite.is_empty() {
                return Err(Degenerate::TooFewPoints(0));
            }
            let range = extents(&finite);
            let margin = config.extend_margin(range.x, range.y).unwrap_or(0.0);
            let offsets = [
                Vector2::new(0.0, margin),
                Vector2::new(0.0, -margin),
                Vector2::new(margin, 0.0),
                Vector2::new(-margin, 0.0),
            ];
            let shifted: Vec<Point2<Real>> = offsets
                .iter()
                .flat_map(|offset| finite.iter().map(move |p| p + offset))
                .collect();
            // one or two points padded by a margin still span a polygon
            convex_ring(&shifted)
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Margin;

    fn square() -> Vec<Point2<Real>> {
        vec![
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.0, 0.0),
        ]
    }

    #[test]
    fn closed_counter_clockwise_ring() {
        let ring = extract(&square(), &HullConfig::default()).unwrap();
        assert_eq!(ring.len(), 5, "four corners plus the closing vertex");
        assert_eq!(ring.first(), ring.last());
        assert!(signed_area2(&ring) > 0.0);
        assert!(!ring.contains(&Point2::new(0.0, 0.0)));
    }

    #[test]
    fn nan_rows_are_ignored() {
        let mut points = square();
        points.push(Point2::new(Real::NAN, 100.0));
        points.push(Point2::new(100.0, Real::NAN));
        let ring = extract(&points, &HullConfig::default()).unwrap();
        assert!(ring.iter().all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));
    }

    #[test]
    fn collinear_is_degenerate() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert_eq!(
            extract(&points, &HullConfig::default()),
            Err(Degenerate::Collinear)
        );
    }

    #[test]
    fn too_few_points() {
        let points = [Point2::new(0.0, 0.0), Point2::new(Real::NAN, 1.0)];
        assert_eq!(
            extract(&points, &HullConfig::default()),
            Err(Degenerate::TooFewPoints(1))
        );
    }

    #[test]
    fn extend_mode_pads_each_axis() {
        let config =
            HullConfig::default().with_padding(PaddingMode::Extend(Margin::Literal(0.5)));
        let ring = extract(&square(), &config).unwrap();
        let max_x = ring.iter().map(|p| p.x).fold(Real::MIN, Real::max);
        let max_y = ring.iter().map(|p| p.y).fold(Real::MIN, Real::max);
        assert!((max_x - 1.5).abs() < 1e-12);
        assert!((max_y - 1.5).abs() < 1e-12);
        // corners get cut at 45°, so the padded hull is an octagon
        assert_eq!(ring.len(), 9);
    }

    #[test]
    fn extend_mode_turns_collinear_into_polygon() {
        let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let config =
            HullConfig::default().with_padding(PaddingMode::Extend(Margin::Literal(0.1)));
        let ring = extract(&points, &config).unwrap();
        assert!(signed_area2(&ring) > 0.0);
    }
}
