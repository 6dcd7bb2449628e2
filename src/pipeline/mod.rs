//! The boundary pipeline: transform → hull → parameterize → interpolate → inverse.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::BoundaryOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialBoundaryOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelBoundaryOps;

use crate::boundary::Boundary;
use crate::config::{HullConfig, PaddingMode};
use crate::errors::Result;
use crate::fallback::fallback;
use crate::float_types::Real;
use crate::hull::extract::{extract, finite_points};
use crate::interpolate::interpolate;
use crate::parameterize::parameterize;
use crate::transform;
use nalgebra::Point2;

/// A boundary together with the hull polygon it was fitted through.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryWithHull {
    pub boundary: Boundary,
    /// Hull vertices mapped back to data space (padding included, open ring);
    /// `None` when a fallback shape was used
    pub hull: Option<Vec<Point2<Real>>>,
}

impl BoundaryWithHull {
    fn fallback(points: &[Point2<Real>], scale: Real) -> Self {
        Self { boundary: fallback(points, scale).into(), hull: None }
    }
}

/// Smooth padded boundary around one category's points.
///
/// Pure and deterministic. Only [`HullError::InvalidConfig`](crate::errors::HullError)
/// is ever returned; every numeric edge case ends in a best-effort boundary:
/// - fewer than three finite points, or a collinear set: a [`FallbackShape`](crate::fallback::FallbackShape);
/// - coordinates ≤ 0: those points are left out of the hull;
/// - non-finite samples after the inverse transform: dropped from the curve.
///
/// # Example
/// ```
/// use ashby_hull::{compute_boundary, HullConfig};
/// use nalgebra::Point2;
///
/// let foams = [
///     Point2::new(16.0, 0.0003),
///     Point2::new(36.0, 0.023),
///     Point2::new(78.0, 0.08),
///     Point2::new(470.0, 0.48),
/// ];
/// let boundary = compute_boundary(&foams, &HullConfig::default()).unwrap();
/// assert_eq!(boundary.points().unwrap().len(), 100);
/// ```
pub fn compute_boundary(points: &[Point2<Real>], config: &HullConfig) -> Result<Boundary> {
    compute_boundary_with_hull(points, config).map(|result| result.boundary)
}

/// Like [`compute_boundary`], also returning the hull control polygon.
pub fn compute_boundary_with_hull(
    points: &[Point2<Real>],
    config: &HullConfig,
) -> Result<BoundaryWithHull> {
    config.validate()?;

    let raw = finite_points(points);
    if raw.len() < 3 {
        log::debug!("{} usable points, drawing a fallback shape", raw.len());
        return Ok(BoundaryWithHull::fallback(&raw, config.scale));
    }

    // Extend mode pads through the margin, not through a radial expansion
    let expansion = match config.padding {
        PaddingMode::Scale => config.scale,
        PaddingMode::Extend(_) => 1.0,
    };
    let (working, context) = transform::forward(&raw, expansion);

    let ring = match extract(&working, config) {
        Ok(ring) => ring,
        Err(reason) => {
            log::debug!("{}, drawing a fallback shape", reason);
            return Ok(BoundaryWithHull::fallback(&raw, config.scale));
        },
    };

    let t = parameterize(&ring);
    let resampled = interpolate(&t, &ring, config.resample_count, &config.interpolation)?;

    let context = context.retaining_padding();
    let curve = transform::inverse(&resampled, &context);
    if curve.len() < resampled.len() {
        log::debug!(
            "dropped {} boundary samples outside the representable range",
            resampled.len() - curve.len()
        );
    }
    if curve.len() < 3 {
        log::debug!("boundary collapsed to {} points, drawing a fallback shape", curve.len());
        return Ok(BoundaryWithHull::fallback(&raw, config.scale));
    }

    let hull = transform::inverse(&ring[..ring.len() - 1], &context);
    Ok(BoundaryWithHull { boundary: Boundary::Curve(curve), hull: Some(hull) })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{InterpolationMode, Margin};
    use crate::errors::HullError;
    use crate::fallback::FallbackShape;

    fn foams() -> Vec<Point2<Real>> {
        let x = [16.0, 36.0, 38.0, 75.0, 78.0, 170.0, 35.0, 70.0, 70.0, 115.0, 165.0, 470.0];
        let y = [
            0.0003, 0.023, 0.001, 0.004, 0.08, 0.2, 0.001, 0.08, 0.003, 0.012, 0.2, 0.48,
        ];
        x.iter().zip(y).map(|(&x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn invalid_config_is_surfaced() {
        let config = HullConfig::default().with_resample_count(1);
        assert!(matches!(
            compute_boundary(&foams(), &config),
            Err(HullError::InvalidConfig(_))
        ));
    }

    #[test]
    fn hull_is_returned_in_data_space() {
        let result = compute_boundary_with_hull(&foams(), &HullConfig::default()).unwrap();
        let hull = result.hull.unwrap();
        assert!(hull.len() >= 3);
        // padded hull reaches beyond the data on both ends of x
        assert!(hull.iter().any(|p| p.x > 470.0));
        assert!(hull.iter().any(|p| p.x < 16.0));
    }

    #[test]
    fn extend_mode_produces_curve() {
        let config = HullConfig::default()
            .with_padding(PaddingMode::Extend(Margin::Auto))
            .with_interpolation(InterpolationMode::PeriodicQuadraticSpline);
        let boundary = compute_boundary(&foams(), &config).unwrap();
        assert_eq!(boundary.points().unwrap().len(), 100);
    }

    #[test]
    fn fallback_has_no_hull() {
        let result =
            compute_boundary_with_hull(&[Point2::new(5.0, 5.0)], &HullConfig::default()).unwrap();
        assert_eq!(
            result.boundary,
            Boundary::Fallback(FallbackShape::Point { p: Point2::new(5.0, 5.0) })
        );
        assert!(result.hull.is_none());
    }
}
