//! Closed-curve interpolation of a hull polygon.

pub mod piecewise;
pub mod spline;
pub mod traits;

// Re-export core types
pub use piecewise::{Linear, QuadraticSpline};
pub use spline::{PeriodicSpline, SplineDegree};
pub use traits::Interpolator;

use crate::config::InterpolationMode;
use crate::errors::{HullError, Result};
use crate::float_types::Real;
use nalgebra::Point2;

/// `count` evenly spaced parameters over `[0, 1)`.
///
/// The endpoint `1` is excluded: it is the same point on the closed curve as
/// `0`, and the returned boundary never repeats its first point.
pub fn sample_parameters(count: usize) -> Vec<Real> {
    (0..count).map(|k| k as Real / count as Real).collect()
}

/// Resamples the closed `ring` (parameterized by `t`) into `resample_count` points.
///
/// x and y are fitted independently against the same parameters. A spline
/// system that cannot be solved degrades to linear resampling; a custom
/// interpolator that returns the wrong number of samples is a configuration
/// error.
pub fn interpolate(
    t: &[Real],
    ring: &[Point2<Real>],
    resample_count: usize,
    mode: &InterpolationMode,
) -> Result<Vec<Point2<Real>>> {
    let samples = sample_parameters(resample_count);
    let xs: Vec<Real> = ring.iter().map(|p| p.x).collect();
    let ys: Vec<Real> = ring.iter().map(|p| p.y).collect();

    let quadratic_spline = PeriodicSpline::quadratic();
    let cubic_spline = PeriodicSpline::cubic();
    let interpolator: &dyn Interpolator = match mode {
        InterpolationMode::Linear => &Linear,
        InterpolationMode::Quadratic => &QuadraticSpline,
        InterpolationMode::PeriodicQuadraticSpline => &quadratic_spline,
        InterpolationMode::PeriodicCubicSpline => &cubic_spline,
        InterpolationMode::Custom(custom) => custom,
    };

    let fitted = interpolator
        .resample(t, &xs, &samples)
        .zip(interpolator.resample(t, &ys, &samples));

    let (x2, y2) = match (fitted, mode) {
        (Some(pair), _) => pair,
        (None, InterpolationMode::Custom(_)) => {
            return Err(HullError::invalid_config(format!(
                "custom interpolator must return {} samples per axis",
                resample_count
            )));
        },
        (None, _) => {
            log::debug!(
                "{} interpolation failed on {} hull vertices, resampling linearly",
                mode.tag(),
                ring.len()
            );
            Linear
                .resample(t, &xs, &samples)
                .zip(Linear.resample(t, &ys, &samples))
                .unwrap_or_default()
        },
    };

    Ok(x2.into_iter().zip(y2).map(|(x, y)| Point2::new(x, y)).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::CustomInterpolator;
    use crate::parameterize::parameterize;

    fn diamond() -> Vec<Point2<Real>> {
        vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, -1.0),
            Point2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn samples_exclude_endpoint() {
        assert_eq!(sample_parameters(4), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn every_mode_returns_requested_count() {
        let ring = diamond();
        let t = parameterize(&ring);
        for mode in [
            InterpolationMode::Linear,
            InterpolationMode::Quadratic,
            InterpolationMode::PeriodicQuadraticSpline,
            InterpolationMode::PeriodicCubicSpline,
        ] {
            let out = interpolate(&t, &ring, 37, &mode).unwrap();
            assert_eq!(out.len(), 37, "{}", mode.tag());
            assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            assert!((out[0] - ring[0]).norm() < 1e-12, "{} starts at first vertex", mode.tag());
        }
    }

    #[test]
    fn custom_called_per_axis() {
        let ring = diamond();
        let t = parameterize(&ring);
        let custom = CustomInterpolator::new(|_t, values, samples| {
            vec![values.iter().sum::<Real>(); samples.len()]
        });
        let out = interpolate(&t, &ring, 5, &InterpolationMode::Custom(custom)).unwrap();
        assert_eq!(out, vec![Point2::new(1.0, 0.0); 5]);
    }

    #[test]
    fn custom_with_wrong_length_is_invalid_config() {
        let ring = diamond();
        let t = parameterize(&ring);
        let custom = CustomInterpolator::new(|_t, _values, _samples| vec![0.0]);
        let result = interpolate(&t, &ring, 5, &InterpolationMode::Custom(custom));
        assert!(matches!(result, Err(HullError::InvalidConfig(_))));
    }

    #[test]
    fn failed_spline_degrades_to_linear() {
        // repeated parameter makes the spline system unusable
        let ring = diamond();
        let t = vec![0.0, 0.25, 0.25, 0.75, 1.0];
        let out = interpolate(&t, &ring, 8, &InterpolationMode::PeriodicCubicSpline).unwrap();
        assert_eq!(out.len(), 8);
    }
}
