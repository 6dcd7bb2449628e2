//! Raw data space ⇄ working space.
//!
//! Material-property axes span many decades, so padding has to be proportional
//! in log space. The forward pipeline is
//!
//! ```text
//! ln  →  min-max to [0, 1]  →  subtract mean  →  × scale
//! ```
//!
//! applied per axis, and [`inverse`] undoes it in reverse order.

use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Per-axis statistics recorded by [`forward`], needed to map working points back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    /// Minimum of the log-transformed data, per axis
    pub min: Vector2<Real>,
    /// Maximum of the log-transformed data, per axis
    pub max: Vector2<Real>,
    /// Mean of the min-max scaled data, per axis
    pub mean: Vector2<Real>,
    /// Uniform factor applied last
    pub scale: Real,
    undo_scale: bool,
}

impl TransformContext {
    /// A context whose inverse keeps the `scale` expansion, so a hull built on
    /// expanded working points maps back to a padded boundary in data space.
    pub const fn retaining_padding(mut self) -> Self {
        self.undo_scale = false;
        self
    }

    /// Width of the min-max window on one axis; a flat axis divides by 1.
    fn span(&self, axis: usize) -> Real {
        let span = self.max[axis] - self.min[axis];
        if span.is_finite() && span > 0.0 { span } else { 1.0 }
    }
}

/// Natural log that maps non-positive (and NaN) input to NaN instead of -inf.
#[inline]
fn log_or_nan(value: Real) -> Real {
    if value > 0.0 { value.ln() } else { Real::NAN }
}

/// (min, max, mean) over the finite entries, or NaN triple when there are none.
fn finite_stats(values: impl Iterator<Item = Real>) -> (Real, Real, Real) {
    let mut min = Real::INFINITY;
    let mut max = Real::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
        sum += v;
        count += 1;
    }
    if count == 0 {
        (Real::NAN, Real::NAN, Real::NAN)
    } else {
        (min, max, sum / count as Real)
    }
}

/// Maps raw points into centered, normalized, `scale`-expanded log space.
///
/// Rows are kept one-to-one with the input: a point with a coordinate ≤ 0
/// comes out as NaN in that coordinate and is left for later stages to drop.
pub fn forward(points: &[Point2<Real>], scale: Real) -> (Vec<Point2<Real>>, TransformContext) {
    let logged: Vec<Point2<Real>> = points
        .iter()
        .map(|p| Point2::new(log_or_nan(p.x), log_or_nan(p.y)))
        .collect();

    let (min_x, max_x, _) = finite_stats(logged.iter().map(|p| p.x));
    let (min_y, max_y, _) = finite_stats(logged.iter().map(|p| p.y));

    let mut context = TransformContext {
        min: Vector2::new(min_x, min_y),
        max: Vector2::new(max_x, max_y),
        mean: Vector2::zeros(),
        scale,
        undo_scale: true,
    };

    let (span_x, span_y) = (context.span(0), context.span(1));
    let normalized: Vec<Point2<Real>> = logged
        .iter()
        .map(|p| Point2::new((p.x - min_x) / span_x, (p.y - min_y) / span_y))
        .collect();

    let (_, _, mean_x) = finite_stats(normalized.iter().map(|p| p.x));
    let (_, _, mean_y) = finite_stats(normalized.iter().map(|p| p.y));
    context.mean = Vector2::new(mean_x, mean_y);

    let working = normalized
        .iter()
        .map(|p| Point2::from((p.coords - context.mean) * scale))
        .collect();

    (working, context)
}

/// Maps working points back to data space.
///
/// Rows whose exponential overflows to infinity or underflows to zero are
/// dropped: neither can be placed on a logarithmic axis.
pub fn inverse(working: &[Point2<Real>], context: &TransformContext) -> Vec<Point2<Real>> {
    let (span_x, span_y) = (context.span(0), context.span(1));
    let scale = if context.undo_scale { context.scale } else { 1.0 };

    working
        .iter()
        .map(|p| {
            let centered = p.coords / scale + context.mean;
            Point2::new(
                (centered.x * span_x + context.min.x).exp(),
                (centered.y * span_y + context.min.y).exp(),
            )
        })
        .filter(|p| p.x.is_finite() && p.y.is_finite() && p.x > 0.0 && p.y > 0.0)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn working_cloud_is_centered_and_scaled() {
        let points = [
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 10.0),
            Point2::new(10.0, 1.0),
            Point2::new(10.0, 10.0),
        ];
        let (working, ctx) = forward(&points, 2.0);
        assert_relative_eq!(ctx.mean.x, 0.5);
        assert_relative_eq!(ctx.mean.y, 0.5);
        assert_relative_eq!(working[0].x, -1.0);
        assert_relative_eq!(working[3].y, 1.0);
    }

    #[test]
    fn round_trip() {
        let points = [
            Point2::new(16.0, 0.0003),
            Point2::new(36.0, 0.023),
            Point2::new(470.0, 0.48),
            Point2::new(75.0, 0.004),
        ];
        let (working, ctx) = forward(&points, 1.1);
        let back = inverse(&working, &ctx);
        assert_eq!(back.len(), points.len());
        for (a, b) in points.iter().zip(&back) {
            assert_relative_eq!(a.x, b.x, max_relative = 1e-9);
            assert_relative_eq!(a.y, b.y, max_relative = 1e-9);
        }
    }

    #[test]
    fn non_positive_becomes_nan_and_is_dropped_on_inverse() {
        let points = [
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 3.0),
            Point2::new(4.0, 5.0),
        ];
        let (working, ctx) = forward(&points, 1.0);
        assert!(working[0].x.is_nan());
        assert!(working[1].x.is_finite());
        // stats ignore the NaN row
        assert_relative_eq!(ctx.min.x, 0.0);
        assert_relative_eq!(ctx.max.x, 4.0_f64.ln());
        assert_eq!(inverse(&working, &ctx).len(), 2);
    }

    #[test]
    fn retaining_padding_keeps_expansion() {
        let points = [Point2::new(1.0, 1.0), Point2::new(100.0, 100.0)];
        let (working, ctx) = forward(&points, 1.5);
        let padded = inverse(&working, &ctx.retaining_padding());
        assert!(padded[0].x < 1.0);
        assert!(padded[1].x > 100.0);
    }

    #[test]
    fn underflow_and_overflow_are_dropped() {
        let points = [Point2::new(1.0, 1.0), Point2::new(100.0, 100.0)];
        let (_, ctx) = forward(&points, 1.0);
        let working = [
            Point2::new(-500.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 500.0),
        ];
        let back = inverse(&working, &ctx);
        assert_eq!(back.len(), 1);
        assert_relative_eq!(back[0].x, 10.0, max_relative = 1e-12);
        assert_relative_eq!(back[0].y, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn flat_axis_does_not_divide_by_zero() {
        let points = [Point2::new(3.0, 7.0), Point2::new(3.0, 9.0)];
        let (working, ctx) = forward(&points, 1.0);
        assert_eq!(working[0].x, 0.0);
        let back = inverse(&working, &ctx);
        assert_relative_eq!(back[0].x, 3.0, max_relative = 1e-12);
    }
}
