//! Non-periodic interpolants.
//!
//! Both treat the closed parameter sequence as an ordinary open one, so the
//! curve is continuous at the closure point but its tangent may jump there.

use super::traits::Interpolator;
use crate::float_types::Real;
use nalgebra::{DMatrix, DVector};

/// Index of the interval `[t[i], t[i + 1]]` containing `s`, clamped to the data range.
#[inline]
pub(crate) fn interval(t: &[Real], s: Real) -> usize {
    t.partition_point(|&x| x <= s)
        .saturating_sub(1)
        .min(t.len().saturating_sub(2))
}

/// Piecewise linear interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn resample(&self, t: &[Real], values: &[Real], samples: &[Real]) -> Option<Vec<Real>> {
        if t.len() < 2 || t.len() != values.len() {
            return None;
        }
        Some(
            samples
                .iter()
                .map(|&s| {
                    let i = interval(t, s);
                    let h = t[i + 1] - t[i];
                    let u = if h > 0.0 { (s - t[i]) / h } else { 0.0 };
                    values[i] + (values[i + 1] - values[i]) * u
                })
                .collect(),
        )
    }
}

/// Quadratic interpolating spline (C¹) on an open parameter sequence.
///
/// Knots sit halfway between interior nodes, except the two outermost
/// midpoints which are dropped, so the first and last parabola each span two
/// data intervals. Each interior node `i` owns `qᵢ(s) = yᵢ + dᵢ(s - tᵢ) + eᵢ(s - tᵢ)²`;
/// the end nodes are matched by their neighbour's parabola and every knot
/// matches value and slope. The curve is therefore smooth everywhere except
/// where the closed ring wraps around.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticSpline;

impl QuadraticSpline {
    /// Interleaved `(dᵢ, eᵢ)` for nodes `1..=n-2`, or `None` if the system is singular.
    fn coefficients(t: &[Real], values: &[Real]) -> Option<Vec<Real>> {
        let n = t.len();
        let size = 2 * (n - 2);
        let mut a = DMatrix::<Real>::zeros(size, size);
        let mut b = DVector::<Real>::zeros(size);

        // first parabola also passes through node 0
        let lead = t[0] - t[1];
        a[(0, 0)] = lead;
        a[(0, 1)] = lead * lead;
        b[0] = values[0] - values[1];

        for k in 0..n - 3 {
            let h = t[k + 2] - t[k + 1];
            let half = 0.5 * h;
            let row = 1 + 2 * k;
            // value at the knot between nodes k + 1 and k + 2
            a[(row, 2 * k)] = half;
            a[(row, 2 * k + 1)] = half * half;
            a[(row, 2 * k + 2)] = half;
            a[(row, 2 * k + 3)] = -half * half;
            b[row] = values[k + 2] - values[k + 1];
            // slope at the same knot
            a[(row + 1, 2 * k)] = 1.0;
            a[(row + 1, 2 * k + 1)] = h;
            a[(row + 1, 2 * k + 2)] = -1.0;
            a[(row + 1, 2 * k + 3)] = h;
        }

        let trail = t[n - 1] - t[n - 2];
        a[(size - 1, size - 2)] = trail;
        a[(size - 1, size - 1)] = trail * trail;
        b[size - 1] = values[n - 1] - values[n - 2];

        let x = a.lu().solve(&b)?;
        x.iter().all(|v| v.is_finite()).then(|| x.iter().copied().collect())
    }
}

impl Interpolator for QuadraticSpline {
    fn resample(&self, t: &[Real], values: &[Real], samples: &[Real]) -> Option<Vec<Real>> {
        if t.len() != values.len() {
            return None;
        }
        if t.len() < 3 {
            return Linear.resample(t, values, samples);
        }
        if t.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }
        let coef = Self::coefficients(t, values)?;
        let last_owner = t.len() - 2;
        Some(
            samples
                .iter()
                .map(|&s| {
                    let i = interval(t, s);
                    let node = if s - t[i] <= 0.5 * (t[i + 1] - t[i]) { i } else { i + 1 };
                    let node = node.clamp(1, last_owner);
                    let (d, e) = (coef[2 * (node - 1)], coef[2 * (node - 1) + 1]);
                    let offset = s - t[node];
                    values[node] + d * offset + e * offset * offset
                })
                .collect(),
        )
    }
}
