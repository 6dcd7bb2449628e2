//! Periodic splines for closed curves.
//!
//! Both splines take `t[0] = 0`, `t[m] = 1` and `values[m] == values[0]` (a closed
//! ring), and match value and slope across the wrap-around point so the curve
//! has no seam.
//!
//! ## **Periodic cubic (C²)**
//! With second derivatives `Mᵢ` at the nodes, interval widths `hᵢ` and
//! divided differences `Δᵢ = (yᵢ₊₁ - yᵢ) / hᵢ`, the cyclic system is
//! ```text
//! hᵢ₋₁·Mᵢ₋₁ + 2(hᵢ₋₁ + hᵢ)·Mᵢ + hᵢ·Mᵢ₊₁ = 6(Δᵢ - Δᵢ₋₁)
//! ```
//!
//! ## **Periodic quadratic (C¹)**
//! Knots sit halfway between the data parameters, so every data point owns one
//! parabola `qᵢ(s) = yᵢ + dᵢ(s - tᵢ) + eᵢ(s - tᵢ)²`. Matching value and slope
//! at the knots eliminates `dᵢ` and leaves
//! ```text
//! hᵢ₋₁·eᵢ₋₁ + 3(hᵢ₋₁ + hᵢ)·eᵢ + hᵢ·eᵢ₊₁ = 4(Δᵢ - Δᵢ₋₁)
//! dᵢ = Δᵢ - hᵢ(3eᵢ + eᵢ₊₁) / 4
//! ```
//!
//! Both systems are strictly diagonally dominant, so they are solvable for any
//! strictly increasing parameterization.

use super::piecewise::interval;
use super::traits::Interpolator;
use crate::float_types::Real;
use nalgebra::{DMatrix, DVector};

/// Polynomial degree of a [`PeriodicSpline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineDegree {
    Quadratic,
    Cubic,
}

/// Periodic interpolating spline of the given degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicSpline {
    pub degree: SplineDegree,
}

impl PeriodicSpline {
    pub const fn quadratic() -> Self {
        Self { degree: SplineDegree::Quadratic }
    }

    pub const fn cubic() -> Self {
        Self { degree: SplineDegree::Cubic }
    }

    /// (diagonal weight, right-hand side weight) of the cyclic system
    const fn weights(&self) -> (Real, Real) {
        match self.degree {
            SplineDegree::Quadratic => (3.0, 4.0),
            SplineDegree::Cubic => (2.0, 6.0),
        }
    }
}

/// Solves the cyclic tridiagonal system shared by both spline degrees.
fn solve_cyclic(h: &[Real], delta: &[Real], diag: Real, rhs_weight: Real) -> Option<Vec<Real>> {
    let m = h.len();
    let mut a = DMatrix::<Real>::zeros(m, m);
    let mut b = DVector::<Real>::zeros(m);
    for i in 0..m {
        let prev = (i + m - 1) % m;
        let next = (i + 1) % m;
        a[(i, prev)] += h[prev];
        a[(i, i)] += diag * (h[prev] + h[i]);
        a[(i, next)] += h[i];
        b[i] = rhs_weight * (delta[i] - delta[prev]);
    }
    let x = a.lu().solve(&b)?;
    x.iter().all(|v| v.is_finite()).then(|| x.iter().copied().collect())
}

impl Interpolator for PeriodicSpline {
    fn resample(&self, t: &[Real], values: &[Real], samples: &[Real]) -> Option<Vec<Real>> {
        if t.len() != values.len() || t.len() < 3 {
            return None;
        }
        let m = t.len() - 1;
        let h: Vec<Real> = t.windows(2).map(|w| w[1] - w[0]).collect();
        if h.iter().any(|&hi| !(hi > 0.0)) {
            return None;
        }
        let period = t[m] - t[0];
        let delta: Vec<Real> = (0..m).map(|i| (values[i + 1] - values[i]) / h[i]).collect();
        let (diag, rhs_weight) = self.weights();
        let coef = solve_cyclic(&h, &delta, diag, rhs_weight)?;

        let wrap = |s: Real| t[0] + (s - t[0]).rem_euclid(period);

        let out = match self.degree {
            SplineDegree::Cubic => samples
                .iter()
                .map(|&s| {
                    let s = wrap(s);
                    let i = interval(t, s);
                    let (mi, mj) = (coef[i], coef[(i + 1) % m]);
                    let hi = h[i];
                    let a = t[i + 1] - s;
                    let b = s - t[i];
                    mi * a * a * a / (6.0 * hi)
                        + mj * b * b * b / (6.0 * hi)
                        + (values[i] / hi - mi * hi / 6.0) * a
                        + (values[i + 1] / hi - mj * hi / 6.0) * b
                })
                .collect(),
            SplineDegree::Quadratic => {
                let d: Vec<Real> = (0..m)
                    .map(|i| delta[i] - h[i] * (3.0 * coef[i] + coef[(i + 1) % m]) / 4.0)
                    .collect();
                samples
                    .iter()
                    .map(|&s| {
                        let s = wrap(s);
                        let i = interval(t, s);
                        // left half of the interval belongs to node i, right half to node i + 1
                        let (node, offset) = if s - t[i] <= 0.5 * h[i] {
                            (i, s - t[i])
                        } else {
                            ((i + 1) % m, s - t[i + 1])
                        };
                        values[node] + d[node] * offset + coef[node] * offset * offset
                    })
                    .collect()
            },
        };
        Some(out)
    }
}
