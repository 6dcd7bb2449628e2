//! Traits for one-dimensional resampling.

use crate::config::CustomInterpolator;
use crate::float_types::Real;

/// Fits `values` against the strictly increasing parameters `t` and evaluates
/// the fit at every entry of `samples`.
///
/// Returns `None` when the fit cannot be built (mismatched lengths, a singular
/// system); the caller decides how to degrade.
pub trait Interpolator {
    fn resample(&self, t: &[Real], values: &[Real], samples: &[Real]) -> Option<Vec<Real>>;
}

impl Interpolator for CustomInterpolator {
    fn resample(&self, t: &[Real], values: &[Real], samples: &[Real]) -> Option<Vec<Real>> {
        let out = self.call(t, values, samples);
        (out.len() == samples.len()).then_some(out)
    }
}
