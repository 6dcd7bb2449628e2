/// Scalar used for all coordinates.
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Threshold below which hull areas and point spreads count as zero.
///
/// Read once, from `ASHBY_HULL_TOLERANCE` at build time (e.g.
/// `ASHBY_HULL_TOLERANCE=1e-9 cargo build`) or from [`set_tolerance`] if that
/// runs first. Working coordinates are normalized to about unit range, so the
/// default of `1e-12` sits well above rounding noise.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-12
}

/// Current zero threshold for working-space geometry.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("ASHBY_HULL_TOLERANCE")
            .and_then(|text| Real::from_str(text).ok())
            .map_or_else(default_tolerance, |value| value.max(Real::EPSILON))
    })
}

/// Fixes the zero threshold before the first boundary is computed.
///
/// Only the first call wins; later calls, and calls made after [`tolerance`]
/// has been read, are ignored. Values below `f64::EPSILON` are raised to it.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
