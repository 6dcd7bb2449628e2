//! Hull configuration: padding strategy, interpolation strategy and sampling density.

use crate::errors::{HullError, Result};
use crate::float_types::Real;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Signature of a caller-supplied interpolator.
///
/// Receives `(parameter_values, coordinate_values, sample_values)` for one axis and
/// must return one resampled coordinate per entry of `sample_values`.
pub type CustomFn = dyn Fn(&[Real], &[Real], &[Real]) -> Vec<Real> + Send + Sync;

/// Shareable handle to a [`CustomFn`].
#[derive(Clone)]
pub struct CustomInterpolator(Arc<CustomFn>);

impl CustomInterpolator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Real], &[Real], &[Real]) -> Vec<Real> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, params: &[Real], values: &[Real], samples: &[Real]) -> Vec<Real> {
        (self.0)(params, values, samples)
    }
}

impl fmt::Debug for CustomInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomInterpolator(..)")
    }
}

/// Margin added around the points in [`PaddingMode::Extend`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Margin {
    /// A fixed margin in working-space units (the normalized log range is 1)
    Literal(Real),
    /// `(scale - 1) * max(range_x, range_y)`
    Auto,
}

/// How the hull is pushed away from the points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingMode {
    /// Expand the centered working cloud radially by `HullConfig::scale`
    #[default]
    Scale,
    /// Hull the union of four copies shifted by ±margin along each axis.
    ///
    /// The working cloud is not expanded in this mode: `HullConfig::scale`
    /// only sizes a [`Margin::Auto`] margin and fallback shapes, and has no
    /// effect on the hull under [`Margin::Literal`].
    Extend(Margin),
}

impl FromStr for PaddingMode {
    type Err = HullError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "scale" => Ok(PaddingMode::Scale),
            "extend" => Ok(PaddingMode::Extend(Margin::Auto)),
            other => match other.parse::<Real>() {
                Ok(amount) => Ok(PaddingMode::Extend(Margin::Literal(amount))),
                Err(_) => Err(HullError::invalid_config(format!(
                    "unknown padding mode: {:?}",
                    tag
                ))),
            },
        }
    }
}

/// Strategy used to turn the hull polygon into a dense closed curve.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    Linear,
    Quadratic,
    PeriodicQuadraticSpline,
    #[default]
    PeriodicCubicSpline,
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(CustomInterpolator),
}

impl InterpolationMode {
    /// Short tag used in logs and when parsing from text.
    pub const fn tag(&self) -> &'static str {
        match self {
            InterpolationMode::Linear => "linear",
            InterpolationMode::Quadratic => "quadratic",
            InterpolationMode::PeriodicQuadraticSpline => "quadratic_periodic",
            InterpolationMode::PeriodicCubicSpline => "cubic",
            InterpolationMode::Custom(_) => "custom",
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = HullError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "linear" | "none" => Ok(InterpolationMode::Linear),
            "quadratic" => Ok(InterpolationMode::Quadratic),
            "quadratic_periodic" | "periodic_quadratic" => {
                Ok(InterpolationMode::PeriodicQuadraticSpline)
            },
            "cubic" | "cubic_periodic" | "periodic_cubic" => {
                Ok(InterpolationMode::PeriodicCubicSpline)
            },
            _ => Err(HullError::invalid_config(format!(
                "unknown interpolation mode: {:?}",
                tag
            ))),
        }
    }
}

/// Everything the boundary pipeline needs besides the points.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullConfig {
    /// Padding strength; `> 1` grows the hull away from the points.
    ///
    /// Under [`PaddingMode::Scale`] it expands the working cloud. Under
    /// [`PaddingMode::Extend`] it only feeds [`Margin::Auto`] and the fallback
    /// shapes, so a literal margin makes it irrelevant for the hull.
    pub scale: Real,
    pub padding: PaddingMode,
    /// Number of points on the returned curve
    pub resample_count: usize,
    pub interpolation: InterpolationMode,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            scale: 1.1,
            padding: PaddingMode::Scale,
            resample_count: 100,
            interpolation: InterpolationMode::PeriodicCubicSpline,
        }
    }
}

impl HullConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: Real) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_padding(mut self, padding: PaddingMode) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_resample_count(mut self, resample_count: usize) -> Self {
        self.resample_count = resample_count;
        self
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Rejects configurations the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(HullError::invalid_config(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if self.resample_count < 2 {
            return Err(HullError::invalid_config(format!(
                "resample_count must be at least 2, got {}",
                self.resample_count
            )));
        }
        if let PaddingMode::Extend(Margin::Literal(amount)) = self.padding {
            if !amount.is_finite() || amount < 0.0 {
                return Err(HullError::invalid_config(format!(
                    "extend margin must be finite and non-negative, got {}",
                    amount
                )));
            }
        }
        Ok(())
    }

    /// Working-space margin for [`PaddingMode::Extend`], given the working extents.
    pub(crate) fn extend_margin(&self, range_x: Real, range_y: Real) -> Option<Real> {
        match self.padding {
            PaddingMode::Scale => None,
            PaddingMode::Extend(Margin::Literal(amount)) => Some(amount),
            PaddingMode::Extend(Margin::Auto) => Some((self.scale - 1.0) * range_x.max(range_y)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = HullConfig::default();
        assert_eq!(config.scale, 1.1);
        assert_eq!(config.padding, PaddingMode::Scale);
        assert_eq!(config.resample_count, 100);
        assert!(matches!(config.interpolation, InterpolationMode::PeriodicCubicSpline));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_scale_and_count() {
        assert!(HullConfig::new().with_scale(0.0).validate().is_err());
        assert!(HullConfig::new().with_scale(-2.0).validate().is_err());
        assert!(HullConfig::new().with_scale(Real::NAN).validate().is_err());
        assert!(HullConfig::new().with_resample_count(1).validate().is_err());
        assert!(HullConfig::new().with_resample_count(2).validate().is_ok());
    }

    #[test]
    fn rejects_negative_margin() {
        let config =
            HullConfig::new().with_padding(PaddingMode::Extend(Margin::Literal(-0.1)));
        assert!(matches!(config.validate(), Err(HullError::InvalidConfig(_))));
    }

    #[test]
    fn parses_tags() {
        assert_eq!("scale".parse::<PaddingMode>().unwrap(), PaddingMode::Scale);
        assert_eq!(
            "Extend".parse::<PaddingMode>().unwrap(),
            PaddingMode::Extend(Margin::Auto)
        );
        assert_eq!(
            "0.25".parse::<PaddingMode>().unwrap(),
            PaddingMode::Extend(Margin::Literal(0.25))
        );
        assert!("radial".parse::<PaddingMode>().is_err());

        assert_eq!(
            "quadratic_periodic".parse::<InterpolationMode>().unwrap().tag(),
            "quadratic_periodic"
        );
        assert_eq!("cubic".parse::<InterpolationMode>().unwrap().tag(), "cubic");
        assert!(matches!(
            "bezier".parse::<InterpolationMode>(),
            Err(HullError::InvalidConfig(_))
        ));
    }

    #[test]
    fn auto_margin() {
        let config = HullConfig::new()
            .with_scale(1.2)
            .with_padding(PaddingMode::Extend(Margin::Auto));
        let margin = config.extend_margin(0.5, 1.0).unwrap();
        assert!((margin - 0.2).abs() < 1e-12);
        assert_eq!(HullConfig::new().extend_margin(1.0, 1.0), None);
    }
}
