//! Hull construction errors

/// Errors surfaced to callers of the boundary pipeline.
///
/// Numeric trouble (non-positive coordinates under the log transform, spline
/// overshoot into non-finite values, collinear input) is absorbed internally and
/// never shows up here; only a configuration the pipeline cannot honor does.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HullError {
    /// (InvalidConfig) The configuration cannot be used
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),
}

impl HullError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        HullError::InvalidConfig(message.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HullError>;

/// Internal signal that a point set cannot span a proper polygon.
///
/// Raised by the hull extractor and resolved by the orchestrator through the
/// degenerate-shape fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// Fewer than three usable points remained after NaN filtering
    TooFewPoints(usize),
    /// All usable points lie on one line (or coincide)
    Collinear,
}

impl std::fmt::Display for Degenerate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degenerate::TooFewPoints(n) => write!(f, "(DegenerateInput) only {} usable points", n),
            Degenerate::Collinear => write!(f, "(DegenerateInput) points are collinear"),
        }
    }
}
