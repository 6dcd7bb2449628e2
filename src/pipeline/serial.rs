//! Serial implementation of batch boundary computation.

use super::compute_boundary;
use super::traits::BoundaryOps;
use crate::boundary::Boundary;
use crate::config::HullConfig;
use crate::errors::Result;
use crate::float_types::Real;
use nalgebra::Point2;

/// Serial implementation of `BoundaryOps`.
pub struct SerialBoundaryOps;

impl Default for SerialBoundaryOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialBoundaryOps {
    pub const fn new() -> Self {
        Self
    }
}

impl BoundaryOps for SerialBoundaryOps {
    fn compute_boundaries<C>(&self, categories: &[C], config: &HullConfig) -> Vec<Result<Boundary>>
    where
        C: AsRef<[Point2<Real>]> + Sync,
    {
        categories
            .iter()
            .map(|points| compute_boundary(points.as_ref(), config))
            .collect()
    }
}
