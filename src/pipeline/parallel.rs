//! Parallel implementation of batch boundary computation.

use super::compute_boundary;
use super::traits::BoundaryOps;
use crate::boundary::Boundary;
use crate::config::HullConfig;
use crate::errors::Result;
use crate::float_types::Real;
use nalgebra::Point2;
use rayon::prelude::*;

/// Parallel implementation of `BoundaryOps`.
///
/// Each category is an independent pure computation, so no locking is needed.
pub struct ParallelBoundaryOps;

impl Default for ParallelBoundaryOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelBoundaryOps {
    pub const fn new() -> Self {
        Self
    }
}

impl BoundaryOps for ParallelBoundaryOps {
    fn compute_boundaries<C>(&self, categories: &[C], config: &HullConfig) -> Vec<Result<Boundary>>
    where
        C: AsRef<[Point2<Real>]> + Sync,
    {
        categories
            .par_iter()
            .map(|points| compute_boundary(points.as_ref(), config))
            .collect()
    }
}
