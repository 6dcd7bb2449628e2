//! Traits for evaluating many category boundaries at once.

use crate::boundary::Boundary;
use crate::config::HullConfig;
use crate::errors::Result;
use crate::float_types::Real;
use nalgebra::Point2;

/// Batch boundary computation, one result per category in input order.
pub trait BoundaryOps {
    /// Computes [`compute_boundary`](super::compute_boundary) for every category.
    fn compute_boundaries<C>(&self, categories: &[C], config: &HullConfig) -> Vec<Result<Boundary>>
    where
        C: AsRef<[Point2<Real>]> + Sync;
}
