//! Smooth, padded **category hulls** for Ashby-style material-property charts.
//!
//! Given the points of one material class, [`compute_boundary`] returns a closed,
//! smooth curve that encloses them with a margin. The curve is built in log
//! space, so padding stays proportional on axes spanning many decades:
//!
//! ```text
//! points ─▶ ln · min-max · center · ×scale ─▶ convex hull ─▶ arc length
//!        ─▶ periodic spline ─▶ inverse transform ─▶ boundary
//! ```
//!
//! One or two points (or a collinear set) have no hull; they get an ellipse,
//! a segment or a point instead, see [`fallback`].
//!
//! The crate computes geometry only. Drawing the returned polyline (and
//! connecting its last point back to the first) is up to the caller.
//!
//! # Features
//! #### Optional
//! - **parallel**: use rayon to compute many category boundaries at once
//! - **serde**: `Serialize`/`Deserialize` for configuration and results

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod boundary;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod float_types;
pub mod hull;
pub mod interpolate;
pub mod parameterize;
pub mod pipeline;
pub mod transform;

pub use boundary::Boundary;
pub use config::{CustomInterpolator, HullConfig, InterpolationMode, Margin, PaddingMode};
pub use errors::HullError;
pub use fallback::FallbackShape;
pub use hull::rounded_hull;
pub use pipeline::{BoundaryOps, BoundaryWithHull, compute_boundary, compute_boundary_with_hull};
