//! Convex hull extraction, plain and rounded.

pub mod extract;
pub mod rounded;

// Re-export core functions
pub use extract::extract;
pub use rounded::rounded_hull;
