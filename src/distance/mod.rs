//! Distance matrices and the metric closure.
//!
//! Provides a dense distance matrix and the pairwise closure that route-order
//! strategies optimize over.

mod closure;
mod matrix;

pub use closure::MetricClosure;
pub use matrix::DistanceMatrix;
