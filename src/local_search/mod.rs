//! Local search operators for improving open tours.
//!
//! - [`two_opt_improve`] — Segment reversal, restart on improvement
//! - [`three_opt_improve`] — Restricted 3-opt (segment reversals only)
//! - [`lin_kernighan`] — Nearest neighbor followed by alternating 2-opt and 3-opt sweeps

mod lin_kernighan;
mod three_opt;
mod two_opt;

pub use lin_kernighan::lin_kernighan;
pub use three_opt::three_opt_improve;
pub use two_opt::two_opt_improve;

/// Smallest decrease in tour distance accepted as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;
