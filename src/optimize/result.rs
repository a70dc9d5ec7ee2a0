//! Multi-stop route result.

use serde::{Deserialize, Serialize};

/// Outcome of a route-order optimization.
///
/// `order` lists every target exactly once. `path` is the road-level route
/// obtained by stitching the closure segments of consecutive targets; a
/// closed-tour strategy also appends the segment back to the first target.
/// An infinite `distance` means some consecutive pair is unreachable, and
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Target ids in visiting order.
    pub order: Vec<String>,
    /// Node ids along the full route.
    pub path: Vec<String>,
    /// Total route distance.
    #[serde(with = "crate::serde_util::distance")]
    pub distance: f64,
}

impl RouteResult {
    /// Returns `true` if every leg of the route is reachable.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}
