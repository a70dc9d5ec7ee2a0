//! Point-to-point search result.

use serde::{Deserialize, Serialize};

/// Outcome of a single point-to-point search.
///
/// `distance` is `f64::INFINITY` and `path` is empty when the end node is
/// not reachable from the start. Serialized, an infinite distance becomes
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Node ids from start to end, inclusive.
    pub path: Vec<String>,
    /// Node ids in the order the search finalized them.
    pub visited_order: Vec<String>,
    /// Total edge distance along `path`.
    #[serde(with = "crate::serde_util::distance")]
    pub distance: f64,
}

impl PathResult {
    /// Result for a pair with no connecting route.
    pub fn unreachable(visited_order: Vec<String>) -> Self {
        Self {
            path: Vec::new(),
            visited_order,
            distance: f64::INFINITY,
        }
    }

    /// Returns `true` if a route was found.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
