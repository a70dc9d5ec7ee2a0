//! Nearest-neighbor tour construction.
//!
//! Starts at target 0 and repeatedly appends the nearest unvisited target
//! by closure distance.
//!
//! # Complexity
//!
//! O(n²) where n = number of targets.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! 20-25% above optimal, which makes it a fast baseline and a good seed for
//! local search.

use crate::distance::DistanceMatrix;

/// Builds an open tour greedily from target 0.
///
/// Ties go to the lowest index. If every remaining target is unreachable
/// from the current one, the lowest-index remaining target is appended so
/// the result is always a permutation of `0..n`.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::constructive::nearest_neighbor;
///
/// // Positions on a line: 0, 10, 1, 2
/// let pos = [0.0_f64, 10.0, 1.0, 2.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// assert_eq!(nearest_neighbor(&dm), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut current = 0;
    order.push(current);

    while !unvisited.is_empty() {
        let next = distances
            .nearest_neighbor(current, &unvisited)
            .unwrap_or(unvisited[0]);
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    order
}
