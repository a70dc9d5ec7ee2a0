//! 2-opt improvement for open tours.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) with 1 ≤ i < j < n, reverse the
//! sub-sequence `order[i..=j]` and recompute the total tour distance. Keep
//! the reversal if it strictly shortens the tour and restart the scan;
//! otherwise undo it. Stop after a full pass finds no improvement.
//!
//! The first stop is never moved, so a tour seeded at target 0 still starts
//! there.
//!
//! Distances are recomputed in full rather than from the four touched
//! edges, because reversing a segment of an asymmetric (one-way) matrix
//! changes the cost of every edge inside it.
//!
//! # Complexity
//!
//! O(n³) per pass, local optimum only.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::tour::tour_distance;

use super::IMPROVEMENT_EPS;

/// Applies 2-opt to an open tour until no reversal helps.
///
/// Returns the improved order and its total distance. The result is never
/// longer than the input.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::local_search::two_opt_improve;
///
/// let pos = [0.0_f64, 1.0, 2.0, 3.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// // 0 → 3 → 2 → 1 costs 3 + 1 + 1 = 5; 0 → 1 → 2 → 3 costs 3.
/// let (improved, dist) = two_opt_improve(&[0, 3, 2, 1], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!((dist - 3.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(order: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    let mut best = tour_distance(&current, distances);

    'scan: loop {
        let n = current.len();
        for i in 1..n.saturating_sub(1) {
            for j in (i + 1)..n {
                current[i..=j].reverse();
                let candidate = tour_distance(&current, distances);
                if candidate < best - IMPROVEMENT_EPS {
                    log::trace!("2-opt reversed [{i}..={j}]: {best} -> {candidate}");
                    best = candidate;
                    continue 'scan;
                }
                current[i..=j].reverse();
            }
        }
        break;
    }

    (current, best)
}

/// One sweep over all (i, j) pairs, keeping every improving reversal as it
/// is found. Returns `true` if anything changed.
pub(crate) fn two_opt_sweep(order: &mut [usize], distances: &DistanceMatrix) -> bool {
    let n = order.len();
    let mut best = tour_distance(order, distances);
    let mut improved = false;

    for i in 1..n.saturating_sub(1) {
        for j in (i + 1)..n {
            order[i..=j].reverse();
            let candidate = tour_distance(order, distances);
            if candidate < best - IMPROVEMENT_EPS {
                best = candidate;
                improved = true;
            } else {
                order[i..=j].reverse();
            }
        }
    }

    improved
}
