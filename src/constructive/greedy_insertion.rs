//! Cheapest-insertion tour construction.
//!
//! Seeds the tour with targets 0 and 1, then repeatedly inserts the
//! unvisited target whose best insertion position adds the least distance.
//!
//! # Complexity
//!
//! O(n³) worst case: n insertions, each scanning O(n) targets × O(n)
//! positions.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;

/// Builds an open tour by cheapest insertion.
///
/// Insertion positions include both ends of the open path. Fails with
/// [`RoutingError::DegenerateInput`] for fewer than two targets.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::constructive::greedy_insertion;
///
/// let pos = [0.0_f64, 3.0, 1.0, 2.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let order = greedy_insertion(&dm).unwrap();
/// assert_eq!(order, vec![0, 2, 3, 1]);
/// ```
pub fn greedy_insertion(distances: &DistanceMatrix) -> Result<Vec<usize>, RoutingError> {
    let n = distances.size();
    if n < 2 {
        return Err(RoutingError::DegenerateInput {
            strategy: "greedy insertion",
            required: 2,
            actual: n,
        });
    }

    let mut order = vec![0, 1];
    let mut unvisited: Vec<usize> = (2..n).collect();

    while !unvisited.is_empty() {
        let mut best: Option<(usize, usize, f64)> = None;

        for (slot, &node) in unvisited.iter().enumerate() {
            for pos in 0..=order.len() {
                let increase = insertion_cost(&order, node, pos, distances);
                if best.map_or(true, |(_, _, b)| increase < b) {
                    best = Some((slot, pos, increase));
                }
            }
        }

        // `best` is always set: the first candidate is accepted unconditionally.
        let (slot, pos, _) = best.unwrap_or((0, order.len(), f64::INFINITY));
        let node = unvisited.remove(slot);
        order.insert(pos, node);
    }

    Ok(order)
}

/// Distance added by inserting `node` before position `pos` of `order`.
fn insertion_cost(order: &[usize], node: usize, pos: usize, distances: &DistanceMatrix) -> f64 {
    if pos == 0 {
        return distances.get(node, order[0]);
    }
    if pos == order.len() {
        return distances.get(order[pos - 1], node);
    }
    let (a, b) = (order[pos - 1], order[pos]);
    let added = distances.get(a, node) + distances.get(node, b);
    let removed = distances.get(a, b);
    if removed.is_infinite() {
        // Replacing a forbidden link with a usable detour is always welcome.
        return if added.is_infinite() {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }
    added - removed
}
