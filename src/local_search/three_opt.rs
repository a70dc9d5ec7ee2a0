//! Restricted 3-opt improvement for open tours.
//!
//! # Algorithm
//!
//! Removes three edges by choosing cut positions i < j < k, which splits the
//! tour into a head, an inner segment `B = order[i..=j]`, an inner segment
//! `C = order[j+1..=k]`, and a tail. Three reconnections are tried:
//!
//! ```text
//! head - B' - C  - tail
//! head - B  - C' - tail
//! head - B' - C' - tail
//! ```
//!
//! where `'` marks a reversed segment. Segment exchanges (head - C - B -
//! tail) are not tried, which keeps the neighborhood small enough to scan
//! exhaustively.
//!
//! # Complexity
//!
//! O(n⁴) per pass with full tour re-evaluation.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use crate::distance::DistanceMatrix;
use crate::tour::tour_distance;

use super::IMPROVEMENT_EPS;

/// Applies restricted 3-opt until a full pass finds no improvement.
///
/// Returns the improved order and its total distance.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::local_search::three_opt_improve;
/// use u_wayfind::tour::tour_distance;
///
/// let pos = [0.0_f64, 2.0, 1.0, 3.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let before = tour_distance(&[0, 1, 2, 3], &dm);
/// let (_, after) = three_opt_improve(&[0, 1, 2, 3], &dm);
/// assert!(after < before);
/// ```
pub fn three_opt_improve(order: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    while three_opt_sweep(&mut current, distances) {}
    let dist = tour_distance(&current, distances);
    (current, dist)
}

/// One sweep over all (i, j, k) triples, keeping every improving
/// reconnection as it is found. Returns `true` if anything changed.
pub(crate) fn three_opt_sweep(order: &mut [usize], distances: &DistanceMatrix) -> bool {
    let n = order.len();
    if n < 3 {
        return false;
    }
    let mut best = tour_distance(order, distances);
    let mut improved = false;

    for i in 0..n - 2 {
        for j in (i + 1)..n - 1 {
            for k in (j + 1)..n {
                for reconnection in Reconnection::ALL {
                    reconnection.apply(order, i, j, k);
                    let candidate = tour_distance(order, distances);
                    if candidate < best - IMPROVEMENT_EPS {
                        log::trace!("3-opt {reconnection:?} at ({i}, {j}, {k}): {best} -> {candidate}");
                        best = candidate;
                        improved = true;
                    } else {
                        // Each reconnection is its own inverse.
                        reconnection.apply(order, i, j, k);
                    }
                }
            }
        }
    }

    improved
}

#[derive(Debug, Clone, Copy)]
enum Reconnection {
    ReverseFirst,
    ReverseSecond,
    ReverseBoth,
}

impl Reconnection {
    const ALL: [Reconnection; 3] = [
        Reconnection::ReverseFirst,
        Reconnection::ReverseSecond,
        Reconnection::ReverseBoth,
    ];

    fn apply(self, order: &mut [usize], i: usize, j: usize, k: usize) {
        match self {
            Reconnection::ReverseFirst => order[i..=j].reverse(),
            Reconnection::ReverseSecond => order[j + 1..=k].reverse(),
            Reconnection::ReverseBoth => {
                order[i..=j].reverse();
                order[j + 1..=k].reverse();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::is_permutation;

    fn plane(pts: &[(f64, f64)]) -> DistanceMatrix {
        let n = pts.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (pts[i].0 - pts[j].0, pts[i].1 - pts[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    fn square() -> DistanceMatrix {
        plane(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_3opt_already_optimal() {
        let dm = square();
        let (order, dist) = three_opt_improve(&[0, 1, 2, 3], &dm);
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!((dist - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_3opt_does_not_worsen() {
        let dm = square();
        let initial = vec![0, 2, 1, 3];
        let initial_dist = tour_distance(&initial, &dm);
        let (_, improved_dist) = three_opt_improve(&initial, &dm);
        assert!(improved_dist <= initial_dist + 1e-10);
    }

    #[test]
    fn test_3opt_larger_instance() {
        let dm = plane(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (5.0, 0.0),
            (5.0, 10.0),
        ]);
        let initial = vec![0, 1, 3, 5, 2, 6, 4];
        let initial_dist = tour_distance(&initial, &dm);
        let (order, improved_dist) = three_opt_improve(&initial, &dm);
        assert!(improved_dist < initial_dist);
        assert!(is_permutation(&order, 7));
    }

    #[test]
    fn test_3opt_small_routes_passthrough() {
        let dm = square();
        assert_eq!(three_opt_improve(&[], &dm).0, Vec::<usize>::new());
        assert_eq!(three_opt_improve(&[2], &dm).0, vec![2]);
        assert_eq!(three_opt_improve(&[0, 1], &dm).0, vec![0, 1]);
    }

    #[test]
    fn test_reconnections_are_involutions() {
        let original = vec![0, 1, 2, 3, 4, 5];
        for r in Reconnection::ALL {
            let mut order = original.clone();
            r.apply(&mut order, 1, 2, 4);
            assert_ne!(order, original);
            r.apply(&mut order, 1, 2, 4);
            assert_eq!(order, original);
        }
    }
}
