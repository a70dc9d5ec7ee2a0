//! Held-Karp dynamic program for the open-path TSP.
//!
//! # Algorithm
//!
//! `dp[mask][i]` is the cheapest path that visits exactly the targets in
//! `mask` and ends at target `i`:
//!
//! ```text
//! dp[{i}][i]   = 0
//! dp[mask][i]  = min over j in mask \ {i} of dp[mask \ {i}][j] + d[j][i]
//! answer       = min over i of dp[full][i]
//! ```
//!
//! The path has a free start and a free end; there is no return leg. Parent
//! pointers record the minimizing `j` so the order can be unwound backwards
//! from the full mask.
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time, O(2ⁿ · n) memory. Practical up to roughly 20 targets.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of SIAM* 10(1), 196-210.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;

/// Largest target count [`held_karp`] accepts.
pub const MAX_HELD_KARP_TARGETS: usize = 20;

const NO_PARENT: u8 = u8::MAX;

/// Solves the open-path TSP exactly.
///
/// Returns the optimal order and its distance. If no finite tour exists the
/// nearest-neighbor order is returned with an infinite distance. Fails with
/// [`RoutingError::TooManyTargets`] above [`MAX_HELD_KARP_TARGETS`].
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::exact::held_karp;
///
/// // Positions on a line: 2, 0, 3, 1
/// let pos = [2.0_f64, 0.0, 3.0, 1.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let (order, dist) = held_karp(&dm).unwrap();
/// assert!((dist - 3.0).abs() < 1e-10);
/// assert!(order == vec![1, 3, 0, 2] || order == vec![2, 0, 3, 1]);
/// ```
pub fn held_karp(distances: &DistanceMatrix) -> Result<(Vec<usize>, f64), RoutingError> {
    let n = distances.size();
    if n > MAX_HELD_KARP_TARGETS {
        return Err(RoutingError::TooManyTargets {
            actual: n,
            max: MAX_HELD_KARP_TARGETS,
        });
    }
    if n <= 1 {
        return Ok(((0..n).collect(), 0.0));
    }

    let full = (1usize << n) - 1;
    let mut dp = vec![f64::INFINITY; (full + 1) * n];
    let mut parent = vec![NO_PARENT; (full + 1) * n];

    for i in 0..n {
        dp[(1 << i) * n + i] = 0.0;
    }

    for mask in 1..=full {
        if mask.count_ones() < 2 {
            continue;
        }
        for i in 0..n {
            if mask & (1 << i) == 0 {
                continue;
            }
            let prev_mask = mask ^ (1 << i);
            let mut best = f64::INFINITY;
            let mut best_j = NO_PARENT;
            for j in 0..n {
                if prev_mask & (1 << j) == 0 {
                    continue;
                }
                let cost = dp[prev_mask * n + j] + distances.get(j, i);
                if cost < best {
                    best = cost;
                    best_j = j as u8;
                }
            }
            dp[mask * n + i] = best;
            parent[mask * n + i] = best_j;
        }
    }

    let mut best_end = 0;
    let mut best = f64::INFINITY;
    for i in 0..n {
        if dp[full * n + i] < best {
            best = dp[full * n + i];
            best_end = i;
        }
    }

    if best.is_infinite() {
        log::warn!("held-karp found no finite tour over {n} targets");
        return Ok((nearest_neighbor(distances), f64::INFINITY));
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut current = best_end;
    loop {
        order.push(current);
        let p = parent[mask * n + current];
        mask ^= 1 << current;
        if p == NO_PARENT {
            break;
        }
        current = usize::from(p);
    }
    order.reverse();

    log::debug!("held-karp solved {n} targets, distance {best}");
    Ok((order, best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{is_permutation, tour_distance};

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

    /// Exhaustive open-path optimum for cross-checking.
    fn brute_force(dm: &DistanceMatrix) -> f64 {
        fn permute(rest: &mut Vec<usize>, k: usize, dm: &DistanceMatrix, best: &mut f64) {
            if k == rest.len() {
                *best = best.min(tour_distance(rest, dm));
                return;
            }
            for i in k..rest.len() {
                rest.swap(k, i);
                permute(rest, k + 1, dm, best);
                rest.swap(k, i);
            }
        }
        let mut order: Vec<usize> = (0..dm.size()).collect();
        let mut best = f64::INFINITY;
        permute(&mut order, 0, dm, &mut best);
        best
    }

    #[test]
    fn test_hk_trivial_sizes() {
        assert_eq!(held_karp(&DistanceMatrix::new(0)).expect("ok"), (vec![], 0.0));
        assert_eq!(held_karp(&DistanceMatrix::new(1)).expect("ok"), (vec![0], 0.0));
    }

    #[test]
    fn test_hk_two_asymmetric() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 7.0, 3.0, 0.0]).expect("valid");
        let (order, dist) = held_karp(&dm).expect("ok");
        assert_eq!(order, vec![1, 0]);
        assert!((dist - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_hk_matches_brute_force() {
        let dm = plane(&[
            (2.0, 3.0),
            (9.0, 1.0),
            (4.0, 8.0),
            (7.0, 6.0),
            (1.0, 9.0),
            (8.0, 9.0),
            (3.0, 1.0),
        ]);
        let (order, dist) = held_karp(&dm).expect("ok");
        assert!(is_permutation(&order, 7));
        assert!((tour_distance(&order, &dm) - dist).abs() < 1e-9);
        assert!((dist - brute_force(&dm)).abs() < 1e-9);
    }

    #[test]
    fn test_hk_avoids_forbidden_pairs() {
        // 0 -> 1 is forbidden, but 1 -> 0 -> 2 is fine.
        let mut dm = plane(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        dm.set(0, 1, f64::INFINITY);
        let (order, dist) = held_karp(&dm).expect("ok");
        assert!(dist.is_finite());
        assert!(tour_distance(&order, &dm).is_finite());
    }

    #[test]
    fn test_hk_no_finite_tour() {
        let mut dm = DistanceMatrix::new(3);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    dm.set(i, j, f64::INFINITY);
                }
            }
        }
        let (order, dist) = held_karp(&dm).expect("ok");
        assert!(is_permutation(&order, 3));
        assert!(dist.is_infinite());
    }

    #[test]
    fn test_hk_too_many_targets() {
        let dm = DistanceMatrix::new(MAX_HELD_KARP_TARGETS + 1);
        assert_eq!(
            held_karp(&dm),
            Err(RoutingError::TooManyTargets {
                actual: MAX_HELD_KARP_TARGETS + 1,
                max: MAX_HELD_KARP_TARGETS,
            })
        );
    }
}
