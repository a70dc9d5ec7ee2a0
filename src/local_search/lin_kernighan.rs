//! Simplified Lin-Kernighan style improvement.
//!
//! # Algorithm
//!
//! 1. Build an initial tour with [`nearest_neighbor`].
//! 2. Alternate a 2-opt sweep and a restricted 3-opt sweep.
//! 3. Stop once a full round of both move types finds no improvement.
//!
//! This is not the full variable-depth LK search; it is a fixed-depth
//! combination of 2- and 3-exchanges that tends to land close to optimal on
//! the waypoint counts the dispatcher hands it.
//!
//! # Reference
//!
//! Lin, S. & Kernighan, B.W. (1973). "An Effective Heuristic Algorithm for
//! the Traveling-Salesman Problem", *Operations Research* 21(2), 498-516.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::tour::tour_distance;

use super::three_opt::three_opt_sweep;
use super::two_opt::two_opt_sweep;

/// Builds a nearest-neighbor tour and improves it with 2-opt and 3-opt
/// moves until neither helps.
///
/// Returns the order and its open-path distance.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::local_search::lin_kernighan;
///
/// let pos = [0.0_f64, 4.0, 1.0, 3.0, 2.0];
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let (order, dist) = lin_kernighan(&dm);
/// assert_eq!(order, vec![0, 2, 4, 3, 1]);
/// assert!((dist - 4.0).abs() < 1e-10);
/// ```
pub fn lin_kernighan(distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut order = nearest_neighbor(distances);
    let mut rounds = 0usize;

    loop {
        rounds += 1;
        let by_two_opt = two_opt_sweep(&mut order, distances);
        let by_three_opt = three_opt_sweep(&mut order, distances);
        if !by_two_opt && !by_three_opt {
            break;
        }
    }

    let dist = tour_distance(&order, distances);
    log::debug!("lin-kernighan converged after {rounds} rounds at {dist}");
    (order, dist)
}
