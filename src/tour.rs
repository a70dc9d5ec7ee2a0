//! Tour cost helpers.
//!
//! A tour is an ordering of target indices into a [`DistanceMatrix`]. Tours
//! are open paths unless stated otherwise: the cost is the sum of
//! consecutive distances with no return leg.

use crate::distance::DistanceMatrix;

/// Cost of visiting `order` as an open path.
///
/// Infinite if any consecutive pair is unreachable; zero for fewer than two
/// stops.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::tour::tour_distance;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 5.0,
///     1.0, 0.0, 2.0,
///     5.0, 2.0, 0.0,
/// ]).unwrap();
/// assert_eq!(tour_distance(&[0, 1, 2], &dm), 3.0);
/// assert_eq!(tour_distance(&[2], &dm), 0.0);
/// ```
pub fn tour_distance(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order
        .windows(2)
        .fold(0.0, |acc, pair| acc + distances.get(pair[0], pair[1]))
}

/// Cost of `order` as a closed tour returning to its first stop.
pub fn closed_tour_distance(order: &[usize], distances: &DistanceMatrix) -> f64 {
    match (order.first(), order.last()) {
        (Some(&first), Some(&last)) if order.len() > 1 => {
            tour_distance(order, distances) + distances.get(last, first)
        }
        _ => 0.0,
    }
}

/// Returns `true` if `order` contains each of `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}
