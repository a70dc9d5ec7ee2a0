//! Depth-first branch-and-bound for the closed TSP with a fixed start.
//!
//! Enumerates permutations that start at target 0 and return to it,
//! pruning every partial path whose accumulated cost already meets or
//! exceeds the best complete tour. The bound starts at infinity and is only
//! replaced by strictly cheaper complete tours.
//!
//! The search runs on an explicit stack of per-depth cursors, so its depth
//! is bounded by the heap rather than the call stack.
//!
//! # Complexity
//!
//! O(n!) worst case; usually far less once a good tour has been found.

use crate::distance::DistanceMatrix;

/// Outcome of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchBoundResult {
    /// Visiting order starting at target 0; the return to 0 is implied.
    pub order: Vec<usize>,
    /// Closed-tour distance including the return leg.
    pub distance: f64,
    /// Number of partial paths extended during the search.
    pub expanded: usize,
}

/// Finds the cheapest closed tour starting and ending at target 0.
///
/// If no finite tour exists the identity order is returned with an infinite
/// distance.
///
/// # Examples
///
/// ```
/// use u_wayfind::distance::DistanceMatrix;
/// use u_wayfind::exact::branch_and_bound;
///
/// // Unit square corners: 0=(0,0) 1=(1,1) 2=(1,0) 3=(0,1)
/// let pts = [(0.0_f64, 0.0_f64), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         let (dx, dy) = (pts[i].0 - pts[j].0, pts[i].1 - pts[j].1);
///         dm.set(i, j, (dx * dx + dy * dy).sqrt());
///     }
/// }
///
/// let result = branch_and_bound(&dm);
/// assert_eq!(result.order, vec![0, 2, 1, 3]);
/// assert!((result.distance - 4.0).abs() < 1e-10);
/// ```
pub fn branch_and_bound(distances: &DistanceMatrix) -> BranchBoundResult {
    let n = distances.size();
    if n == 0 {
        return BranchBoundResult {
            order: Vec::new(),
            distance: 0.0,
            expanded: 0,
        };
    }

    let mut best = f64::INFINITY;
    let mut best_order: Option<Vec<usize>> = None;
    let mut expanded = 0usize;

    // Parallel stacks: node on the path, cost to reach it, next candidate
    // to try from it.
    let mut path = vec![0usize];
    let mut cost = vec![0.0f64];
    let mut cursor = vec![0usize];
    let mut on_path = vec![false; n];
    on_path[0] = true;

    while let Some(&current) = path.last() {
        let depth = path.len() - 1;
        let so_far = cost[depth];

        if path.len() == n {
            let total = so_far + distances.get(current, 0);
            if total < best {
                best = total;
                best_order = Some(path.clone());
            }
            backtrack(&mut path, &mut cost, &mut cursor, &mut on_path);
            continue;
        }

        let mut pushed = false;
        while cursor[depth] < n {
            let next = cursor[depth];
            cursor[depth] += 1;
            if on_path[next] {
                continue;
            }
            let extended = so_far + distances.get(current, next);
            if extended < best {
                on_path[next] = true;
                path.push(next);
                cost.push(extended);
                cursor.push(0);
                expanded += 1;
                pushed = true;
                break;
            }
        }

        if !pushed {
            backtrack(&mut path, &mut cost, &mut cursor, &mut on_path);
        }
    }

    log::debug!("branch-and-bound expanded {expanded} partial tours over {n} targets");

    match best_order {
        Some(order) => BranchBoundResult {
            order,
            distance: best,
            expanded,
        },
        None => BranchBoundResult {
            order: (0..n).collect(),
            distance: f64::INFINITY,
            expanded,
        },
    }
}

fn backtrack(path: &mut Vec<usize>, cost: &mut Vec<f64>, cursor: &mut Vec<usize>, on_path: &mut [bool]) {
    if let Some(node) = path.pop() {
        on_path[node] = false;
    }
    cost.pop();
    cursor.pop();
}
