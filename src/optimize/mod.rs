//! Multi-stop route computation.
//!
//! [`optimize`] builds a [`MetricClosure`] over the targets with the chosen
//! point-to-point search, orders the targets with the chosen
//! [`RouteStrategy`], and stitches the closure segments into one road-level
//! path.
//!
//! Orders are open paths: the cost is the sum of consecutive closure
//! distances with no return leg. [`RouteStrategy::BranchAndBound`] is the
//! exception and solves the closed tour from the first target.

mod options;
mod result;
mod strategy;

pub use options::RouteOptions;
pub use result::RouteResult;
pub use strategy::{RouteStrategy, DEFAULT_EXACT_THRESHOLD};

use crate::constructive::{greedy_insertion, nearest_neighbor};
use crate::distance::MetricClosure;
use crate::error::RoutingError;
use crate::exact::{branch_and_bound, held_karp};
use crate::ga::genetic;
use crate::graph::Graph;
use crate::local_search::{lin_kernighan, two_opt_improve};
use crate::tour::tour_distance;

/// Computes a visiting order and road-level route through `targets`.
///
/// Fails with [`RoutingError::UnknownNode`] if any target is not in the
/// graph. With zero or one target the identity order is returned at
/// distance zero without running a strategy. Unreachable legs are not
/// errors: they make the result distance infinite.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
/// use u_wayfind::graph::{Edge, Graph, Node};
/// use u_wayfind::optimize::{optimize, RouteOptions};
///
/// let p = |lng: f64| Point::new(0.0, lng).unwrap();
/// // Unit-weight two-way street a - b - c - d.
/// let mut edges = Vec::new();
/// for (a, b) in [("a", "b"), ("b", "c"), ("c", "d")] {
///     edges.push(Edge::new(a, b, 1.0));
///     edges.push(Edge::new(b, a, 1.0));
/// }
/// let graph = Graph::new(
///     vec![
///         Node::new("a", p(0.0)),
///         Node::new("b", p(0.000001)),
///         Node::new("c", p(0.000002)),
///         Node::new("d", p(0.000003)),
///     ],
///     edges,
/// )
/// .unwrap();
///
/// let route = optimize(&graph, &["c", "a", "d"], &RouteOptions::default()).unwrap();
/// // Either direction of the sweep a - c - d is optimal.
/// assert!(route.order == ["a", "c", "d"] || route.order == ["d", "c", "a"]);
/// assert_eq!(route.path.len(), 4);
/// assert!((route.distance - 3.0).abs() < 1e-10);
/// ```
pub fn optimize<S: AsRef<str>>(
    graph: &Graph,
    targets: &[S],
    options: &RouteOptions,
) -> Result<RouteResult, RoutingError> {
    let closure = MetricClosure::build(graph, targets, options.search)?;
    optimize_closure(&closure, options)
}

/// Orders the targets of an already-built closure.
///
/// `options.search` is ignored; the closure already fixes the distances.
pub fn optimize_closure(closure: &MetricClosure, options: &RouteOptions) -> Result<RouteResult, RoutingError> {
    let n = closure.len();
    if n <= 1 {
        return Ok(RouteResult {
            order: closure.targets().to_vec(),
            path: closure.targets().to_vec(),
            distance: 0.0,
        });
    }

    let strategy = options.strategy.resolve(n, options.exact_threshold);
    if options.strategy == RouteStrategy::Auto {
        log::debug!(
            "auto strategy picked {strategy:?} for {n} targets (threshold {})",
            options.exact_threshold
        );
    }

    let distances = closure.distances();
    let mut closed = false;
    let (order, distance) = match strategy {
        RouteStrategy::NearestNeighbor => {
            let order = nearest_neighbor(distances);
            let distance = tour_distance(&order, distances);
            (order, distance)
        }
        RouteStrategy::TwoOpt => {
            let identity: Vec<usize> = (0..n).collect();
            two_opt_improve(&identity, distances)
        }
        RouteStrategy::NearestNeighborTwoOpt => two_opt_improve(&nearest_neighbor(distances), distances),
        RouteStrategy::GreedyInsertion => {
            let order = greedy_insertion(distances)?;
            let distance = tour_distance(&order, distances);
            (order, distance)
        }
        RouteStrategy::HeldKarp => held_karp(distances)?,
        RouteStrategy::BranchAndBound => {
            let result = branch_and_bound(distances);
            closed = true;
            (result.order, result.distance)
        }
        // Auto never survives resolve().
        RouteStrategy::LinKernighan | RouteStrategy::Auto => lin_kernighan(distances),
        RouteStrategy::Genetic => genetic(distances, &options.ga),
    };

    let path = if closed {
        let mut cycle = order.clone();
        cycle.extend(order.first().copied());
        closure.stitch(&cycle)
    } else {
        closure.stitch(&order)
    };

    log::debug!("{strategy:?} ordered {n} targets, distance {distance}");
    Ok(RouteResult {
        order: closure.ids(&order),
        path,
        distance,
    })
}
