//! Point-to-point shortest-path search.
//!
//! Four interchangeable strategies behind one contract:
//!
//! - [`SearchStrategy::BreadthFirst`] — fewest edges, weight-blind
//! - [`SearchStrategy::Dijkstra`] — distance-optimal
//! - [`SearchStrategy::AStar`] — distance-optimal, geodesic heuristic (default)
//! - [`SearchStrategy::GreedyBestFirst`] — geodesic heuristic only, not optimal
//!
//! Every strategy finalizes each node at most once and stops as soon as the
//! end node is finalized.

mod best_first;
mod bfs;
mod frontier;
mod result;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::graph::Graph;

pub use result::PathResult;

/// Point-to-point search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Breadth-first: hop-minimal, reports the summed edge distance.
    BreadthFirst,
    /// Dijkstra's algorithm.
    Dijkstra,
    /// A* with the haversine heuristic.
    #[default]
    AStar,
    /// Greedy best-first on the haversine heuristic.
    GreedyBestFirst,
}

impl SearchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::BreadthFirst,
        SearchStrategy::Dijkstra,
        SearchStrategy::AStar,
        SearchStrategy::GreedyBestFirst,
    ];

    /// Returns `true` if the strategy always returns a shortest path.
    pub fn is_optimal(self) -> bool {
        matches!(self, SearchStrategy::Dijkstra | SearchStrategy::AStar)
    }
}

/// Finds a route from `start` to `end` with the given strategy.
///
/// Fails with [`RoutingError::UnknownNode`] if either id is not in the graph.
/// An unreachable `end` is not an error: the result has an empty path and an
/// infinite distance.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
/// use u_wayfind::graph::{Edge, Graph, Node};
/// use u_wayfind::search::{search, SearchStrategy};
///
/// let p = Point::new(0.0, 0.0).unwrap();
/// let graph = Graph::new(
///     vec![Node::new("A", p), Node::new("B", p), Node::new("C", p)],
///     vec![
///         Edge::new("A", "B", 10.0),
///         Edge::new("B", "C", 10.0),
///         Edge::new("A", "C", 25.0),
///     ],
/// )
/// .unwrap();
///
/// let r = search(&graph, "A", "C", SearchStrategy::Dijkstra).unwrap();
/// assert_eq!(r.path, vec!["A", "B", "C"]);
/// assert_eq!(r.distance, 20.0);
/// ```
pub fn search(
    graph: &Graph,
    start: &str,
    end: &str,
    strategy: SearchStrategy,
) -> Result<PathResult, RoutingError> {
    let s = graph.index_of(start)?;
    let t = graph.index_of(end)?;
    Ok(search_indices(graph, s, t, strategy))
}

/// [`search`] with the default strategy (A*).
pub fn search_default(graph: &Graph, start: &str, end: &str) -> Result<PathResult, RoutingError> {
    search(graph, start, end, SearchStrategy::default())
}

/// Dispatches on already-resolved node indices.
pub(crate) fn search_indices(
    graph: &Graph,
    start: usize,
    end: usize,
    strategy: SearchStrategy,
) -> PathResult {
    if start == end {
        let id = graph.node_at(start).id().to_string();
        return PathResult {
            path: vec![id.clone()],
            visited_order: vec![id],
            distance: 0.0,
        };
    }
    match strategy {
        SearchStrategy::BreadthFirst => bfs::bfs(graph, start, end),
        SearchStrategy::Dijkstra => best_first::dijkstra(graph, start, end),
        SearchStrategy::AStar => best_first::astar(graph, start, end),
        SearchStrategy::GreedyBestFirst => best_first::greedy_best_first(graph, start, end),
    }
}

/// Walks predecessor links back from `end` and returns ids start-first.
fn reconstruct(graph: &Graph, previous: &[Option<usize>], end: usize) -> Vec<String> {
    let mut path = vec![graph.node_at(end).id().to_string()];
    let mut current = end;
    while let Some(prev) = previous[current] {
        path.push(graph.node_at(prev).id().to_string());
        current = prev;
    }
    path.reverse();
    path
}
