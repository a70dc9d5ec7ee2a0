//! # u-wayfind
//!
//! Road-graph routing library: point-to-point shortest paths over a
//! directed, weighted graph of geographic nodes, and multi-stop route
//! ordering on top of them.
//!
//! ## Modules
//!
//! - [`geo`] — Coordinates and the haversine distance
//! - [`graph`] — Nodes, directed edges, and the read-only road graph
//! - [`search`] — BFS, Dijkstra, A*, and greedy best-first search
//! - [`distance`] — Distance matrix and the metric closure over waypoints
//! - [`tour`] — Open and closed tour costs
//! - [`constructive`] — Nearest neighbor and greedy insertion
//! - [`local_search`] — 2-opt, restricted 3-opt, simplified Lin-Kernighan
//! - [`exact`] — Held-Karp and branch-and-bound
//! - [`ga`] — Genetic algorithm (roulette, order crossover, swap mutation)
//! - [`optimize`] — Strategy dispatcher producing a stitched route
//! - [`error`] — Error type shared by all of the above
//!
//! ## Example
//!
//! ```
//! use u_wayfind::geo::Point;
//! use u_wayfind::graph::{Edge, Graph, Node};
//! use u_wayfind::optimize::{optimize, RouteOptions};
//! use u_wayfind::search::{search, SearchStrategy};
//!
//! let p = Point::new(0.0, 0.0).unwrap();
//! let graph = Graph::new(
//!     vec![Node::new("A", p), Node::new("B", p), Node::new("C", p)],
//!     vec![
//!         Edge::new("A", "B", 10.0),
//!         Edge::new("B", "C", 10.0),
//!         Edge::new("A", "C", 25.0),
//!     ],
//! )
//! .unwrap();
//!
//! let path = search(&graph, "A", "C", SearchStrategy::AStar).unwrap();
//! assert_eq!(path.path, vec!["A", "B", "C"]);
//!
//! let route = optimize(&graph, &["A", "C"], &RouteOptions::default()).unwrap();
//! assert_eq!(route.order, vec!["A", "C"]);
//! assert_eq!(route.distance, 20.0);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod exact;
pub mod ga;
pub mod geo;
pub mod graph;
pub mod local_search;
pub mod optimize;
pub mod search;
pub mod tour;

mod serde_util;
#[cfg(test)]
mod test_support;

pub use error::RoutingError;
