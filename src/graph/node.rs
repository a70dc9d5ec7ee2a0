//! Graph node and directed edge types.

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// A waypoint in the road network.
///
/// Identity is the opaque `id`; the coordinates are used only by the
/// geodesic heuristic and by [`Graph::nearest_node`](super::Graph::nearest_node).
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
/// use u_wayfind::graph::Node;
///
/// let n = Node::new("389281", Point::new(53.34, -6.26).unwrap());
/// assert_eq!(n.id(), "389281");
/// assert_eq!(n.point().lat(), 53.34);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    #[serde(flatten)]
    point: Point,
}

impl Node {
    /// Creates a node at the given coordinates.
    pub fn new(id: impl Into<String>, point: Point) -> Self {
        Self {
            id: id.into(),
            point,
        }
    }

    /// Node identifier, unique within a graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Node coordinates.
    pub fn point(&self) -> &Point {
        &self.point
    }
}

/// A directed, weighted connection between two nodes.
///
/// Parallel edges between the same ordered pair are allowed and all of them
/// are considered during search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Destination node id.
    pub to: String,
    /// Travel distance in meters; never negative.
    pub distance: f64,
}

impl Edge {
    /// Creates a directed edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}
