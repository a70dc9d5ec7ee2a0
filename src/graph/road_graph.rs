//! Immutable road graph with an adjacency index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::geo::{haversine, Point};

use super::node::{Edge, Node};

/// An outgoing edge resolved to dense node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub(crate) to: usize,
    pub(crate) distance: f64,
}

/// A directed, weighted graph of geographic waypoints.
///
/// Built once from node and edge lists and read-only afterwards. Node ids
/// are interned to dense indices so searches can use flat arrays; the
/// adjacency index groups edges by their `from` node in input order.
///
/// Edges whose endpoints are not nodes of the graph are retained in
/// [`edges`](Self::edges) but never traversed.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
/// use u_wayfind::graph::{Edge, Graph, Node};
///
/// let graph = Graph::new(
///     vec![
///         Node::new("a", Point::new(0.0, 0.0).unwrap()),
///         Node::new("b", Point::new(0.0, 0.001).unwrap()),
///     ],
///     vec![Edge::new("a", "b", 120.0)],
/// )
/// .unwrap();
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.outgoing("a").count(), 1);
/// assert_eq!(graph.outgoing("b").count(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    /// Edge indices per node, grouped by `from`.
    adjacency: Vec<Vec<usize>>,
    /// Traversable edges per node, parallel to `adjacency` minus dangling ones.
    links: Vec<Vec<Link>>,
}

impl Graph {
    /// Builds a graph from node and edge lists.
    ///
    /// Fails with [`RoutingError::DuplicateNode`] if two nodes share an id,
    /// or [`RoutingError::InvalidEdge`] if an edge distance is negative or
    /// non-finite.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, RoutingError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id().to_string(), i).is_some() {
                return Err(RoutingError::DuplicateNode(node.id().to_string()));
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut links = vec![Vec::new(); nodes.len()];
        let mut dangling = 0usize;

        for (e, edge) in edges.iter().enumerate() {
            if !edge.distance.is_finite() || edge.distance < 0.0 {
                return Err(RoutingError::InvalidEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    distance: edge.distance,
                });
            }
            let Some(&from) = index.get(&edge.from) else {
                dangling += 1;
                continue;
            };
            adjacency[from].push(e);
            match index.get(&edge.to) {
                Some(&to) => links[from].push(Link {
                    to,
                    distance: edge.distance,
                }),
                None => dangling += 1,
            }
        }

        if dangling > 0 {
            log::warn!("graph has {dangling} edges with unknown endpoints; they are not traversable");
        }
        log::debug!("built graph with {} nodes and {} edges", nodes.len(), edges.len());

        Ok(Self {
            nodes,
            index,
            edges,
            adjacency,
            links,
        })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, including any with unknown endpoints.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Returns `true` if `id` is a node of this graph.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown ids.
    pub fn outgoing<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        let edge_ids: &[usize] = match self.index.get(id) {
            Some(&i) => &self.adjacency[i],
            None => &[],
        };
        edge_ids.iter().map(move |&e| &self.edges[e])
    }

    /// Finds the node closest to `point` by great-circle distance.
    ///
    /// Ties go to the node inserted first. Returns `None` for an empty graph.
    pub fn nearest_node(&self, point: &Point) -> Option<&Node> {
        let mut best: Option<(&Node, f64)> = None;
        for node in &self.nodes {
            let d = haversine(point, node.point());
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((node, d)),
            }
        }
        best.map(|(node, _)| node)
    }

    /// Resolves an id to its dense index.
    pub(crate) fn index_of(&self, id: &str) -> Result<usize, RoutingError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode(id.to_string()))
    }

    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn links(&self, idx: usize) -> &[Link] {
        &self.links[idx]
    }
}

/// Serialized form: plain node and edge lists.
#[derive(Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = RoutingError;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        Graph::new(data.nodes, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}
