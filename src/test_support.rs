//! Graph fixtures shared by unit tests.

use crate::geo::{haversine, Point};
use crate::graph::{Edge, Graph, Node};

pub(crate) fn node(id: &str, lat: f64, lng: f64) -> Node {
    Node::new(id, Point::new(lat, lng).expect("valid fixture point"))
}

/// Nodes a few centimeters apart along the equator, so the geodesic
/// heuristic is negligible next to any edge weight of 1 or more.
pub(crate) fn tiny_offsets(ids: &[&str]) -> Vec<Node> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| node(id, 0.0, i as f64 * 1e-6))
        .collect()
}

pub(crate) fn graph_from(nodes: &[Node], edges: &[(&str, &str, f64)]) -> Graph {
    let edges = edges
        .iter()
        .map(|&(from, to, d)| Edge::new(from, to, d))
        .collect();
    Graph::new(nodes.to_vec(), edges).expect("valid fixture graph")
}

/// A `rows × cols` grid spaced 0.001° apart with two-way edges between
/// 4-neighbors, each weighted by its exact haversine length.
pub(crate) fn geodesic_graph(rows: usize, cols: usize) -> Graph {
    let id = |r: usize, c: usize| format!("r{r}c{c}");
    let mut nodes = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            nodes.push(node(&id(r, c), r as f64 * 0.001, c as f64 * 0.001));
        }
    }
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let here = &nodes[r * cols + c];
            let mut neighbors = Vec::new();
            if r + 1 < rows {
                neighbors.push(&nodes[(r + 1) * cols + c]);
            }
            if c + 1 < cols {
                neighbors.push(&nodes[r * cols + c + 1]);
            }
            for there in neighbors {
                let d = haversine(here.point(), there.point());
                edges.push(Edge::new(here.id(), there.id(), d));
                edges.push(Edge::new(there.id(), here.id(), d));
            }
        }
    }
    Graph::new(nodes, edges).expect("valid grid")
}
