//! Fixtures and generators shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use u_wayfind::distance::DistanceMatrix;
use u_wayfind::geo::{haversine, Point};
use u_wayfind::graph::{Edge, Graph, Node};

pub fn point(lat: f64, lng: f64) -> Point {
    Point::new(lat, lng).expect("valid test point")
}

/// Builds a graph from `(id, lat, lng)` nodes and `(from, to, distance)`
/// edges.
pub fn graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str, f64)]) -> Graph {
    let nodes = nodes
        .iter()
        .map(|&(id, lat, lng)| Node::new(id, point(lat, lng)))
        .collect();
    let edges = edges.iter().map(|&(f, t, d)| Edge::new(f, t, d)).collect();
    Graph::new(nodes, edges).expect("valid test graph")
}

/// Adds both directions of every `(a, b, distance)` street.
pub fn two_way<'a>(streets: &[(&'a str, &'a str, f64)]) -> Vec<(&'a str, &'a str, f64)> {
    streets
        .iter()
        .flat_map(|&(a, b, d)| [(a, b, d), (b, a, d)])
        .collect()
}

/// A random road graph: node ids `n0..`, positions inside a ~1 km box,
/// and directed edges whose weight is at least the straight-line length
/// of the edge, so the haversine heuristic stays admissible.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: Graph,
    pub ids: Vec<String>,
}

pub fn random_graph(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = RandomGraph> {
    (2..=max_nodes)
        .prop_flat_map(move |n| {
            (
                prop::collection::vec((0.0..0.01f64, 0.0..0.01f64), n),
                prop::collection::vec((0..n, 0..n, 1.0..3.0f64), 0..=max_edges),
            )
        })
        .prop_map(|(coords, raw_edges)| {
            let ids: Vec<String> = (0..coords.len()).map(|i| format!("n{i}")).collect();
            let points: Vec<Point> = coords.iter().map(|&(lat, lng)| point(lat, lng)).collect();
            let nodes = ids
                .iter()
                .zip(&points)
                .map(|(id, p)| Node::new(id.clone(), *p))
                .collect();
            let edges = raw_edges
                .iter()
                .map(|&(a, b, stretch)| {
                    Edge::new(ids[a].clone(), ids[b].clone(), haversine(&points[a], &points[b]) * stretch)
                })
                .collect();
            let graph = Graph::new(nodes, edges).expect("generated graph is valid");
            RandomGraph { graph, ids }
        })
}

/// Haversine distance matrix over random points in a ~5 km box.
pub fn random_matrix(min: usize, max: usize) -> impl Strategy<Value = DistanceMatrix> {
    prop::collection::vec((0.0..0.05f64, 0.0..0.05f64), min..=max).prop_map(|coords| {
        let points: Vec<Point> = coords.iter().map(|&(lat, lng)| point(lat, lng)).collect();
        DistanceMatrix::from_points(&points)
    })
}

/// Relative float comparison for path lengths in meters.
pub fn close(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
