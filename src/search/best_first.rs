//! Priority-driven searches: Dijkstra, A*, and greedy best-first.
//!
//! All three share one loop and differ only in the key used to order the
//! open set:
//!
//! | Strategy          | Key          | Optimal |
//! |-------------------|--------------|---------|
//! | Dijkstra          | `g`          | yes     |
//! | A*                | `g + h`      | yes     |
//! | Greedy best-first | `h`          | no      |
//!
//! `g` is the accumulated edge distance from the start and `h` the haversine
//! distance to the end node. Because edge weights are travel distances, `h`
//! never overestimates and A* returns the same distance as Dijkstra.

use crate::geo::haversine;
use crate::graph::Graph;

use super::frontier::Frontier;
use super::{reconstruct, PathResult};

/// Distance-optimal search ordered by accumulated distance.
pub(crate) fn dijkstra(graph: &Graph, start: usize, end: usize) -> PathResult {
    best_first(graph, start, end, |g, _| g)
}

/// Distance-optimal search ordered by accumulated distance plus the
/// geodesic distance to `end`.
pub(crate) fn astar(graph: &Graph, start: usize, end: usize) -> PathResult {
    let goal = *graph.node_at(end).point();
    best_first(graph, start, end, |g, node| {
        g + haversine(graph.node_at(node).point(), &goal)
    })
}

/// Fast, possibly suboptimal search ordered by geodesic distance to `end`
/// alone. Still returns a connected path whenever one exists.
pub(crate) fn greedy_best_first(graph: &Graph, start: usize, end: usize) -> PathResult {
    let goal = *graph.node_at(end).point();
    best_first(graph, start, end, |_, node| {
        haversine(graph.node_at(node).point(), &goal)
    })
}

/// Shared label-setting loop. `key(g, node)` gives the open-set priority.
fn best_first<K>(graph: &Graph, start: usize, end: usize, key: K) -> PathResult
where
    K: Fn(f64, usize) -> f64,
{
    let n = graph.num_nodes();
    let mut g = vec![f64::INFINITY; n];
    let mut closed = vec![false; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut visited_order = Vec::new();
    let mut open = Frontier::new();

    g[start] = 0.0;
    open.push(start, key(0.0, start));

    while let Some(current) = open.pop() {
        if closed[current] {
            continue;
        }
        closed[current] = true;
        visited_order.push(graph.node_at(current).id().to_string());
        if current == end {
            break;
        }

        for link in graph.links(current) {
            if closed[link.to] {
                continue;
            }
            let tentative = g[current] + link.distance;
            if tentative < g[link.to] {
                g[link.to] = tentative;
                previous[link.to] = Some(current);
                open.push(link.to, key(tentative, link.to));
            }
        }
    }

    if !closed[end] {
        return PathResult::unreachable(visited_order);
    }
    PathResult {
        path: reconstruct(graph, &previous, end),
        visited_order,
        distance: g[end],
    }
}
