//! Breadth-first search.
//!
//! Explores in FIFO order and ignores edge weights, so the path it returns
//! has the fewest edges, not the smallest distance. The reported distance is
//! the sum of the actual edge weights along that hop-minimal path.

use std::collections::VecDeque;

use crate::graph::Graph;

use super::{reconstruct, PathResult};

/// Hop-minimal search from `start` to `end` (dense indices).
///
/// A node's tree edge is fixed by the first edge that discovers it, so among
/// parallel edges the one listed first wins.
pub(crate) fn bfs(graph: &Graph, start: usize, end: usize) -> PathResult {
    let n = graph.num_nodes();
    let mut discovered = vec![false; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut distance = vec![f64::INFINITY; n];
    let mut visited_order = Vec::new();
    let mut queue = VecDeque::new();

    discovered[start] = true;
    distance[start] = 0.0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visited_order.push(graph.node_at(current).id().to_string());
        if current == end {
            break;
        }
        for link in graph.links(current) {
            if discovered[link.to] {
                continue;
            }
            discovered[link.to] = true;
            previous[link.to] = Some(current);
            distance[link.to] = distance[current] + link.distance;
            queue.push_back(link.to);
        }
    }

    if !discovered[end] {
        return PathResult::unreachable(visited_order);
    }
    PathResult {
        path: reconstruct(graph, &previous, end),
        visited_order,
        distance: distance[end],
    }
}
