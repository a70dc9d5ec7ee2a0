//! Metric closure over a small set of target waypoints.

use crate::error::RoutingError;
use crate::geo::Point;
use crate::graph::Graph;
use crate::search::{search_indices, SearchStrategy};

use super::DistanceMatrix;

/// Pairwise shortest distances and road-level paths among a list of targets.
///
/// For N targets this holds an N×N cost matrix and an N×N table of path
/// segments. Unreachable pairs have an infinite cost and an empty segment.
/// Diagonal entries are zero with an empty segment.
///
/// Built fresh for every optimization call; route-order strategies work on
/// the closure alone and never touch the road graph.
///
/// # Examples
///
/// ```
/// use u_wayfind::geo::Point;
/// use u_wayfind::graph::{Edge, Graph, Node};
/// use u_wayfind::distance::MetricClosure;
/// use u_wayfind::search::SearchStrategy;
///
/// let p = Point::new(0.0, 0.0).unwrap();
/// let graph = Graph::new(
///     vec![Node::new("a", p), Node::new("b", p), Node::new("c", p)],
///     vec![Edge::new("a", "b", 4.0), Edge::new("b", "c", 6.0)],
/// )
/// .unwrap();
///
/// let closure = MetricClosure::build(&graph, &["a", "c"], SearchStrategy::Dijkstra).unwrap();
/// assert_eq!(closure.distance(0, 1), 10.0);
/// assert_eq!(closure.segment(0, 1), ["a", "b", "c"]);
/// assert!(closure.distance(1, 0).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct MetricClosure {
    targets: Vec<String>,
    distances: DistanceMatrix,
    segments: Vec<Vec<String>>,
}

impl MetricClosure {
    /// Runs one point-to-point search per ordered pair of distinct targets.
    ///
    /// Every target is validated before any search runs; an unknown id fails
    /// with [`RoutingError::UnknownNode`]. The same node may appear more than
    /// once in `targets`, giving a zero-cost entry between the duplicates.
    pub fn build<S: AsRef<str>>(
        graph: &Graph,
        targets: &[S],
        strategy: SearchStrategy,
    ) -> Result<Self, RoutingError> {
        let indices = targets
            .iter()
            .map(|t| graph.index_of(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let n = indices.len();
        let mut distances = DistanceMatrix::new(n);
        let mut segments = vec![Vec::new(); n * n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let result = search_indices(graph, indices[i], indices[j], strategy);
                distances.set(i, j, result.distance);
                segments[i * n + j] = result.path;
            }
        }

        let unreachable = distances.count_unreachable();
        if unreachable > 0 {
            log::warn!("metric closure over {n} targets has {unreachable} unreachable pairs");
        }
        log::debug!(
            "built metric closure: {n} targets, {} searches with {strategy:?}",
            n * n.saturating_sub(1)
        );

        Ok(Self {
            targets: targets.iter().map(|t| t.as_ref().to_string()).collect(),
            distances,
            segments,
        })
    }

    /// Builds a closure from straight-line (haversine) distances.
    ///
    /// Used when no road graph is available: every pair is reachable and
    /// every segment is empty, so stitched paths are empty too.
    pub fn geodesic(waypoints: &[(String, Point)]) -> Self {
        let points: Vec<Point> = waypoints.iter().map(|(_, p)| *p).collect();
        let n = waypoints.len();
        Self {
            targets: waypoints.iter().map(|(id, _)| id.clone()).collect(),
            distances: DistanceMatrix::from_points(&points),
            segments: vec![Vec::new(); n * n],
        }
    }

    /// Wraps an existing cost matrix with no road segments.
    ///
    /// Returns `None` if the matrix size differs from the number of targets.
    pub fn from_matrix(targets: Vec<String>, distances: DistanceMatrix) -> Option<Self> {
        if targets.len() != distances.size() {
            return None;
        }
        let n = targets.len();
        Some(Self {
            targets,
            distances,
            segments: vec![Vec::new(); n * n],
        })
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target ids in input order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// The cost matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Shortest distance from target `i` to target `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances.get(i, j)
    }

    /// Road-level path from target `i` to target `j`.
    pub fn segment(&self, i: usize, j: usize) -> &[String] {
        &self.segments[i * self.len() + j]
    }

    /// Concatenates the segments of consecutive pairs in `order`.
    ///
    /// The first node of every segment after the first is dropped, since it
    /// repeats the last node of the previous one.
    pub fn stitch(&self, order: &[usize]) -> Vec<String> {
        let mut path = Vec::new();
        for (k, pair) in order.windows(2).enumerate() {
            let segment = self.segment(pair[0], pair[1]);
            if k == 0 {
                path.extend_from_slice(segment);
            } else {
                path.extend(segment.iter().skip(1).cloned());
            }
        }
        path
    }

    /// Maps target indices back to their ids.
    pub fn ids(&self, order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| self.targets[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{graph_from, tiny_offsets};

    fn line_graph() -> Graph {
        // a <-> b <-> c <-> d, unit weights; e is isolated.
        graph_from(
            &tiny_offsets(&["a", "b", "c", "d", "e"]),
            &[
                ("a", "b", 1.0),
                ("b", "a", 1.0),
                ("b", "c", 1.0),
                ("c", "b", 1.0),
                ("c", "d", 1.0),
                ("d", "c", 1.0),
            ],
        )
    }

    #[test]
    fn test_build_distances_and_segments() {
        let g = line_graph();
        let c = MetricClosure::build(&g, &["a", "d", "b"], SearchStrategy::AStar).expect("valid");
        assert_eq!(c.len(), 3);
        assert!((c.distance(0, 1) - 3.0).abs() < 1e-10);
        assert!((c.distance(1, 2) - 2.0).abs() < 1e-10);
        assert_eq!(c.segment(0, 1), ["a", "b", "c", "d"]);
        assert_eq!(c.segment(2, 0), ["b", "a"]);
        assert_eq!(c.distance(1, 1), 0.0);
        assert!(c.segment(1, 1).is_empty());
    }

    #[test]
    fn test_unreachable_pair_is_infinite() {
        let g = line_graph();
        let c = MetricClosure::build(&g, &["a", "e"], SearchStrategy::Dijkstra).expect("valid");
        assert!(c.distance(0, 1).is_infinite());
        assert!(c.distance(1, 0).is_infinite());
        assert!(c.segment(0, 1).is_empty());
    }

    #[test]
    fn test_duplicate_targets_zero_cost() {
        let g = line_graph();
        let c = MetricClosure::build(&g, &["b", "b"], SearchStrategy::AStar).expect("valid");
        assert_eq!(c.distance(0, 1), 0.0);
        assert_eq!(c.segment(0, 1), ["b"]);
    }

    #[test]
    fn test_unknown_target() {
        let g = line_graph();
        let err = MetricClosure::build(&g, &["a", "zz"], SearchStrategy::AStar).expect_err("unknown");
        assert_eq!(err, RoutingError::UnknownNode("zz".to_string()));
    }

    #[test]
    fn test_stitch_drops_junction_duplicates() {
        let g = line_graph();
        let c = MetricClosure::build(&g, &["a", "c", "d"], SearchStrategy::AStar).expect("valid");
        assert_eq!(c.stitch(&[0, 1, 2]), vec!["a", "b", "c", "d"]);
        assert_eq!(c.stitch(&[2, 0, 1]), vec!["d", "c", "b", "a", "b", "c"]);
        assert!(c.stitch(&[1]).is_empty());
    }

    #[test]
    fn test_geodesic_closure() {
        let wp = vec![
            ("x".to_string(), Point::new(0.0, 0.0).expect("valid")),
            ("y".to_string(), Point::new(0.0, 1.0).expect("valid")),
        ];
        let c = MetricClosure::geodesic(&wp);
        assert_eq!(c.targets(), ["x", "y"]);
        assert!(c.distance(0, 1) > 111_000.0);
        assert!(c.stitch(&[0, 1]).is_empty());
    }

    #[test]
    fn test_from_matrix_size_mismatch() {
        assert!(MetricClosure::from_matrix(vec!["a".into()], DistanceMatrix::new(2)).is_none());
        assert!(MetricClosure::from_matrix(vec!["a".into(), "b".into()], DistanceMatrix::new(2)).is_some());
    }

    #[test]
    fn test_ids() {
        let g = line_graph();
        let c = MetricClosure::build(&g, &["a", "c", "d"], SearchStrategy::AStar).expect("valid");
        assert_eq!(c.ids(&[2, 0, 1]), vec!["d", "a", "c"]);
    }
}
