//! Property-based tests for search and route ordering.
//!
//! # Invariants tested
//!
//! - **Distance metric:** haversine is zero on identical points and symmetric.
//! - **Optimal search:** Dijkstra and A* agree on every pair.
//! - **Hop-minimal BFS:** BFS uses the fewest edges of any route.
//! - **Reachability:** all four strategies agree on whether a route exists.
//! - **Permutations:** every route-order strategy visits each target once.
//! - **Improvement:** 2-opt never lengthens its starting tour.
//! - **Exactness:** Held-Karp lower-bounds every open heuristic, and
//!   branch-and-bound lower-bounds every closed tour.

mod support;

use proptest::prelude::*;
use u_wayfind::constructive::nearest_neighbor;
use u_wayfind::distance::{DistanceMatrix, MetricClosure};
use u_wayfind::exact::{branch_and_bound, held_karp};
use u_wayfind::ga::GaConfig;
use u_wayfind::geo::haversine;
use u_wayfind::graph::{Edge, Graph, Node};
use u_wayfind::local_search::two_opt_improve;
use u_wayfind::optimize::{optimize_closure, RouteOptions, RouteStrategy};
use u_wayfind::search::{search, SearchStrategy};
use u_wayfind::tour::{closed_tour_distance, is_permutation, tour_distance};

use support::{close, point, random_graph, random_matrix};

/// Same topology, every edge weighted 1, every node at the origin.
fn unit_weight_copy(graph: &Graph) -> Graph {
    let origin = point(0.0, 0.0);
    let nodes = graph.nodes().iter().map(|n| Node::new(n.id(), origin)).collect();
    let edges = graph
        .edges()
        .iter()
        .map(|e| Edge::new(e.from.clone(), e.to.clone(), 1.0))
        .collect();
    Graph::new(nodes, edges).expect("copy of a valid graph")
}

fn fast_ga() -> GaConfig {
    GaConfig::default().with_population_size(20).with_generations(20).with_seed(99)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn haversine_is_symmetric_and_zero_on_self(
        lat1 in -90.0..=90.0f64,
        lng1 in -180.0..=180.0f64,
        lat2 in -90.0..=90.0f64,
        lng2 in -180.0..=180.0f64,
    ) {
        let a = point(lat1, lng1);
        let b = point(lat2, lng2);
        prop_assert_eq!(haversine(&a, &a), 0.0);
        prop_assert_eq!(haversine(&a, &b), haversine(&b, &a));
        prop_assert!(haversine(&a, &b) >= 0.0);
    }

    #[test]
    fn dijkstra_and_astar_agree(g in random_graph(10, 30)) {
        for from in &g.ids {
            for to in &g.ids {
                let d = search(&g.graph, from, to, SearchStrategy::Dijkstra).expect("known ids");
                let a = search(&g.graph, from, to, SearchStrategy::AStar).expect("known ids");
                prop_assert!(close(d.distance, a.distance), "{from}->{to}: {} vs {}", d.distance, a.distance);
            }
        }
    }

    #[test]
    fn bfs_is_hop_minimal(g in random_graph(10, 30)) {
        let unit = unit_weight_copy(&g.graph);
        for from in &g.ids {
            for to in &g.ids {
                let bfs = search(&g.graph, from, to, SearchStrategy::BreadthFirst).expect("known ids");
                let fewest = search(&unit, from, to, SearchStrategy::Dijkstra).expect("known ids");
                prop_assert_eq!(bfs.is_reachable(), fewest.is_reachable());
                if bfs.is_reachable() {
                    prop_assert_eq!(bfs.hops() as f64, fewest.distance);
                    let best = search(&g.graph, from, to, SearchStrategy::Dijkstra).expect("known ids");
                    prop_assert!(bfs.distance + 1e-9 >= best.distance);
                }
            }
        }
    }

    #[test]
    fn strategies_agree_on_reachability(g in random_graph(8, 16)) {
        for from in &g.ids {
            for to in &g.ids {
                let reachable: Vec<bool> = SearchStrategy::ALL
                    .iter()
                    .map(|&s| search(&g.graph, from, to, s).expect("known ids").is_reachable())
                    .collect();
                prop_assert!(reachable.iter().all(|&r| r == reachable[0]), "{from}->{to}: {reachable:?}");
            }
        }
    }

    #[test]
    fn every_strategy_returns_a_permutation(dm in random_matrix(2, 8)) {
        let n = dm.size();
        let ids: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        let closure = MetricClosure::from_matrix(ids.clone(), dm).expect("sizes match");
        for strategy in RouteStrategy::CONCRETE {
            let options = RouteOptions::default().with_strategy(strategy).with_ga(fast_ga());
            let result = optimize_closure(&closure, &options).expect("small instance");
            let mut order = result.order.clone();
            order.sort();
            let mut expected = ids.clone();
            expected.sort();
            prop_assert_eq!(order, expected, "{:?}", strategy);
            prop_assert!(result.distance.is_finite());
        }
    }

    #[test]
    fn two_opt_never_worsens_nearest_neighbor(dm in random_matrix(2, 12)) {
        let start = nearest_neighbor(&dm);
        let (improved, dist) = two_opt_improve(&start, &dm);
        prop_assert!(is_permutation(&improved, dm.size()));
        prop_assert!(dist <= tour_distance(&start, &dm) + 1e-9);
        prop_assert_eq!(improved.first(), start.first());
    }

    #[test]
    fn held_karp_lower_bounds_open_heuristics(dm in random_matrix(2, 8)) {
        let n = dm.size();
        let (_, exact) = held_karp(&dm).expect("small instance");
        let closure = MetricClosure::from_matrix((0..n).map(|i| i.to_string()).collect(), dm)
            .expect("sizes match");
        for strategy in RouteStrategy::CONCRETE {
            if strategy == RouteStrategy::BranchAndBound {
                continue;
            }
            let options = RouteOptions::default().with_strategy(strategy).with_ga(fast_ga());
            let heuristic = optimize_closure(&closure, &options).expect("small instance");
            prop_assert!(exact <= heuristic.distance + 1e-9, "{:?}: {} > {}", strategy, exact, heuristic.distance);
        }
    }

    #[test]
    fn branch_and_bound_lower_bounds_closed_tours(dm in random_matrix(2, 8)) {
        let bb = branch_and_bound(&dm);
        prop_assert!(is_permutation(&bb.order, dm.size()));
        prop_assert!(close(closed_tour_distance(&bb.order, &dm), bb.distance));
        let (hk_order, _) = held_karp(&dm).expect("small instance");
        prop_assert!(bb.distance <= closed_tour_distance(&hk_order, &dm) + 1e-9);
        let nn = nearest_neighbor(&dm);
        prop_assert!(bb.distance <= closed_tour_distance(&nn, &dm) + 1e-9);
    }
}

#[test]
fn coincident_points_have_zero_tour() {
    let dm = DistanceMatrix::from_points(&[point(0.01, 0.01), point(0.01, 0.01)]);
    assert_eq!(dm.get(0, 1), 0.0);
    assert_eq!(held_karp(&dm).expect("ok").1, 0.0);
}
