use parallel_dijkstra::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use parallel_dijkstra::graph::{EdgeWeight, Graph, Neighbors, UNDEFINED};
use parallel_dijkstra::Error;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn edges(list: &[(&str, u64)]) -> Neighbors<u64> {
    list.iter().map(|&(k, w)| (k.to_string(), w)).collect()
}

// 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (1)
fn triangle() -> Graph<u64> {
    let graph = Graph::new();
    graph.add("0", edges(&[("1", 4), ("2", 1)]));
    graph.add("1", Neighbors::new());
    graph.add("2", edges(&[("1", 1)]));
    graph
}

fn random_graph(rng: &mut StdRng, n: usize, density: f64, max_weight: u64) -> Graph<u64> {
    let graph = Graph::new();
    for u in 0..n {
        let mut neighbors = Neighbors::new();
        for v in 0..n {
            if rng.gen_bool(density) {
                neighbors.insert(v.to_string(), rng.gen_range(0..=max_weight));
            }
        }
        graph.add(u.to_string(), neighbors);
    }
    graph
}

// Brute-force all-pairs distances for comparison
fn floyd_warshall(graph: &Graph<u64>, n: usize) -> Vec<Vec<Option<u64>>> {
    let mut d = vec![vec![None; n]; n];
    for u in 0..n {
        d[u][u] = Some(0);
        for (v, &w) in graph.get(&u.to_string()).unwrap().neighbors().iter() {
            let v: usize = v.parse().unwrap();
            let best = d[u][v].map_or(w, |cur: u64| cur.min(w));
            d[u][v] = Some(best);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |cur| a + b < cur) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    d
}

fn path_weight(graph: &Graph<u64>, path: &[String]) -> u64 {
    path.windows(2)
        .map(|pair| {
            *graph
                .get(&pair[0])
                .unwrap()
                .neighbors()
                .get(&pair[1])
                .expect("path should only use existing edges")
        })
        .sum()
}

#[test]
fn test_shorter_path_through_intermediate_vertex() {
    let graph = triangle();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "0").unwrap();

    let expected_dist: HashMap<String, u64> =
        [("0", 0), ("1", 2), ("2", 1)].iter().map(|&(k, d)| (k.to_string(), d)).collect();
    let expected_prev: HashMap<String, String> =
        [("1", "2"), ("2", "0")].iter().map(|&(k, p)| (k.to_string(), p.to_string())).collect();

    assert_eq!(result.distances, expected_dist);
    assert_eq!(result.predecessors, expected_prev, "source has no predecessor entry");

    let path = Dijkstra::new().get_path(&result, "1").unwrap();
    assert_eq!(path, vec!["0", "2", "1"]);
}

#[test]
fn test_disconnected_vertex_stays_unreachable() {
    let graph = triangle();
    graph.add("3", Neighbors::new());
    let dijkstra = Dijkstra::new();

    for source in ["0", "1", "2"] {
        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distances["3"], u64::infinity());
        assert_eq!(result.predecessors["3"], UNDEFINED);
        assert!(!result.is_reachable("3"));
        assert!(dijkstra.get_path(&result, "3").is_none());
    }

    let result = dijkstra.compute_shortest_paths(&graph, "3").unwrap();
    assert_eq!(result.distance("3"), Some(0));
    for target in ["0", "1", "2"] {
        assert!(result.distances[target].is_infinite());
        assert_eq!(result.predecessors[target], UNDEFINED);
    }
}

#[test]
fn test_unknown_source_yields_only_itself() {
    let graph = triangle();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "9").unwrap();

    assert_eq!(result.distance("9"), Some(0));
    for target in ["0", "1", "2"] {
        assert!(result.distance(target).is_none());
        assert_eq!(result.predecessor(target), None);
    }
}

#[test]
fn test_empty_graph() {
    let graph: Graph<u64> = Graph::new();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "0").unwrap();
    assert_eq!(result.distances.len(), 1);
    assert_eq!(result.distance("0"), Some(0));
    assert!(result.predecessors.is_empty());
}

#[test]
fn test_zero_weight_edges_are_followed() {
    let graph = Graph::new();
    graph.add("a", edges(&[("b", 0)]));
    graph.add("b", edges(&[("c", 0)]));
    graph.add("c", Neighbors::new());

    let result = Dijkstra::new().compute_shortest_paths(&graph, "a").unwrap();
    assert_eq!(result.distance("c"), Some(0));
    assert_eq!(result.predecessor("c"), Some("b"));
}

#[test]
fn test_edges_to_missing_vertices_are_ignored() {
    let graph = Graph::new();
    graph.add("a", edges(&[("ghost", 1), ("b", 2)]));
    graph.add("b", Neighbors::new());

    let result = Dijkstra::new().compute_shortest_paths(&graph, "a").unwrap();
    assert!(!result.distances.contains_key("ghost"));
    assert_eq!(result.distance("b"), Some(2));
}

#[test]
fn test_sum_reaching_sentinel_is_not_a_path() {
    let graph: Graph<u8> = Graph::new();
    graph.add("0", [("1".to_string(), 200u8)].into_iter().collect());
    graph.add("1", [("2".to_string(), 54u8), ("3".to_string(), 55u8), ("4".to_string(), 100u8)].into_iter().collect());
    graph.add("2", Neighbors::new());
    graph.add("3", Neighbors::new());
    graph.add("4", Neighbors::new());

    let result = Dijkstra::new().compute_shortest_paths(&graph, "0").unwrap();
    assert_eq!(result.distance("2"), Some(254));
    assert_eq!(result.distance("3"), None, "255 is the infinite sentinel");
    assert_eq!(result.distance("4"), None, "overflowing sums are not relaxed");
    assert_eq!(result.predecessor("4"), None);
}

#[test]
fn test_distances_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    let dijkstra = Dijkstra::new();

    for round in 0..20 {
        let n = rng.gen_range(1..12);
        let graph = random_graph(&mut rng, n, 0.3, 9);
        let expected = floyd_warshall(&graph, n);

        for s in 0..n {
            let result = dijkstra.compute_shortest_paths(&graph, &s.to_string()).unwrap();
            for t in 0..n {
                let target = t.to_string();
                assert_eq!(
                    result.distance(&target),
                    expected[s][t],
                    "round {}: distance {} -> {}",
                    round,
                    s,
                    t
                );
            }
        }
    }
}

#[test]
fn test_paths_sum_to_distances() {
    let mut rng = StdRng::seed_from_u64(1234);
    let graph = random_graph(&mut rng, 15, 0.25, 9);
    let dijkstra = Dijkstra::new();

    for s in 0..15 {
        let source = s.to_string();
        let result = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
        assert_eq!(result.distance(&source), Some(0));

        for t in 0..15 {
            let target = t.to_string();
            match (result.distance(&target), dijkstra.get_path(&result, &target)) {
                (Some(dist), Some(path)) => {
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&target));
                    assert_eq!(path_weight(&graph, &path), dist);
                }
                (None, None) => {
                    assert_eq!(result.predecessors[&target], UNDEFINED);
                }
                (dist, path) => panic!("inconsistent result for {}: {:?} / {:?}", target, dist, path),
            }
        }
    }
}

#[test]
fn test_cancelled_run_reports_error() {
    let graph = triangle();
    let flag = Arc::new(AtomicBool::new(true));
    let dijkstra = Dijkstra::new().with_cancellation(flag);

    let mut result = ShortestPathResult::new("0");
    match dijkstra.compute_into(&graph, "0", &mut result) {
        Err(Error::Cancelled(source)) => assert_eq!(source, "0"),
        other => panic!("expected cancellation, got {:?}", other),
    }
}

#[test]
fn test_compute_into_resets_reused_tables() {
    let graph = triangle();
    let dijkstra = Dijkstra::new();

    let mut table = ShortestPathResult::new("0");
    dijkstra.compute_into(&graph, "0", &mut table).unwrap();
    dijkstra.compute_into(&graph, "1", &mut table).unwrap();

    assert_eq!(table.source, "1");
    assert_eq!(table.distance("1"), Some(0));
    assert!(table.distance("0").is_none());
    assert!(!table.predecessors.contains_key("1"));
}
