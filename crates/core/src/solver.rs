use super::csr::CsrGraph;
use super::traits::ShortestPathSolver;
use common::{error::Error, types::ShortestPaths};

/// Solver implementing the Bellman-Ford algorithm for single-source shortest
/// paths over graphs whose edge weights may be negative.
///
/// Unlike Dijkstra-family solvers, negative weights are handled exactly; a
/// negative-weight cycle reachable from the source is reported through the
/// `has_negative_cycle` flag on the result rather than as an error.
pub struct BellmanFordSolver;

impl ShortestPathSolver for BellmanFordSolver {
    /// Computes shortest paths from `source` with `V - 1` relaxation passes
    /// followed by one detection scan.
    ///
    /// Every pass enumerates all edges in a fixed order (vertex index
    /// ascending, each vertex's block in insertion order), so two solves of
    /// the same graph and source produce identical results. A pass that
    /// improves nothing ends the loop early; once a full pass is a no-op no
    /// edge can relax again, so the output is unchanged by stopping.
    ///
    /// # Returns
    /// - `Ok(paths)` with distances, predecessors and the negative-cycle
    ///   flag. When the flag is set, distances of cycle-affected vertices
    ///   are not meaningful and callers must not trust them.
    /// - `Err(Error::InvalidVertex)` if `source` is not a vertex of `graph`.
    ///
    /// A graph with no vertices solves to the empty result for any `source`.
    fn shortest_paths(&self, graph: &CsrGraph, source: usize) -> Result<ShortestPaths, Error> {
        let num_vertices = graph.num_vertices;
        if num_vertices == 0 {
            return Ok(ShortestPaths::empty());
        }
        if source >= num_vertices {
            return Err(Error::InvalidVertex(source));
        }

        let mut distances: Vec<Option<i64>> = vec![None; num_vertices];
        let mut predecessors: Vec<Option<usize>> = vec![None; num_vertices];
        distances[source] = Some(0);

        // |V| - 1 passes suffice: any shortest path that exists has at most
        // |V| - 1 edges.
        for _ in 0..num_vertices - 1 {
            if !Self::relax_all(graph, &mut distances, &mut predecessors) {
                break;
            }
        }

        let has_negative_cycle = Self::scan_for_violation(graph, &distances);

        Ok(ShortestPaths {
            distances,
            predecessors,
            has_negative_cycle,
        })
    }
}

impl BellmanFordSolver {
    /// Runs one relaxation pass over every edge and reports whether any
    /// distance improved.
    ///
    /// The scan is read-only over the CSR arrays and writes only the
    /// distance and predecessor slots of relaxed targets.
    fn relax_all(
        graph: &CsrGraph,
        distances: &mut [Option<i64>],
        predecessors: &mut [Option<usize>],
    ) -> bool {
        let mut updated = false;

        for u in 0..graph.num_vertices {
            let start = graph.node_pointers[u];
            let end = graph.node_pointers[u + 1];

            for i in start..end {
                // Re-read per edge: a negative self-loop earlier in this
                // block may have lowered distances[u].
                let Some(from_distance) = distances[u] else {
                    break;
                };

                let v = graph.edge_targets[i];
                let candidate = from_distance + graph.edge_weights[i];

                if distances[v].is_none_or(|current| candidate < current) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    updated = true;
                }
            }
        }

        updated
    }

    /// One more scan in the same edge order, applying no updates: an edge
    /// that can still relax after `V - 1` passes proves a negative cycle
    /// reachable from the source. Stops at the first such edge.
    fn scan_for_violation(graph: &CsrGraph, distances: &[Option<i64>]) -> bool {
        for u in 0..graph.num_vertices {
            let Some(from_distance) = distances[u] else {
                continue;
            };

            let start = graph.node_pointers[u];
            let end = graph.node_pointers[u + 1];

            for i in start..end {
                let v = graph.edge_targets[i];
                let candidate = from_distance + graph.edge_weights[i];

                if distances[v].is_none_or(|current| candidate < current) {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod bellman_ford_tests {
    use super::*;
    use common::types::Edge;

    fn build_graph(edges: &[Edge], num_vertices: usize) -> CsrGraph {
        CsrGraph::from_edges(num_vertices, edges).unwrap()
    }

    fn solve(graph: &CsrGraph, source: usize) -> ShortestPaths {
        BellmanFordSolver.shortest_paths(graph, source).unwrap()
    }

    #[test]
    fn mixed_weight_graph_distances_and_predecessors() {
        let edges = vec![
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
        ];
        let graph = build_graph(&edges, 5);

        let paths = solve(&graph, 0);

        assert_eq!(
            paths.distances,
            vec![Some(0), Some(-1), Some(2), Some(-2), Some(1)]
        );
        assert_eq!(
            paths.predecessors,
            vec![None, Some(0), Some(1), Some(4), Some(1)]
        );
        assert!(!paths.has_negative_cycle);
    }

    #[test]
    fn added_back_edge_creates_reachable_negative_cycle() {
        let edges = vec![
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
            // Closes the loop 1 -> 2 -> 1 with total weight -7.
            (2, 1, -10),
        ];
        let graph = build_graph(&edges, 5);

        let paths = solve(&graph, 0);

        assert!(paths.has_negative_cycle);
    }

    #[test]
    fn disconnected_vertex_stays_unreachable() {
        let edges = vec![
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
        ];
        let graph = build_graph(&edges, 6);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances[5], None);
        assert_eq!(paths.predecessors[5], None);
        assert!(!paths.has_negative_cycle);
        assert!(!paths.is_reachable(5));
    }

    #[test]
    fn single_vertex_no_edges() {
        let graph = build_graph(&[], 1);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances, vec![Some(0)]);
        assert_eq!(paths.predecessors, vec![None]);
        assert!(!paths.has_negative_cycle);
    }

    #[test]
    fn empty_graph_solves_to_empty_result() {
        let graph = build_graph(&[], 0);

        let paths = solve(&graph, 0);

        assert_eq!(paths, ShortestPaths::empty());
    }

    #[test]
    fn source_out_of_bounds_is_rejected() {
        let graph = build_graph(&[(0, 1, 1)], 2);

        let result = BellmanFordSolver.shortest_paths(&graph, 2);

        assert_eq!(result, Err(Error::InvalidVertex(2)));
    }

    #[test]
    fn negative_self_loop_is_a_negative_cycle() {
        let graph = build_graph(&[(0, 0, -1)], 1);

        let paths = solve(&graph, 0);

        assert!(paths.has_negative_cycle);
    }

    #[test]
    fn non_negative_self_loop_is_not_a_cycle() {
        let graph = build_graph(&[(0, 0, 0), (0, 0, 3)], 1);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances, vec![Some(0)]);
        assert!(!paths.has_negative_cycle);
    }

    #[test]
    fn parallel_edges_relax_independently() {
        let graph = build_graph(&[(0, 1, 5), (0, 1, 2), (0, 1, 9)], 2);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances[1], Some(2));
        assert_eq!(paths.predecessors[1], Some(0));
    }

    #[test]
    fn zero_weight_cycle_is_not_flagged() {
        let graph = build_graph(&[(0, 1, 0), (1, 0, 0)], 2);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances, vec![Some(0), Some(0)]);
        assert!(!paths.has_negative_cycle);
    }

    #[test]
    fn unreachable_negative_cycle_is_not_flagged() {
        let edges = vec![
            (0, 1, 1),
            // Negative cycle 2 -> 3 -> 2, but nothing reaches it from 0.
            (2, 3, -4),
            (3, 2, 1),
        ];
        let graph = build_graph(&edges, 4);

        let paths = solve(&graph, 0);

        assert!(!paths.has_negative_cycle);
        assert_eq!(paths.distances[2], None);
        assert_eq!(paths.distances[3], None);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let edges = vec![(0, 1, -1), (1, 2, -2), (0, 2, -4), (2, 3, 7)];
        let graph = build_graph(&edges, 4);

        let first = solve(&graph, 0);
        let second = solve(&graph, 0);

        assert_eq!(first, second);
    }

    // ----------------------------
    // Stress and edge-case tests
    // ----------------------------

    #[test]
    fn large_linear_graph_no_cycle() {
        let n = 1000;
        let edges: Vec<Edge> = (0..n - 1).map(|i| (i, i + 1, 1)).collect();
        let graph = build_graph(&edges, n);

        let paths = solve(&graph, 0);

        assert!(!paths.has_negative_cycle);
        for (i, distance) in paths.distances.iter().enumerate() {
            assert_eq!(*distance, Some(i as i64));
        }
    }

    #[test]
    fn large_circular_graph_negative_cycle() {
        let n = 1000;
        let edges: Vec<Edge> = (0..n).map(|i| (i, (i + 1) % n, -1)).collect();
        let graph = build_graph(&edges, n);

        let paths = solve(&graph, 0);

        assert!(paths.has_negative_cycle);
    }

    #[test]
    fn negative_edges_without_cycle_are_exact() {
        // Longer path 0 -> 1 -> 2 -> 3 beats the direct edge once negative
        // weights are summed.
        let edges = vec![(0, 3, 1), (0, 1, 2), (1, 2, -3), (2, 3, 1)];
        let graph = build_graph(&edges, 4);

        let paths = solve(&graph, 0);

        assert_eq!(paths.distances[3], Some(0));
        assert_eq!(paths.predecessors[3], Some(2));
        assert!(!paths.has_negative_cycle);
    }
}
