/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use dualpath::prelude::*;
use std::collections::VecDeque;
use Distance::*;

/// Textbook breadth-first distances, used as ground truth.
fn correct_distances<G: RandomAccessGraph>(graph: &G, source: usize) -> Vec<Distance> {
    let mut dist = vec![Unreachable; graph.num_nodes()];
    let mut queue = VecDeque::new();
    dist[source] = Finite(0);
    queue.push_back((source, 0));
    while let Some((node, d)) = queue.pop_front() {
        for succ in graph.successors(node) {
            if dist[succ] == Unreachable {
                dist[succ] = Finite(d + 1);
                queue.push_back((succ, d + 1));
            }
        }
    }
    dist
}

macro_rules! test_sssp_engine {
    ($engine:expr, $name:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn test_triangle() -> Result<()> {
                let graph = SymGraph::from_edges([(0, 1), (1, 2), (0, 2)]);
                let dist = $engine(&graph).shortest_paths(0, no_logging![])?;
                assert_eq!(dist.source(), 0);
                assert_eq!(dist.as_slice(), &[Finite(0), Finite(1), Finite(1)]);
                Ok(())
            }

            #[test]
            fn test_path() -> Result<()> {
                let graph = SymGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
                let dist = $engine(&graph).shortest_paths(0, no_logging![])?;
                assert_eq!(
                    dist.as_slice(),
                    &[Finite(0), Finite(1), Finite(2), Finite(3)]
                );
                Ok(())
            }

            #[test]
            fn test_disconnected() -> Result<()> {
                let graph = SymGraph::from_edges([(0, 1), (2, 3)]);
                let dist = $engine(&graph).shortest_paths(0, no_logging![])?;
                assert_eq!(
                    dist.as_slice(),
                    &[Finite(0), Finite(1), Unreachable, Unreachable]
                );
                assert_eq!(dist.num_reachable(), 2);
                Ok(())
            }

            #[test]
            fn test_isolated_node() -> Result<()> {
                let graph = SymGraph::empty(1);
                let dist = $engine(&graph).shortest_paths(0, no_logging![])?;
                assert_eq!(dist.as_slice(), &[Finite(0)]);
                Ok(())
            }

            #[test]
            fn test_isolated_source() -> Result<()> {
                let mut graph = SymGraph::from_edges([(0, 1), (1, 2)]);
                graph.add_node(3);
                let dist = $engine(&graph).shortest_paths(3, no_logging![])?;
                assert_eq!(
                    dist.as_slice(),
                    &[Unreachable, Unreachable, Unreachable, Finite(0)]
                );
                Ok(())
            }

            #[test]
            fn test_invalid_source() {
                let graph = SymGraph::from_edges([(0, 1), (1, 2)]);
                let result = $engine(&graph).shortest_paths(3, no_logging![]);
                assert_eq!(
                    result,
                    Err(InvalidSource {
                        source_node: 3,
                        num_nodes: 3
                    })
                );
                let empty = SymGraph::new();
                assert!($engine(&empty).shortest_paths(0, no_logging![]).is_err());
            }

            #[test]
            fn test_idempotent() -> Result<()> {
                let graph = ErdosRenyi::new(50, 0.05, 1).to_graph();
                let mut engine = $engine(&graph);
                let first = engine.shortest_paths(7, no_logging![])?;
                let second = engine.shortest_paths(7, no_logging![])?;
                assert_eq!(first, second);
                assert_eq!(first, $engine(&graph).shortest_paths(7, no_logging![])?);
                Ok(())
            }

            #[test]
            fn test_random_graphs() -> Result<()> {
                for (n, p, seed) in [(100, 0.02, 0), (100, 0.05, 1), (200, 0.01, 2), (30, 0.5, 3)] {
                    let graph = ErdosRenyi::new(n, p, seed).to_graph();
                    for source in [0, n / 2, n - 1] {
                        let dist = $engine(&graph).shortest_paths(source, no_logging![])?;
                        assert_eq!(dist[source], Finite(0));
                        assert_eq!(dist.as_slice(), correct_distances(&graph, source).as_slice());

                        // Endpoints of an edge are at most one step apart,
                        // and are both reachable or both unreachable
                        for (u, v) in graph.edges() {
                            match (dist[u], dist[v]) {
                                (Finite(du), Finite(dv)) => assert!(du.abs_diff(dv) <= 1),
                                (Unreachable, Unreachable) => {}
                                (du, dv) => panic!("edge ({u}, {v}) has distances {du} and {dv}"),
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    };
}

test_sssp_engine!(Dijkstra::new, dijkstra);
test_sssp_engine!(BellmanFord::new, bellman_ford_early_exit);
test_sssp_engine!(
    |graph| BellmanFord::new(graph).early_exit(false),
    bellman_ford_all_passes
);

#[test]
fn test_early_exit_only_changes_passes() -> Result<()> {
    let graph = ErdosRenyi::new(60, 0.04, 42).to_graph();
    let mut early = BellmanFord::new(&graph);
    let mut full = BellmanFord::new(&graph).early_exit(false);
    for source in 0..graph.num_nodes() {
        assert_eq!(early.run(source, no_logging![])?, full.run(source, no_logging![])?);
        assert_eq!(full.passes(), graph.num_nodes() - 1);
        assert!(early.passes() <= full.passes());
    }
    Ok(())
}

#[test]
fn test_early_exit_bound() -> Result<()> {
    // Convergence is detected at most one pass after the distances have
    // stabilized, and distances stabilize within eccentricity passes
    let graph = ErdosRenyi::new(200, 0.02, 7).to_graph();
    let mut engine = BellmanFord::new(&graph);
    let dist = engine.run(0, no_logging![])?;
    assert!(engine.passes() <= dist.eccentricity() + 1);
    Ok(())
}

#[test]
fn test_engines_agree_on_all_sources() -> Result<()> {
    let graph = ErdosRenyi::new(40, 0.06, 5).to_graph();
    for source in 0..graph.num_nodes() {
        let d = dijkstra(&graph, source, no_logging![])?;
        let b = bellman_ford(&graph, source, no_logging![])?;
        assert!(compare(&d, &b), "source {source}: {:?}", first_mismatch(&d, &b));
    }
    Ok(())
}
