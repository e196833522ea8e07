/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::{no_logging, ProgressLog};
use dualpath::prelude::*;
use Distance::*;

/// An engine that declares every node other than the source unreachable.
struct SourceOnly(usize);

impl ShortestPaths for SourceOnly {
    fn name(&self) -> &'static str {
        "source-only"
    }

    fn shortest_paths(
        &mut self,
        source: usize,
        _pl: &mut impl ProgressLog,
    ) -> Result<DistanceMap, InvalidSource> {
        if source >= self.0 {
            return Err(InvalidSource {
                source_node: source,
                num_nodes: self.0,
            });
        }
        bellman_ford(SymGraph::empty(self.0), source, no_logging![])
    }
}

#[test]
fn test_consistent() -> Result<()> {
    for execution in [Execution::Sequential, Execution::Parallel] {
        let graph = ErdosRenyi::new(300, 0.01, 11).to_graph();
        let check = cross_check(
            &mut Dijkstra::new(&graph),
            &mut BellmanFord::new(&graph),
            17,
            execution,
            no_logging![],
            no_logging![],
        )?;
        assert!(check.is_consistent());
        assert_eq!(check.left.engine, "Dijkstra");
        assert_eq!(check.right.engine, "Bellman-Ford");
        assert_eq!(check.left.distances.value, check.right.distances.value);
        let (left, right) = check.timings();
        assert_eq!(left, check.left.distances.elapsed);
        assert_eq!(right, check.right.distances.elapsed);
        let dist = check.into_result()?;
        assert_eq!(dist[17], Finite(0));
    }
    Ok(())
}

#[test]
fn test_parallel_matches_sequential() -> Result<()> {
    let graph = ErdosRenyi::new(200, 0.015, 3).to_graph();
    let mut results = vec![];
    for execution in [Execution::Sequential, Execution::Parallel] {
        let check = cross_check(
            &mut Dijkstra::new(&graph),
            &mut BellmanFord::new(&graph).early_exit(false),
            0,
            execution,
            no_logging![],
            no_logging![],
        )?;
        results.push(check.into_result()?);
    }
    assert_eq!(results[0], results[1]);
    Ok(())
}

#[test]
fn test_mismatch() -> Result<()> {
    let graph = SymGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
    let check = cross_check(
        &mut Dijkstra::new(&graph),
        &mut SourceOnly(graph.num_nodes()),
        0,
        Execution::default(),
        no_logging![],
        no_logging![],
    )?;
    assert!(!check.is_consistent());
    assert_eq!(
        check.mismatch,
        Some(Mismatch::Distance {
            node: 1,
            left: Finite(1),
            right: Unreachable
        })
    );
    let err = check.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Node 1 has distance 1 in the first map and inf in the second one"
    );
    Ok(())
}

#[test]
fn test_size_mismatch() -> Result<()> {
    let small = SymGraph::from_edges([(0, 1)]);
    let large = SymGraph::from_edges([(0, 1), (1, 2)]);
    let check = cross_check(
        &mut Dijkstra::new(&small),
        &mut Dijkstra::new(&large),
        0,
        Execution::Parallel,
        no_logging![],
        no_logging![],
    )?;
    assert_eq!(
        check.mismatch,
        Some(Mismatch::NumNodes { left: 2, right: 3 })
    );
    Ok(())
}

#[test]
fn test_invalid_source() {
    let graph = SymGraph::from_edges([(0, 1), (1, 2)]);
    for execution in [Execution::Sequential, Execution::Parallel] {
        let result = cross_check(
            &mut Dijkstra::new(&graph),
            &mut BellmanFord::new(&graph),
            5,
            execution,
            no_logging![],
            no_logging![],
        );
        assert_eq!(
            result.unwrap_err(),
            InvalidSource {
                source_node: 5,
                num_nodes: 3
            }
        );
    }
}

#[cfg_attr(feature = "slow_tests", test)]
#[cfg_attr(not(feature = "slow_tests"), allow(dead_code))]
fn test_large_random_graph() -> Result<()> {
    // Around the percolation threshold, so that the graph has a giant
    // component and many small ones
    let graph = ErdosRenyi::new(20_000, 1.5 / 20_000.0, 0).to_graph();
    for source in [0, 1, 10_000, 19_999] {
        cross_check(
            &mut Dijkstra::new(&graph),
            &mut BellmanFord::new(&graph),
            source,
            Execution::Parallel,
            no_logging![],
            no_logging![],
        )?
        .into_result()?;
    }
    Ok(())
}
