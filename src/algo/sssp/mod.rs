/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source shortest paths on unweighted undirected graphs.
//!
//! There are two independent engines: [Dijkstra's algorithm](Dijkstra), which
//! uses a priority queue with lazy deletion of stale entries, and the
//! [Bellman-Ford algorithm](BellmanFord), which relaxes every edge in both
//! directions at each pass and stops as soon as a pass changes nothing.
//! Every edge has implicit weight one.
//!
//! Both engines implement [`ShortestPaths`], and both return a
//! [`DistanceMap`] or fail with [`InvalidSource`] before doing any work.
//! The results of the two engines can be cross-validated with
//! [`cross_check`](crate::algo::compare::cross_check).
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use dualpath::prelude::*;
//!
//! let graph = SymGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
//!
//! let d = dijkstra(&graph, 0, no_logging![])?;
//! let b = bellman_ford(&graph, 0, no_logging![])?;
//!
//! assert_eq!(d[3], Distance::Finite(3));
//! assert!(compare(&d, &b));
//! # Ok::<(), InvalidSource>(())
//! ```

mod dijkstra;
pub use dijkstra::*;

mod bellman_ford;
pub use bellman_ford::*;

use crate::algo::distances::DistanceMap;
use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// The source node passed to an engine is not a node of the graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Source node {source_node} is not a node of the graph ({num_nodes} nodes)")]
pub struct InvalidSource {
    /// The offending source node.
    pub source_node: usize,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
}

/// A single-source shortest-path engine.
///
/// Engines do not modify the graph, and running an engine twice on the same
/// graph and source yields identical maps.
pub trait ShortestPaths {
    /// A human-readable name for the engine, used in logs and reports.
    fn name(&self) -> &'static str;

    /// The number of rounds over the whole graph performed by the last run,
    /// for engines that proceed by rounds.
    fn rounds(&self) -> Option<usize> {
        None
    }

    /// Computes the distances of all nodes from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSource`] if `source` is not a node of the graph.
    fn shortest_paths(
        &mut self,
        source: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<DistanceMap, InvalidSource>;
}

/// Checks that `source` is a node of a graph with `num_nodes` nodes.
#[inline(always)]
pub(crate) fn check_source(source: usize, num_nodes: usize) -> Result<(), InvalidSource> {
    if source < num_nodes {
        Ok(())
    } else {
        Err(InvalidSource {
            source_node: source,
            num_nodes,
        })
    }
}
