/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_source, InvalidSource, ShortestPaths};
use crate::algo::distances::{Distance, DistanceMap};
use crate::traits::SequentialGraph;
use dsi_progress_logger::ProgressLog;

/// The Bellman-Ford algorithm with unit weights.
///
/// The algorithm performs at most `n − 1` passes, where `n` is the number of
/// nodes; each pass enumerates every edge once and relaxes it in both
/// directions. Relaxing in both directions is what makes the algorithm work
/// on undirected graphs: a directed variant would relax each arc once.
///
/// By default, the algorithm stops after the first pass that does not
/// change any distance, which happens after at most eccentricity + 1 passes.
/// The early exit can be disabled with
/// [`early_exit`](BellmanFord::early_exit), in which case all `n − 1` passes
/// are performed; the result is the same.
///
/// No negative-cycle detection is performed, as all weights are one.
///
/// Only [sequential access](SequentialGraph) to the graph is needed.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use dualpath::prelude::*;
///
/// let graph = SymGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let mut bf = BellmanFord::new(&graph);
/// let dist = bf.run(0, no_logging![])?;
///
/// assert_eq!(dist[4], Distance::Finite(4));
/// assert!(bf.passes() <= 4);
/// # Ok::<(), InvalidSource>(())
/// ```
pub struct BellmanFord<G: SequentialGraph> {
    graph: G,
    early_exit: bool,
    passes: usize,
}

impl<G: SequentialGraph> BellmanFord<G> {
    /// Creates a new engine with early exit enabled.
    ///
    /// # Arguments
    /// * `graph`: the graph; pass a reference to share it.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            early_exit: true,
            passes: 0,
        }
    }

    /// Sets whether to stop after the first pass that changes nothing.
    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Returns the number of passes performed by the last run.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Computes the distances of all nodes from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSource`] if `source` is not a node of the graph; in
    /// this case nothing is computed.
    pub fn run(
        &mut self,
        source: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<DistanceMap, InvalidSource> {
        let num_nodes = self.graph.num_nodes();
        check_source(source, num_nodes)?;
        self.passes = 0;

        let mut dist = vec![Distance::Unreachable; num_nodes].into_boxed_slice();
        dist[source] = Distance::Finite(0);

        let max_passes = num_nodes - 1;
        pl.item_name("pass");
        pl.expected_updates(Some(max_passes));
        pl.start(format!("Running Bellman-Ford from node {source}..."));

        for _ in 0..max_passes {
            self.passes += 1;
            let mut updated = false;

            for (u, v) in self.graph.edges() {
                let (du, dv) = (dist[u], dist[v]);
                if du.plus_one() < dv {
                    dist[v] = du.plus_one();
                    updated = true;
                } else if dv.plus_one() < du {
                    dist[u] = dv.plus_one();
                    updated = true;
                }
            }

            pl.update();
            if !updated && self.early_exit {
                break;
            }
        }

        pl.done();
        log::debug!("Bellman-Ford performed {} passes", self.passes);

        Ok(DistanceMap::new(source, dist))
    }
}

impl<G: SequentialGraph> ShortestPaths for BellmanFord<G> {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn rounds(&self) -> Option<usize> {
        Some(self.passes)
    }

    fn shortest_paths(
        &mut self,
        source: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<DistanceMap, InvalidSource> {
        self.run(source, pl)
    }
}

/// Computes the distances of all nodes from `source` using the
/// [Bellman-Ford algorithm](BellmanFord) with early exit.
pub fn bellman_ford(
    graph: impl SequentialGraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<DistanceMap, InvalidSource> {
    BellmanFord::new(graph).run(source, pl)
}
