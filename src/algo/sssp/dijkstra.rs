/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_source, InvalidSource, ShortestPaths};
use crate::algo::distances::{Distance, DistanceMap};
use crate::traits::RandomAccessGraph;
use dary_heap::QuaternaryHeap;
use dsi_progress_logger::ProgressLog;
use std::cmp::Reverse;
use sux::bits::BitVec;

/// Dijkstra's algorithm with unit weights.
///
/// This implementation does not need a decrease-key operation: when the
/// tentative distance of a node improves, a new entry is pushed on the
/// [queue](QuaternaryHeap), and the entries left behind become stale. A
/// stale entry is recognized when it is popped, because its node has already
/// been finalized, and it is then simply discarded. The number of discarded
/// entries of the last run is available from
/// [`stale_pops`](Dijkstra::stale_pops); with unit weights it is always zero,
/// but the engine does not rely on this.
///
/// Among entries with the same cost, the extraction order is unspecified;
/// this does not affect the result, as all edges have the same weight.
///
/// The structure can be reused for multiple sources.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use dualpath::prelude::*;
///
/// let graph = SymGraph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4)]);
/// let mut dijkstra = Dijkstra::new(&graph);
/// let dist = dijkstra.run(0, no_logging![])?;
///
/// assert_eq!(dist[1], Distance::Finite(1));
/// assert_eq!(dist[2], Distance::Finite(1));
/// assert_eq!(dist[3], Distance::Unreachable);
/// # Ok::<(), InvalidSource>(())
/// ```
pub struct Dijkstra<G: RandomAccessGraph> {
    graph: G,
    /// Nodes whose distance is final.
    finalized: BitVec,
    /// Pairs (tentative distance, node); possibly stale.
    queue: QuaternaryHeap<Reverse<(usize, usize)>>,
    stale_pops: usize,
}

impl<G: RandomAccessGraph> Dijkstra<G> {
    /// Creates a new engine.
    ///
    /// # Arguments
    /// * `graph`: the graph; pass a reference to share it.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            finalized: BitVec::new(num_nodes),
            queue: QuaternaryHeap::new(),
            stale_pops: 0,
        }
    }

    /// Returns the number of stale queue entries discarded by the last run.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
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
        self.reset();

        let mut dist = vec![Distance::Unreachable; num_nodes].into_boxed_slice();
        dist[source] = Distance::Finite(0);
        self.queue.push(Reverse((0, source)));

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Running Dijkstra from node {source}..."));

        while let Some(Reverse((cost, node))) = self.queue.pop() {
            if self.finalized[node] {
                self.stale_pops += 1;
                continue;
            }
            self.finalized.set(node, true);
            pl.light_update();

            let candidate = Distance::Finite(cost + 1);
            for succ in self.graph.successors(node) {
                if !self.finalized[succ] && candidate < dist[succ] {
                    dist[succ] = candidate;
                    self.queue.push(Reverse((cost + 1, succ)));
                }
            }
        }

        pl.done();
        log::debug!("Dijkstra discarded {} stale queue entries", self.stale_pops);

        Ok(DistanceMap::new(source, dist))
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.finalized = BitVec::new(self.graph.num_nodes());
        self.stale_pops = 0;
    }
}

impl<G: RandomAccessGraph> ShortestPaths for Dijkstra<G> {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(
        &mut self,
        source: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<DistanceMap, InvalidSource> {
        self.run(source, pl)
    }
}

/// Computes the distances of all nodes from `source` using [Dijkstra's
/// algorithm](Dijkstra).
pub fn dijkstra(
    graph: impl RandomAccessGraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<DistanceMap, InvalidSource> {
    Dijkstra::new(graph).run(source, pl)
}
