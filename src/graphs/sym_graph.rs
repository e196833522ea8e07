/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{RandomAccessGraph, SequentialGraph};
use itertools::Itertools;

/// Counts of what happened to a batch of edges passed to
/// [`SymGraph::add_edges`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeInsertion {
    /// Edges actually added to the graph.
    pub added: u64,
    /// Loops, that is, pairs `(u, u)`, which are never added.
    pub loops: u64,
    /// Edges that were already present (in either direction).
    pub duplicates: u64,
}

/// A mutable undirected [`RandomAccessGraph`] implementation based on a
/// vector of vectors.
///
/// Every edge {u, v} is stored twice, once in the adjacency list of `u` and
/// once in that of `v`, so adjacency is symmetric by construction. Loops and
/// duplicate edges are silently discarded, and adjacency lists are kept
/// sorted.
///
/// Mutation requires a mutable reference, so a graph cannot change while an
/// engine is borrowing it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymGraph {
    /// The number of (undirected) edges in the graph.
    num_edges: u64,
    /// For each node, its sorted list of neighbors.
    succ: Vec<Vec<usize>>,
}

impl SymGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_edges: 0,
            succ: vec![],
        }
    }

    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_edges: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    ///
    /// Since nodes are numbered consecutively, all nodes smaller than `node`
    /// that do not exist yet are added, too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds the edge {u, v} to the graph, adding its endpoints if necessary,
    /// and returns true if the edge was added.
    ///
    /// Loops and edges already present are not added.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            self.add_node(u);
            return false;
        }
        self.add_node(u.max(v));
        match self.succ[u].binary_search(&v) {
            Ok(_) => false,
            Err(pos_v) => {
                self.succ[u].insert(pos_v, v);
                let pos_u = self.succ[v].binary_search(&u).unwrap_err();
                self.succ[v].insert(pos_u, u);
                self.num_edges += 1;
                true
            }
        }
    }

    /// Adds edges from an [`IntoIterator`], adding new nodes as needed.
    ///
    /// Pairs `(u, v)` and `(v, u)` denote the same edge.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> EdgeInsertion {
        let mut stats = EdgeInsertion::default();
        let mut pairs = Vec::new();
        for (u, v) in edges {
            if u == v {
                self.add_node(u);
                stats.loops += 1;
            } else {
                pairs.push((u.min(v), u.max(v)));
            }
        }
        pairs.sort_unstable();

        // On a graph without edges, sorted pairs can be appended directly:
        // all smaller neighbors of a node arrive before all larger ones
        let bulk = self.num_edges == 0;
        for ((u, v), count) in pairs.into_iter().dedup_with_count().map(|(c, p)| (p, c)) {
            stats.duplicates += count as u64 - 1;
            if bulk {
                self.add_node(v);
                self.succ[u].push(v);
                self.succ[v].push(u);
                self.num_edges += 1;
                stats.added += 1;
            } else if self.add_edge(u, v) {
                stats.added += 1;
            } else {
                stats.duplicates += 1;
            }
        }
        stats
    }

    /// Creates a new graph from an [`IntoIterator`] of edges.
    ///
    /// The number of nodes is one plus the largest endpoint.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Returns true if the graph contains the edge {u, v}.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        match (self.succ.get(u), self.succ.get(v)) {
            (Some(su), Some(sv)) => {
                // Search the shorter list
                if su.len() <= sv.len() {
                    su.binary_search(&v).is_ok()
                } else {
                    sv.binary_search(&u).is_ok()
                }
            }
            _ => false,
        }
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.succ.shrink_to_fit();
        for s in self.succ.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

/// Iterator over the edges of a [`SymGraph`], returning each edge once.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    succ: &'a [Vec<usize>],
    node: usize,
    pos: usize,
}

impl Iterator for Edges<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.node < self.succ.len() {
            let list = &self.succ[self.node];
            // Only neighbors larger than the current node, so the smaller
            // endpoint owns the edge
            if self.pos == 0 {
                self.pos = list.partition_point(|&v| v < self.node);
            }
            if let Some(&v) = list.get(self.pos) {
                self.pos += 1;
                return Some((self.node, v));
            }
            self.node += 1;
            self.pos = 0;
        }
        None
    }
}

impl SequentialGraph for SymGraph {
    type Edges<'a> = Edges<'a>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_edges(&self) -> u64 {
        self.num_edges
    }

    fn edges(&self) -> Self::Edges<'_> {
        Edges {
            succ: &self.succ,
            node: 0,
            pos: 0,
        }
    }
}

impl RandomAccessGraph for SymGraph {
    type Successors<'a> = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let g = SymGraph::from_edges([(0, 1), (2, 1), (3, 0)]);
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(g.successors(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.successors(3).collect::<Vec<_>>(), vec![0]);
        for (u, v) in g.edges() {
            assert!(u < v);
            assert!(g.has_edge(u, v));
            assert!(g.has_edge(v, u));
        }
    }

    #[test]
    fn test_loops_and_duplicates() {
        let mut g = SymGraph::new();
        let stats = g.add_edges([(0, 1), (1, 0), (2, 2), (0, 1), (1, 2)]);
        assert_eq!(
            stats,
            EdgeInsertion {
                added: 2,
                loops: 1,
                duplicates: 2
            }
        );
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 2);

        // Second batch goes through the incremental path
        let stats = g.add_edges([(2, 1), (3, 0)]);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!g.add_edge(4, 4));
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.outdegree(4), 0);
    }

    #[test]
    fn test_edges_once() {
        let g = SymGraph::from_edges([(3, 1), (0, 1), (1, 2), (0, 3), (2, 0)]);
        let edges = g.edges().collect::<Vec<_>>();
        assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]);
        assert_eq!(edges.len() as u64, g.num_edges());
    }

    #[test]
    fn test_bulk_equals_incremental() {
        let edges = [(5, 1), (0, 4), (4, 1), (2, 3), (3, 5), (0, 5)];
        let bulk = SymGraph::from_edges(edges);
        let mut incr = SymGraph::new();
        for (u, v) in edges {
            incr.add_edge(u, v);
        }
        assert_eq!(bulk, incr);
        assert!(crate::traits::eq(&bulk, &incr));
    }

    #[test]
    fn test_empty() {
        let g = SymGraph::empty(3);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.edges().next(), None);
        assert!(g.has_node(2));
        assert!(!g.has_node(3));
    }
}
