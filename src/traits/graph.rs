/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic traits to access undirected graphs, both sequentially and randomly.

Nodes are identified by the integers `0..num_nodes()`. Edges are undirected,
unweighted, and never loops: an edge {u, v} appears in the successors of
both `u` and `v`, and it is returned exactly once by
[`edges`](SequentialGraph::edges), as the pair `(min(u, v), max(u, v))`.

Both shortest-path engines take graphs implementing these traits by value;
since there are blanket implementations for references, passing `&graph`
makes it possible to share the same graph among several engines.

*/

/// An undirected graph whose edges can be enumerated sequentially.
pub trait SequentialGraph {
    /// The iterator over the edges of the graph.
    type Edges<'a>: Iterator<Item = (usize, usize)>
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of (undirected) edges in the graph.
    fn num_edges(&self) -> u64;

    /// Returns an iterator over all edges of the graph.
    ///
    /// Each edge {u, v} is returned exactly once as `(u, v)` with `u < v`.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns true if `node` is a node of the graph.
    #[inline(always)]
    fn has_node(&self, node: usize) -> bool {
        node < self.num_nodes()
    }
}

/// An undirected graph providing, additionally, random access to the
/// adjacency list of each node.
pub trait RandomAccessGraph: SequentialGraph {
    /// The iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the neighbors of a node.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not a node of the graph.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of neighbors of a node.
    fn outdegree(&self, node: usize) -> usize;
}

impl<G: SequentialGraph + ?Sized> SequentialGraph for &G {
    type Edges<'a>
        = G::Edges<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_edges(&self) -> u64 {
        (**self).num_edges()
    }

    #[inline(always)]
    fn edges(&self) -> Self::Edges<'_> {
        (**self).edges()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'a>
        = G::Successors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}

/// Returns true if the two provided graphs have the same number of nodes and
/// the same set of edges.
///
/// Edges are compared after sorting, so the order in which graphs enumerate
/// them is irrelevant.
pub fn eq<G0: SequentialGraph, G1: SequentialGraph>(g0: &G0, g1: &G1) -> bool {
    if g0.num_nodes() != g1.num_nodes() || g0.num_edges() != g1.num_edges() {
        return false;
    }
    let mut e0 = g0.edges().collect::<Vec<_>>();
    let mut e1 = g1.edges().collect::<Vec<_>>();
    e0.sort_unstable();
    e1.sort_unstable();
    e0 == e1
}
