/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::graphs::sym_graph::SymGraph;

/// Provides a sequential implementation of undirected Erdös-Rényi random
/// graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an edge between any two distinct nodes. In this implementation,
/// loops are never included.
///
/// Note that the time required to enumerate the edges is quadratic in `n`, so
/// if you plan to reuse the graph you should store the result in a
/// [`SymGraph`] using [`to_graph`](ErdosRenyi::to_graph).
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns an iterator over the edges `(u, v)`, `u < v`, in
    /// lexicographical order.
    ///
    /// The same seed always yields the same edges.
    pub fn edges(&self) -> Iter {
        Iter {
            n: self.n,
            p: self.p,
            u: 0,
            v: 1,
            rng: SmallRng::seed_from_u64(self.seed),
        }
    }

    /// Materializes the random graph, including isolated nodes.
    pub fn to_graph(&self) -> SymGraph {
        let mut g = SymGraph::empty(self.n);
        g.add_edges(self.edges());
        g
    }
}

/// Iterator over the edges of an [`ErdosRenyi`] graph, returned by
/// [`ErdosRenyi::edges`].
#[derive(Debug, Clone)]
pub struct Iter {
    n: usize,
    p: f64,
    u: usize,
    v: usize,
    rng: SmallRng,
}

impl Iterator for Iter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.u < self.n {
            while self.v < self.n {
                let v = self.v;
                self.v += 1;
                if self.rng.random_bool(self.p) {
                    return Some((self.u, v));
                }
            }
            self.u += 1;
            self.v = self.u + 1;
        }
        None
    }
}
