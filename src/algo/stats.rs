/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structural statistics of undirected graphs: degree distribution and
//! connected components.

use crate::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Returns the degree distribution of a graph: the element of index `d` is
/// the number of nodes of degree `d`.
///
/// The result is empty only if the graph has no nodes.
pub fn degree_histogram(graph: impl RandomAccessGraph) -> Vec<usize> {
    let mut histogram = Vec::new();
    for node in 0..graph.num_nodes() {
        let d = graph.outdegree(node);
        if d >= histogram.len() {
            histogram.resize(d + 1, 0);
        }
        histogram[d] += 1;
    }
    histogram
}

/// Connected components of an undirected graph.
///
/// Components are numbered by decreasing size; components of the same size
/// are numbered by their smallest node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// For each node, its component.
    components: Box<[usize]>,
    /// For each component, its number of nodes; nonincreasing.
    sizes: Box<[usize]>,
}

impl Components {
    /// Returns the number of connected components.
    pub fn num_components(&self) -> usize {
        self.sizes.len()
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of the components, in decreasing order.
    #[inline(always)]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the size of the largest component, or zero for the empty graph.
    pub fn largest(&self) -> usize {
        self.sizes.first().copied().unwrap_or(0)
    }
}

/// Computes the connected components of an undirected graph by
/// breadth-first visits.
pub fn connected_components(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Components {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components...");

    let mut component = vec![usize::MAX; num_nodes].into_boxed_slice();
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for root in 0..num_nodes {
        if component[root] != usize::MAX {
            continue;
        }
        let current = sizes.len();
        let mut size = 0;
        component[root] = current;
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            pl.light_update();
            size += 1;
            for succ in graph.successors(node) {
                if component[succ] == usize::MAX {
                    component[succ] = current;
                    queue.push_back(succ);
                }
            }
        }
        sizes.push(size);
    }

    pl.done();

    // Renumber by decreasing size; the sort is stable, so ties keep the
    // discovery order
    let mut by_size = Vec::from_iter(0..sizes.len());
    by_size.sort_by_key(|&c| Reverse(sizes[c]));
    let mut rank = vec![0; sizes.len()];
    for (r, &c) in by_size.iter().enumerate() {
        rank[c] = r;
    }
    for c in component.iter_mut() {
        *c = rank[*c];
    }

    log::debug!("Found {} connected components", sizes.len());

    Components {
        components: component,
        sizes: by_size.iter().map(|&c| sizes[c]).collect(),
    }
}
