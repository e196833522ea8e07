/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading and writing undirected graphs as text edge lists.
//!
//! An edge list has one edge per line, given by two node identifiers in
//! two columns. By default columns are separated by whitespace, identifiers
//! are non-negative integers used directly as node indices, and lines
//! starting with `#` are comments, which is the format of the SNAP
//! datasets. Alternatively, identifiers can be arbitrary
//! [labels](EdgeListFormat::labels), which are numbered in order of
//! appearance.

use crate::graphs::sym_graph::{EdgeInsertion, SymGraph};
use crate::traits::SequentialGraph;
use anyhow::Context;
use dsi_progress_logger::ProgressLog;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Errors that can happen while reading an edge list.
#[derive(Error, Debug)]
pub enum EdgeListError {
    #[error("Could not read line {line}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: could not parse {value:?} as a node identifier")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: node {value} is out of range (identifiers must be smaller than {bound}); use label mode for sparse identifiers")]
    NodeOutOfRange {
        line: usize,
        value: usize,
        bound: usize,
    },
}

/// Node identifiers must be smaller than this bound unless
/// [`EdgeListFormat::num_nodes`] is given; a larger adjacency-list vector
/// could not be allocated.
pub const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<Vec<usize>>();

/// The layout of an edge-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListFormat {
    /// Lines starting with this symbol (after leading whitespace) are ignored.
    pub line_comment_symbol: char,
    /// How many lines to skip at the start of the file.
    pub lines_to_skip: usize,
    /// How many edges to read at most.
    pub max_edges: Option<usize>,
    /// The column separator; `None` means any run of whitespace.
    pub separator: Option<char>,
    /// The index of the column containing the first endpoint.
    pub source_column: usize,
    /// The index of the column containing the second endpoint.
    pub target_column: usize,
    /// Identifiers are labels rather than node indices.
    pub labels: bool,
    /// The number of nodes; if larger than the number inferred from the
    /// edges, the remaining nodes are isolated. Unless in label mode,
    /// identifiers must be smaller than this number.
    pub num_nodes: Option<usize>,
}

impl Default for EdgeListFormat {
    fn default() -> Self {
        Self {
            line_comment_symbol: '#',
            lines_to_skip: 0,
            max_edges: None,
            separator: None,
            source_column: 0,
            target_column: 1,
            labels: false,
            num_nodes: None,
        }
    }
}

/// What happened while loading an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, including comments and skipped lines.
    pub lines: usize,
    /// Lines ignored because they had too few columns.
    pub malformed: usize,
    /// Edges read from the file.
    pub edges: usize,
    /// How the edges were inserted in the graph.
    pub insertion: EdgeInsertion,
}

/// A graph loaded from an edge list.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: SymGraph,
    /// In [label mode](EdgeListFormat::labels), the label of each node.
    pub labels: Option<Vec<String>>,
    pub stats: LoadStats,
}

impl LoadedGraph {
    /// Returns the node with the given identifier, that is, the node with
    /// the given label in label mode, or the parsed node index otherwise.
    pub fn node(&self, id: &str) -> Option<usize> {
        match &self.labels {
            Some(labels) => labels.iter().position(|label| label == id),
            None => id
                .parse::<usize>()
                .ok()
                .filter(|&node| self.graph.has_node(node)),
        }
    }

    /// Returns the identifier of a node as it appears in the edge list.
    pub fn id(&self, node: usize) -> String {
        match &self.labels {
            Some(labels) => labels[node].clone(),
            None => node.to_string(),
        }
    }
}

#[derive(Default)]
struct LabelMap {
    ids: HashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelMap {
    fn node(&mut self, label: &str) -> usize {
        if let Some(&node) = self.ids.get(label) {
            return node;
        }
        let node = self.labels.len();
        self.ids.insert(label.to_owned(), node);
        self.labels.push(label.to_owned());
        node
    }
}

/// Reads an undirected graph from an edge list.
///
/// Loops and duplicate edges are dropped (and counted in the returned
/// [statistics](LoadStats)); lines with too few columns are logged and
/// ignored.
///
/// # Errors
///
/// Fails on I/O errors and, unless in label mode, on identifiers that are
/// not non-negative integers or that are not smaller than
/// [`num_nodes`](EdgeListFormat::num_nodes) (or [`MAX_NODES`] if it is not
/// given).
pub fn load_edge_list(
    reader: impl BufRead,
    format: &EdgeListFormat,
    pl: &mut impl ProgressLog,
) -> Result<LoadedGraph, EdgeListError> {
    let mut stats = LoadStats::default();
    let mut label_map = format.labels.then(LabelMap::default);
    let mut edges = Vec::new();
    let mut num_nodes = 0;
    let biggest_idx = format.source_column.max(format.target_column);
    let bound = format.num_nodes.unwrap_or(MAX_NODES);

    pl.item_name("line");
    pl.expected_updates(None);
    pl.start("Reading edge list...");

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|source| EdgeListError::Io {
            line: line_num,
            source,
        })?;
        stats.lines += 1;
        pl.light_update();

        if line_num <= format.lines_to_skip {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with(format.line_comment_symbol) {
            continue;
        }
        if format.max_edges.is_some_and(|max| edges.len() >= max) {
            break;
        }

        let vals = match format.separator {
            Some(sep) => line.split(sep).map(str::trim).collect::<Vec<_>>(),
            None => line.split_whitespace().collect::<Vec<_>>(),
        };
        if vals.len() <= biggest_idx {
            log::warn!(
                "Line {}: {:?} does not have enough columns: got {} columns but expected at least {}",
                line_num,
                line,
                vals.len(),
                biggest_idx + 1,
            );
            stats.malformed += 1;
            continue;
        }

        let mut node = |value: &str| -> Result<usize, EdgeListError> {
            match label_map.as_mut() {
                Some(map) => Ok(map.node(value)),
                None => {
                    let node = value.parse::<usize>().map_err(|source| EdgeListError::Parse {
                        line: line_num,
                        value: value.to_owned(),
                        source,
                    })?;
                    if node >= bound {
                        return Err(EdgeListError::NodeOutOfRange {
                            line: line_num,
                            value: node,
                            bound,
                        });
                    }
                    Ok(node)
                }
            }
        };
        let u = node(vals[format.source_column])?;
        let v = node(vals[format.target_column])?;

        // Both endpoints are below the bound, so this cannot overflow
        num_nodes = num_nodes.max(u.max(v) + 1);
        edges.push((u, v));
    }
    pl.done();
    stats.edges = edges.len();

    // Only labels can exceed the requested number of nodes
    if let Some(user_num_nodes) = format.num_nodes {
        if user_num_nodes < num_nodes {
            log::warn!(
                "The number of nodes specified ({}) is smaller than the number of nodes found in the edges ({}); ignoring it",
                user_num_nodes,
                num_nodes
            );
        } else {
            num_nodes = user_num_nodes;
        }
    }

    if edges.is_empty() {
        log::warn!("No edges read; check that the separator and column options are correct");
    }

    let mut graph = SymGraph::empty(num_nodes);
    stats.insertion = graph.add_edges(edges);
    graph.shrink_to_fit();

    log::info!(
        "Edges read: {} Nodes: {} Edges: {} (dropped {} loops and {} duplicates)",
        stats.edges,
        graph.num_nodes(),
        graph.num_edges(),
        stats.insertion.loops,
        stats.insertion.duplicates,
    );

    Ok(LoadedGraph {
        graph,
        labels: label_map.map(|map| map.labels),
        stats,
    })
}

/// Reads an undirected graph from an edge-list file.
pub fn load_edge_list_file(
    path: impl AsRef<Path>,
    format: &EdgeListFormat,
    pl: &mut impl ProgressLog,
) -> anyhow::Result<LoadedGraph> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open edge list {}", path.display()))?;
    load_edge_list(BufReader::new(file), format, pl)
        .with_context(|| format!("Could not load edge list {}", path.display()))
}

/// Writes edges as a tab-separated edge list and returns the number of
/// edges written.
pub fn write_edge_list(
    mut writer: impl Write,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> std::io::Result<usize> {
    let mut count = 0;
    for (u, v) in edges {
        writeln!(writer, "{}\t{}", u, v)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
