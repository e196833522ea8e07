/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{progress_logger, store_json, EdgeListArgs, GlobalArgs};
use crate::prelude::*;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Computes the degree distribution and the connected components of an undirected graph.",
    long_about = None
)]
pub struct CliArgs {
    /// The edge-list file.
    pub edges: PathBuf,

    #[clap(flatten)]
    pub edge_list_args: EdgeListArgs,

    #[arg(long)]
    /// Store a JSON report with the degree distribution and the component sizes.
    pub json: Option<PathBuf>,
}

/// The JSON report of graph statistics.
#[derive(Serialize, Debug)]
pub struct Report {
    pub num_nodes: usize,
    pub num_edges: u64,
    pub max_degree: usize,
    /// `degrees[d]` is the number of nodes of degree `d`.
    pub degrees: Vec<usize>,
    pub num_components: usize,
    /// Component sizes, in decreasing order.
    pub component_sizes: Vec<usize>,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let mut pl = progress_logger(&global_args);
    let loaded = load_edge_list_file(&args.edges, &(&args.edge_list_args).into(), &mut pl)?;
    let graph = &loaded.graph;

    let degrees = degree_histogram(graph);
    let max_degree = degrees.len().saturating_sub(1);
    log::info!(
        "Nodes: {} Edges: {} Maximum degree: {}",
        graph.num_nodes(),
        graph.num_edges(),
        max_degree
    );

    let components = connected_components(graph, &mut pl);
    log::info!(
        "Connected components: {} Largest: {}",
        components.num_components(),
        components.largest()
    );

    if let Some(path) = &args.json {
        let report = Report {
            num_nodes: graph.num_nodes(),
            num_edges: graph.num_edges(),
            max_degree,
            degrees,
            num_components: components.num_components(),
            component_sizes: components.sizes().to_vec(),
        };
        store_json(path, &report)?;
    }

    Ok(())
}
