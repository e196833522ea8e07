/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{progress_logger, store_json, EdgeListArgs, GlobalArgs};
use crate::prelude::*;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Computes the distances of all nodes from a source using both Dijkstra's and the Bellman-Ford algorithm, and checks that the results agree.",
    long_about = None
)]
pub struct CliArgs {
    /// The edge-list file.
    pub edges: PathBuf,

    #[clap(flatten)]
    pub edge_list_args: EdgeListArgs,

    #[arg(short, long)]
    /// The source node (a label if --labels is given); the default is node 0,
    /// that is, the first node.
    pub source: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Let Bellman-Ford perform all passes, even after convergence.
    pub no_early_exit: bool,

    #[arg(long, default_value_t = false)]
    /// Run the two algorithms in parallel.
    pub parallel: bool,

    #[arg(long)]
    /// Store a JSON report with timings and the path-length distribution.
    pub json: Option<PathBuf>,

    #[arg(long, default_value_t = 20)]
    /// How many rows of the path-length distribution to log.
    pub top: usize,
}

/// The JSON report of a cross-check.
#[derive(Serialize, Debug)]
pub struct Report {
    pub num_nodes: usize,
    pub num_edges: u64,
    pub source: String,
    pub dijkstra_secs: f64,
    pub bellman_ford_secs: f64,
    pub bellman_ford_passes: usize,
    pub consistent: bool,
    pub mismatch: Option<String>,
    pub reachable: usize,
    pub eccentricity: usize,
    pub path_lengths: PathLengthHistogram,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let mut pl = progress_logger(&global_args);
    let loaded = load_edge_list_file(&args.edges, &(&args.edge_list_args).into(), &mut pl)?;
    let graph = &loaded.graph;

    let source = match &args.source {
        None => 0,
        Some(id) if args.edge_list_args.labels => loaded
            .node(id)
            .with_context(|| format!("Unknown source label {:?}", id))?,
        Some(id) => id
            .parse::<usize>()
            .with_context(|| format!("Could not parse source node {:?}", id))?,
    };
    log::info!(
        "Source node: {}",
        if graph.has_node(source) {
            loaded.id(source)
        } else {
            source.to_string()
        }
    );

    let execution = if args.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let mut dijkstra = Dijkstra::new(graph);
    let mut bellman_ford = BellmanFord::new(graph).early_exit(!args.no_early_exit);
    let mut pl_bellman_ford = progress_logger(&global_args);
    let check = cross_check(
        &mut dijkstra,
        &mut bellman_ford,
        source,
        execution,
        &mut pl,
        &mut pl_bellman_ford,
    )?;

    let (dijkstra_time, bellman_ford_time) = check.timings();
    let passes = check.right.rounds.unwrap_or_default();
    log::info!(
        "Dijkstra completed in {:.3} seconds",
        dijkstra_time.as_secs_f64()
    );
    log::info!(
        "Bellman-Ford completed in {:.3} seconds ({} passes)",
        bellman_ford_time.as_secs_f64(),
        passes
    );
    log::info!(
        "Dijkstra and Bellman-Ford produce the same results: {}",
        check.is_consistent()
    );

    let distances = &check.left.distances.value;
    let histogram = distances.histogram();
    log::info!(
        "Reachable nodes: {} Eccentricity of the source: {} Unreachable nodes: {}",
        distances.num_reachable(),
        distances.eccentricity(),
        histogram.unreachable
    );
    for (d, count) in histogram.counts.iter().enumerate().take(args.top) {
        log::info!("Nodes at distance {}: {}", d, count);
    }

    if let Some(path) = &args.json {
        let report = Report {
            num_nodes: graph.num_nodes(),
            num_edges: graph.num_edges(),
            source: loaded.id(source),
            dijkstra_secs: dijkstra_time.as_secs_f64(),
            bellman_ford_secs: bellman_ford_time.as_secs_f64(),
            bellman_ford_passes: passes,
            consistent: check.is_consistent(),
            mismatch: check.mismatch.as_ref().map(ToString::to_string),
            reachable: distances.num_reachable(),
            eccentricity: distances.eccentricity(),
            path_lengths: histogram,
        };
        store_json(path, &report)?;
    }

    if let Some(mismatch) = check.mismatch {
        log::error!("Dijkstra and Bellman-Ford disagree: {}", mismatch);
        return Err(mismatch.into());
    }

    Ok(())
}
