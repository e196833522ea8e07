/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{create_parent_dir, GlobalArgs};
use crate::prelude::*;
use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use std::io::BufWriter;
use std::path::PathBuf;

/// Generates random graphs as edge lists.
#[derive(Subcommand, Debug)]
#[command(name = "gen")]
pub enum SubCommands {
    Er(ErArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Writes an undirected Erdös-Rényi random graph as an edge list.", long_about = None)]
pub struct ErArgs {
    #[arg(short, long)]
    /// The number of nodes.
    pub nodes: usize,

    #[arg(short, long)]
    /// The probability of an edge between any two nodes.
    pub probability: f64,

    #[arg(long, default_value_t = 0)]
    /// The seed of the pseudorandom number generator.
    pub seed: u64,

    #[arg(short, long)]
    /// The output file (default: standard output).
    pub output: Option<PathBuf>,
}

pub fn main(global_args: GlobalArgs, subcommand: SubCommands) -> Result<()> {
    match subcommand {
        SubCommands::Er(args) => er(global_args, args),
    }
}

fn er(_global_args: GlobalArgs, args: ErArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.probability),
        "The probability must be in [0..1], got {}",
        args.probability
    );
    let graph = ErdosRenyi::new(args.nodes, args.probability, args.seed);
    let written = match &args.output {
        Some(path) => {
            create_parent_dir(path)?;
            let file = std::fs::File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            write_edge_list(BufWriter::new(file), graph.edges())?
        }
        None => write_edge_list(std::io::stdout().lock(), graph.edges())?,
    };
    log::info!("Wrote {} edges on {} nodes", written, args.nodes);
    Ok(())
}
