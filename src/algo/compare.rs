/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Cross-validation of shortest-path engines.
//!
//! [`compare`] and [`first_mismatch`] check two [distance
//! maps](DistanceMap) for structural equality; [`cross_check`] runs two
//! [engines](ShortestPaths) from the same source, timing each run with
//! [`Timed`], and reports both results together with the first
//! [`Mismatch`], if any.
//!
//! A mismatch means that one of the engines is wrong, or that the graph
//! changed between the runs. It is reported, never reconciled: the caller
//! decides how loudly to fail.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use dualpath::prelude::*;
//!
//! let graph = SymGraph::from_edges([(0, 1), (1, 2), (0, 2)]);
//! let check = cross_check(
//!     &mut Dijkstra::new(&graph),
//!     &mut BellmanFord::new(&graph),
//!     0,
//!     Execution::Sequential,
//!     no_logging![],
//!     no_logging![],
//! )?;
//!
//! assert!(check.is_consistent());
//! assert_eq!(check.left.distances.value[2], Distance::Finite(1));
//! # Ok::<(), InvalidSource>(())
//! ```

use crate::algo::distances::{Distance, DistanceMap};
use crate::algo::sssp::{InvalidSource, ShortestPaths};
use dsi_progress_logger::ProgressLog;
use std::time::{Duration, Instant};
use thiserror::Error;

/// The two distance maps disagree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    #[error("The distance maps have different numbers of nodes ({left} and {right})")]
    NumNodes { left: usize, right: usize },
    #[error("Node {node} has distance {left} in the first map and {right} in the second one")]
    Distance {
        node: usize,
        left: Distance,
        right: Distance,
    },
}

/// Returns true if the two maps contain the same nodes with the same
/// distances.
///
/// Unreachable nodes compare equal to unreachable nodes.
pub fn compare(a: &DistanceMap, b: &DistanceMap) -> bool {
    a.as_slice() == b.as_slice()
}

/// Returns the first difference between two maps, or `None` if they are
/// equal.
pub fn first_mismatch(a: &DistanceMap, b: &DistanceMap) -> Option<Mismatch> {
    if a.num_nodes() != b.num_nodes() {
        return Some(Mismatch::NumNodes {
            left: a.num_nodes(),
            right: b.num_nodes(),
        });
    }
    a.iter()
        .zip(b.iter())
        .find(|((_, x), (_, y))| x != y)
        .map(|((node, left), (_, right))| Mismatch::Distance { node, left, right })
}

/// A value together with the wall-clock time it took to compute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Calls `f`, measuring the time it takes.
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        Self {
            value,
            elapsed: start.elapsed(),
        }
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Moves the timing inside the result.
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// The outcome of a single engine run.
#[derive(Debug, Clone)]
pub struct EngineRun {
    /// The [name](ShortestPaths::name) of the engine.
    pub engine: &'static str,
    pub distances: Timed<DistanceMap>,
    /// The [rounds](ShortestPaths::rounds) performed by the engine, if any.
    pub rounds: Option<usize>,
}

/// The outcome of a [`cross_check`].
#[derive(Debug, Clone)]
pub struct CrossCheck {
    pub left: EngineRun,
    pub right: EngineRun,
    /// The first difference between the two maps, if any.
    pub mismatch: Option<Mismatch>,
}

impl CrossCheck {
    /// Returns true if the two engines computed the same distances.
    pub fn is_consistent(&self) -> bool {
        self.mismatch.is_none()
    }

    /// Returns the elapsed times of the two runs.
    ///
    /// Timings are advisory, and play no role in the comparison.
    pub fn timings(&self) -> (Duration, Duration) {
        (self.left.distances.elapsed, self.right.distances.elapsed)
    }

    /// Returns the distances computed by the first engine if the two engines
    /// agree, or the first mismatch.
    pub fn into_result(self) -> Result<DistanceMap, Mismatch> {
        match self.mismatch {
            None => Ok(self.left.distances.value),
            Some(mismatch) => Err(mismatch),
        }
    }
}

/// How to run the two engines of a [`cross_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One after the other, in the current thread.
    #[default]
    Sequential,
    /// As two [Rayon](rayon) tasks joined before comparing the results.
    Parallel,
}

fn timed_run(
    engine: &mut impl ShortestPaths,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<EngineRun, InvalidSource> {
    let distances = Timed::measure(|| engine.shortest_paths(source, pl)).transpose()?;
    Ok(EngineRun {
        engine: engine.name(),
        distances,
        rounds: engine.rounds(),
    })
}

/// Runs two engines from the same source and compares their results.
///
/// Each engine owns its working state and the graph is only read, so the
/// order of the runs, or running them in [parallel](Execution::Parallel),
/// does not change the result; only the timings may differ.
///
/// # Errors
///
/// Returns [`InvalidSource`] if `source` is not a node of the graph. In the
/// sequential case, the second engine is not run at all.
pub fn cross_check<A, B>(
    left: &mut A,
    right: &mut B,
    source: usize,
    execution: Execution,
    pl_left: &mut (impl ProgressLog + Send),
    pl_right: &mut (impl ProgressLog + Send),
) -> Result<CrossCheck, InvalidSource>
where
    A: ShortestPaths + Send,
    B: ShortestPaths + Send,
{
    let (left, right) = match execution {
        Execution::Sequential => {
            let left = timed_run(left, source, pl_left)?;
            (left, timed_run(right, source, pl_right)?)
        }
        Execution::Parallel => {
            let (left, right) = rayon::join(
                || timed_run(left, source, pl_left),
                || timed_run(right, source, pl_right),
            );
            (left?, right?)
        }
    };

    let mismatch = first_mismatch(&left.distances.value, &right.distances.value);
    Ok(CrossCheck {
        left,
        right,
        mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Distance::*;

    fn map(source: usize, d: &[Distance]) -> DistanceMap {
        DistanceMap::new(source, d.to_vec().into_boxed_slice())
    }

    #[test]
    fn test_compare() {
        let a = map(0, &[Finite(0), Finite(1), Unreachable]);
        let b = map(0, &[Finite(0), Finite(1), Unreachable]);
        assert!(compare(&a, &b));
        assert_eq!(first_mismatch(&a, &b), None);

        let c = map(0, &[Finite(0), Finite(1), Finite(2)]);
        assert!(!compare(&a, &c));
        assert_eq!(
            first_mismatch(&a, &c),
            Some(Mismatch::Distance {
                node: 2,
                left: Unreachable,
                right: Finite(2)
            })
        );

        let d = map(0, &[Finite(0), Finite(1)]);
        assert!(!compare(&a, &d));
        assert_eq!(
            first_mismatch(&a, &d),
            Some(Mismatch::NumNodes { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_timed() {
        let t = Timed::measure(|| Ok::<_, ()>(42));
        let elapsed = t.elapsed;
        let t = t.transpose().unwrap();
        assert_eq!(t.value, 42);
        assert_eq!(t.elapsed, elapsed);
        assert!(Timed::measure(|| Err::<(), _>(0)).transpose().is_err());
    }

    #[test]
    fn test_rounds() -> anyhow::Result<()> {
        use crate::algo::sssp::{BellmanFord, Dijkstra};
        use crate::graphs::sym_graph::SymGraph;
        use dsi_progress_logger::no_logging;

        let graph = SymGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut bellman_ford = BellmanFord::new(&graph);
        let check = cross_check(
            &mut Dijkstra::new(&graph),
            &mut bellman_ford,
            4,
            Execution::Sequential,
            no_logging![],
            no_logging![],
        )?;
        assert_eq!(check.left.rounds, None);
        assert_eq!(check.right.rounds, Some(bellman_ford.passes()));
        // Edges are enumerated from the smaller endpoint, so from the last
        // node of a path each pass settles a single node
        assert_eq!(check.right.rounds, Some(4));
        Ok(())
    }
}
