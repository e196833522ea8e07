/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Distances from a source node.
//!
//! Unreachable nodes are represented by an explicit variant rather than by a
//! numeric infinity, so maps can be compared and serialized without
//! ambiguity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// The length of a shortest path, or [`Unreachable`](Distance::Unreachable).
///
/// The derived order puts every finite distance before
/// [`Unreachable`](Distance::Unreachable), which therefore behaves as an
/// infinity in comparisons. On serialization, `Unreachable` becomes `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Option<usize>", from = "Option<usize>")]
pub enum Distance {
    /// A path of the given number of edges.
    Finite(usize),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// Returns the distance as a number, if finite.
    #[inline(always)]
    pub fn finite(self) -> Option<usize> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Returns true if the distance is finite.
    #[inline(always)]
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the distance increased by the (unit) weight of an edge.
    ///
    /// [`Unreachable`](Distance::Unreachable) stays unreachable.
    #[inline(always)]
    pub fn plus_one(self) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + 1),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<Distance> for Option<usize> {
    fn from(value: Distance) -> Self {
        value.finite()
    }
}

impl From<Option<usize>> for Distance {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Shortest-path distances of all nodes of a graph from a source node.
///
/// Node `x` is mapped to `self[x]`; the source is always at distance zero.
/// A map is produced by a single engine run and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMap {
    source: usize,
    distances: Box<[Distance]>,
}

impl DistanceMap {
    pub(crate) fn new(source: usize, distances: Box<[Distance]>) -> Self {
        debug_assert_eq!(distances[source], Distance::Finite(0));
        Self { source, distances }
    }

    /// Returns the source node.
    #[inline(always)]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of nodes in the map.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Returns the distance of `node` from the source, or `None` if `node` is
    /// not in the map.
    #[inline(always)]
    pub fn get(&self, node: usize) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Returns the distances, indexed by node.
    #[inline(always)]
    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }

    /// Returns an iterator over pairs `(node, distance)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Returns the number of nodes reachable from the source, including
    /// the source itself.
    pub fn num_reachable(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    /// Returns the largest finite distance.
    pub fn eccentricity(&self) -> usize {
        self.distances
            .iter()
            .filter_map(|d| d.finite())
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of nodes at each distance.
    pub fn histogram(&self) -> PathLengthHistogram {
        let mut counts = vec![0; self.eccentricity() + 1];
        let mut unreachable = 0;
        for d in self.distances.iter() {
            match d {
                Distance::Finite(d) => counts[*d] += 1,
                Distance::Unreachable => unreachable += 1,
            }
        }
        PathLengthHistogram {
            counts,
            unreachable,
        }
    }

    /// Consumes the map and returns the underlying distances.
    pub fn into_boxed_slice(self) -> Box<[Distance]> {
        self.distances
    }
}

impl Index<usize> for DistanceMap {
    type Output = Distance;

    #[inline(always)]
    fn index(&self, node: usize) -> &Distance {
        &self.distances[node]
    }
}

/// Distribution of shortest-path lengths from a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLengthHistogram {
    /// `counts[d]` is the number of nodes at distance `d`.
    pub counts: Vec<usize>,
    /// The number of unreachable nodes.
    pub unreachable: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use Distance::*;

    #[test]
    fn test_order() {
        assert!(Finite(0) < Finite(1));
        assert!(Finite(usize::MAX - 1) < Unreachable);
        assert_eq!(Unreachable.plus_one(), Unreachable);
        assert!(Finite(3).is_reachable());
        assert!(!Unreachable.is_reachable());
        assert_eq!(Finite(3).plus_one(), Finite(4));
        assert_eq!(Unreachable, Unreachable);
    }

    #[test]
    fn test_histogram() {
        let map = DistanceMap::new(
            1,
            vec![Finite(1), Finite(0), Finite(2), Unreachable, Finite(1)].into_boxed_slice(),
        );
        assert_eq!(map.num_reachable(), 4);
        assert_eq!(map.eccentricity(), 2);
        assert_eq!(
            map.histogram(),
            PathLengthHistogram {
                counts: vec![1, 2, 1],
                unreachable: 1
            }
        );
        assert_eq!(map.get(5), None);
        assert_eq!(map[3], Unreachable);
    }

    #[test]
    fn test_serde() -> anyhow::Result<()> {
        let map = DistanceMap::new(0, vec![Finite(0), Unreachable].into_boxed_slice());
        let json = serde_json::to_string(&map)?;
        assert_eq!(json, r#"{"source":0,"distances":[0,null]}"#);
        let d: Distance = serde_json::from_str("null")?;
        assert_eq!(d, Unreachable);
        Ok(())
    }
}
