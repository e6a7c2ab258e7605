//! Single-source shortest paths over directed graphs with signed integer
//! weights.

mod bellman_ford;
mod dijkstra;
mod graph;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use graph::{Edge, Graph};

use crate::error::Result;

pub type ShortestPathFn<W> = fn(graph: &Graph<W>, source: usize) -> Result<ShortestPaths<W>>;

/// Tentative or final distance from the source. Every finite distance orders
/// below `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }
}

/// Distances and shortest-path tree from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<W> {
    pub source: usize,
    pub distances: Vec<Distance<W>>,
    pub predecessors: Vec<Option<usize>>,
}

impl<W: Copy> ShortestPaths<W> {
    fn unreached(node_count: usize, source: usize, zero: W) -> Self {
        let mut distances = vec![Distance::Unreachable; node_count];
        distances[source] = Distance::Finite(zero);
        Self {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// First node flagged in `overflowed` that no representable path
    /// reached. Its true distance does not fit in `W`.
    fn unrepresentable(&self, overflowed: &[bool]) -> Option<usize> {
        overflowed
            .iter()
            .zip(&self.distances)
            .position(|(&flagged, distance)| flagged && !distance.is_finite())
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, node: usize) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// Nodes from the source to `target` inclusive; empty if unreachable.
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        reconstruct(&self.predecessors, self.source, target)
    }
}

/// Walks `predecessors` back from `target` and returns the path from `source`
/// to `target`. Returns an empty path if `target` is unreachable, out of
/// range, or the chain never reaches `source`.
pub fn reconstruct(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target >= predecessors.len() || source >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut node = target;
    while node != source {
        // A simple path has at most one entry per node.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match predecessors[node] {
            Some(prev) => {
                path.push(prev);
                node = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

pub fn run_shortest_paths<W>(
    graph: &Graph<W>,
    source: usize,
    algorithm: ShortestPathFn<W>) -> Result<Vec<Distance<W>>>
{
    algorithm(graph, source).map(|paths| paths.distances)
}
