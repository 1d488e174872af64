//! Node model shared by every search strategy.
//!
//! A [`SearchSpace`] exposes node identity and adjacency; it is never mutated
//! by a search. The mutable part of a run (visited marks, best distances and
//! backpointers) lives in a separate [`SearchState`] record keyed by node
//! identity, created fresh for every run.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Source of nodes and weighted edges for a search.
pub trait SearchSpace {
    /// Opaque node identifier.
    type Node: Copy + Eq + Hash + Ord + fmt::Debug;

    /// Whether `node` belongs to this space.
    fn contains(&self, node: Self::Node) -> bool;

    /// Whether `node` may be entered. Walls return `false`.
    fn is_traversable(&self, node: Self::Node) -> bool;

    /// Append the traversable neighbours of `node` with their non-negative
    /// edge weights into `buf`. The caller clears `buf` before calling.
    fn neighbours(&self, node: Self::Node, buf: &mut Vec<(Self::Node, f64)>);
}

/// Per-run search state: visited marks, best known distance and backpointers.
#[derive(Debug, Clone)]
pub struct SearchState<N> {
    visited: HashSet<N>,
    distance: HashMap<N, f64>,
    previous: HashMap<N, N>,
}

impl<N: Copy + Eq + Hash> SearchState<N> {
    /// Create an empty record: nothing visited, every distance infinite.
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            distance: HashMap::new(),
            previous: HashMap::new(),
        }
    }

    /// Mark `node` visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, node: N) -> bool {
        self.visited.insert(node)
    }

    pub fn is_visited(&self, node: N) -> bool {
        self.visited.contains(&node)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Best known distance to `node`, or `f64::INFINITY` when unreached.
    pub fn distance(&self, node: N) -> f64 {
        self.distance.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn set_distance(&mut self, node: N, distance: f64) {
        self.distance.insert(node, distance);
    }

    /// Backpointer of `node`, if one was installed.
    pub fn previous(&self, node: N) -> Option<N> {
        self.previous.get(&node).copied()
    }

    pub fn set_previous(&mut self, node: N, previous: N) {
        self.previous.insert(node, previous);
    }

    /// Number of installed backpointers.
    pub fn backpointer_count(&self) -> usize {
        self.previous.len()
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.distance.clear();
        self.previous.clear();
    }
}

impl<N: Copy + Eq + Hash> Default for SearchState<N> {
    fn default() -> Self {
        Self::new()
    }
}
