//! Search strategies over a [`SearchSpace`].
//!
//! This module provides:
//! - [`Algorithm`] - the supported strategies (BFS, DFS, Dijkstra,
//!   bidirectional BFS, A*, greedy best-first)
//! - [`SearchOutcome`] - visited order, reconstructed path and the per-run
//!   backpointers
//! - [`run_search`] - main entry point, resolving the [`SearchStrategy`] for
//!   an [`Algorithm`]
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`SearchStrategy`] implementation and
//! [`select_strategy`] maps an [`Algorithm`] to it. [`run_search`] always
//! goes through that mapping.
//!
//! Every strategy runs synchronously to completion and never mutates the
//! search space. A wall is never enqueued, visited or given a backpointer.
//! An unreachable finish yields an empty path, not an error.

mod best_first;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod strategy;

pub use best_first::{a_star, greedy_best_first};
pub use bfs::breadth_first;
pub use bidirectional::bidirectional;
pub use dfs::depth_first;
pub use dijkstra::dijkstra;
pub use strategy::{
    select_strategy, AStarStrategy, BfsStrategy, BidirectionalStrategy, DfsStrategy,
    DijkstraStrategy, GreedyStrategy, SearchStrategy,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::heuristic::Heuristic;
use crate::node::{SearchSpace, SearchState};

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search (unweighted, shortest by hop count).
    Bfs,
    /// Depth-first search (stops at the first path found).
    Dfs,
    /// Dijkstra's algorithm (weighted, shortest by total cost).
    #[default]
    Dijkstra,
    /// Breadth-first search from both ends meeting in the middle.
    Bidirectional,
    /// A* search (cost so far plus heuristic).
    AStar,
    /// Greedy best-first search (heuristic only).
    Greedy,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Bidirectional,
        Algorithm::AStar,
        Algorithm::Greedy,
    ];

    /// Whether the algorithm reads a heuristic.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::Greedy)
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dijkstra | Algorithm::Bidirectional | Algorithm::AStar
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::AStar => "a-star",
            Algorithm::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let algorithm = match normalized.as_str() {
            "bfs" | "breadth-first" => Algorithm::Bfs,
            "dfs" | "depth-first" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            "bidirectional" | "bdfs" => Algorithm::Bidirectional,
            "a-star" | "astar" | "a*" => Algorithm::AStar,
            "greedy" | "greedy-best-first" => Algorithm::Greedy,
            _ => {
                return Err(Error::UnknownAlgorithm {
                    name: s.to_string(),
                })
            }
        };
        Ok(algorithm)
    }
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome<N> {
    pub algorithm: Algorithm,
    pub start: N,
    pub finish: N,
    /// Nodes in the order they were expanded. Never contains duplicates.
    pub visited: Vec<N>,
    /// Start-to-finish path, empty when the finish is unreachable.
    pub path: Vec<N>,
    /// Backpointers and distances of the run (the forward half for
    /// bidirectional search).
    pub state: SearchState<N>,
    /// Backward-half state of a bidirectional search.
    pub backward: Option<SearchState<N>>,
}

impl<N: Copy + Eq + std::hash::Hash> SearchOutcome<N> {
    pub(crate) fn new(algorithm: Algorithm, start: N, finish: N) -> Self {
        Self {
            algorithm,
            start,
            finish,
            visited: Vec::new(),
            path: Vec::new(),
            state: SearchState::new(),
            backward: None,
        }
    }

    pub fn path_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path; zero when no path was found.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `algorithm` from `start` to `finish`.
///
/// `heuristic` is read by A* and greedy best-first only and defaults to zero.
pub fn run_search<S: SearchSpace + 'static>(
    algorithm: Algorithm,
    space: &S,
    start: S::Node,
    finish: S::Node,
    heuristic: Option<&dyn Heuristic<S::Node>>,
) -> Result<SearchOutcome<S::Node>> {
    tracing::debug!("running {} from {:?} to {:?}", algorithm, start, finish);

    let strategy = select_strategy::<S>(algorithm);
    let outcome = strategy.search(space, start, finish, heuristic)?;

    tracing::debug!(
        "{} visited {} nodes, path length {}",
        algorithm,
        outcome.visited.len(),
        outcome.path.len()
    );
    Ok(outcome)
}

/// Validate the endpoints and resolve the cases that need no search.
///
/// Returns `Ok(Some(_))` when the outcome is already known: an endpoint is
/// not traversable (empty path) or start equals finish (single-node path).
pub(crate) fn settle_trivial<S: SearchSpace>(
    algorithm: Algorithm,
    space: &S,
    start: S::Node,
    finish: S::Node,
) -> Result<Option<SearchOutcome<S::Node>>> {
    for node in [start, finish] {
        if !space.contains(node) {
            return Err(Error::UnknownNode {
                node: format!("{node:?}"),
            });
        }
    }

    let mut outcome = SearchOutcome::new(algorithm, start, finish);
    if !space.is_traversable(start) || !space.is_traversable(finish) {
        return Ok(Some(outcome));
    }
    if start == finish {
        outcome.state.mark_visited(start);
        outcome.state.set_distance(start, 0.0);
        outcome.visited.push(start);
        outcome.path.push(start);
        return Ok(Some(outcome));
    }
    Ok(None)
}
