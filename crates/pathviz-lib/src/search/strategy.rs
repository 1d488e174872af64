//! Search strategies implementing the Strategy pattern.
//!
//! Each [`SearchStrategy`] wraps one algorithm so a caller that picks the
//! algorithm at runtime (a button, a CLI flag) can hold it behind a box and
//! invoke it uniformly.

use crate::error::Result;
use crate::heuristic::Heuristic;
use crate::node::SearchSpace;

use super::{
    a_star, bidirectional, breadth_first, depth_first, dijkstra, greedy_best_first, Algorithm,
    SearchOutcome,
};

/// Trait for search strategies over a search space `S`.
pub trait SearchStrategy<S: SearchSpace>: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Run the search from `start` to `finish`.
    ///
    /// `heuristic` is ignored by strategies that do not use one.
    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>>;
}

/// Breadth-first search strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsStrategy;

impl<S: SearchSpace> SearchStrategy<S> for BfsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        _heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        breadth_first(space, start, finish)
    }
}

/// Depth-first search strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsStrategy;

impl<S: SearchSpace> SearchStrategy<S> for DfsStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        _heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        depth_first(space, start, finish)
    }
}

/// Dijkstra strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraStrategy;

impl<S: SearchSpace> SearchStrategy<S> for DijkstraStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        _heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        dijkstra(space, start, finish)
    }
}

/// Bidirectional breadth-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalStrategy;

impl<S: SearchSpace> SearchStrategy<S> for BidirectionalStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bidirectional
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        _heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        bidirectional(space, start, finish)
    }
}

/// A* strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarStrategy;

impl<S: SearchSpace> SearchStrategy<S> for AStarStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        a_star(space, start, finish, heuristic)
    }
}

/// Greedy best-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl<S: SearchSpace> SearchStrategy<S> for GreedyStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn search(
        &self,
        space: &S,
        start: S::Node,
        finish: S::Node,
        heuristic: Option<&dyn Heuristic<S::Node>>,
    ) -> Result<SearchOutcome<S::Node>> {
        greedy_best_first(space, start, finish, heuristic)
    }
}

/// Select the strategy for `algorithm`.
pub fn select_strategy<S: SearchSpace + 'static>(
    algorithm: Algorithm,
) -> Box<dyn SearchStrategy<S>> {
    match algorithm {
        Algorithm::Bfs => Box::new(BfsStrategy),
        Algorithm::Dfs => Box::new(DfsStrategy),
        Algorithm::Dijkstra => Box::new(DijkstraStrategy),
        Algorithm::Bidirectional => Box::new(BidirectionalStrategy),
        Algorithm::AStar => Box::new(AStarStrategy),
        Algorithm::Greedy => Box::new(GreedyStrategy),
    }
}
