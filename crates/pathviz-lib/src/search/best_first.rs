use crate::error::Result;
use crate::frontier::PriorityQueue;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::SearchSpace;
use crate::path::reconstruct_path;

use super::{settle_trivial, Algorithm, SearchOutcome};

/// A* search ordered by `g + h`.
///
/// `g` is the best known cost from `start` (stored as the node distance) and
/// `h` the heuristic estimate. The open set is a [`PriorityQueue`]; equal
/// `f` scores leave it in insertion order, which keeps runs deterministic.
/// Expanded nodes are closed and never reopened, so the result is optimal
/// for consistent heuristics. Without a heuristic the search degenerates to
/// Dijkstra's expansion order.
pub fn a_star<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
    heuristic: Option<&dyn Heuristic<S::Node>>,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::AStar, space, start, finish)? {
        return Ok(outcome);
    }
    let heuristic = heuristic_or_zero(Algorithm::AStar, heuristic);

    let mut outcome = SearchOutcome::new(Algorithm::AStar, start, finish);
    let state = &mut outcome.state;
    let mut open = PriorityQueue::new();
    let mut buf = Vec::new();

    state.set_distance(start, 0.0);
    open.enqueue(start, heuristic.estimate(start));

    while let Some((current, f_score)) = open.dequeue() {
        if state.is_visited(current) {
            continue;
        }
        let g_score = state.distance(current);
        // Skip entries superseded by a cheaper re-enqueue.
        if f_score > g_score + heuristic.estimate(current) {
            continue;
        }
        state.mark_visited(current);
        outcome.visited.push(current);
        if current == finish {
            break;
        }

        buf.clear();
        space.neighbours(current, &mut buf);
        for &(next, weight) in &buf {
            if state.is_visited(next) {
                continue;
            }
            let tentative = g_score + weight;
            if tentative < state.distance(next) {
                state.set_distance(next, tentative);
                state.set_previous(next, current);
                open.enqueue(next, tentative + heuristic.estimate(next));
            }
        }
    }

    outcome.path = reconstruct_path(&outcome.state, start, finish);
    Ok(outcome)
}

/// Greedy best-first search ordered by the heuristic alone.
///
/// Accumulated cost is ignored when ordering. A node's backpointer is fixed
/// when it is first discovered and never revised, even if a cheaper route to
/// it shows up later, so the path is not guaranteed optimal. Ties leave the
/// open set in insertion order.
pub fn greedy_best_first<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
    heuristic: Option<&dyn Heuristic<S::Node>>,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::Greedy, space, start, finish)? {
        return Ok(outcome);
    }
    let heuristic = heuristic_or_zero(Algorithm::Greedy, heuristic);

    let mut outcome = SearchOutcome::new(Algorithm::Greedy, start, finish);
    let state = &mut outcome.state;
    let mut open = PriorityQueue::new();
    let mut buf = Vec::new();

    // Discovered nodes are marked visited at enqueue time.
    state.mark_visited(start);
    state.set_distance(start, 0.0);
    open.enqueue(start, heuristic.estimate(start));

    while let Some((current, _)) = open.dequeue() {
        outcome.visited.push(current);
        if current == finish {
            break;
        }

        let cost = state.distance(current);
        buf.clear();
        space.neighbours(current, &mut buf);
        for &(next, weight) in &buf {
            if !state.mark_visited(next) {
                continue;
            }
            state.set_previous(next, current);
            state.set_distance(next, cost + weight);
            open.enqueue(next, heuristic.estimate(next));
        }
    }

    outcome.path = reconstruct_path(&outcome.state, start, finish);
    Ok(outcome)
}

fn heuristic_or_zero<N>(
    algorithm: Algorithm,
    heuristic: Option<&dyn Heuristic<N>>,
) -> &dyn Heuristic<N> {
    match heuristic {
        Some(heuristic) => heuristic,
        None => {
            tracing::warn!(
                "{} running without a heuristic; every estimate is zero",
                algorithm
            );
            &ZeroHeuristic
        }
    }
}
