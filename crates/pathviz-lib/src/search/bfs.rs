use std::collections::VecDeque;

use crate::error::Result;
use crate::node::SearchSpace;
use crate::path::reconstruct_path;

use super::{settle_trivial, Algorithm, SearchOutcome};

/// Breadth-first search.
///
/// Nodes are marked visited when enqueued so no node enters the queue twice.
/// The search stops when `finish` is dequeued, which yields a path with the
/// fewest edges.
pub fn breadth_first<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::Bfs, space, start, finish)? {
        return Ok(outcome);
    }

    let mut outcome = SearchOutcome::new(Algorithm::Bfs, start, finish);
    let state = &mut outcome.state;
    let mut queue = VecDeque::new();
    let mut buf = Vec::new();

    state.mark_visited(start);
    state.set_distance(start, 0.0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        outcome.visited.push(current);
        if current == finish {
            break;
        }

        let depth = state.distance(current);
        buf.clear();
        space.neighbours(current, &mut buf);
        for &(next, _) in &buf {
            if !state.mark_visited(next) {
                continue;
            }
            state.set_distance(next, depth + 1.0);
            state.set_previous(next, current);
            queue.push_back(next);
        }
    }

    outcome.path = reconstruct_path(&outcome.state, start, finish);
    Ok(outcome)
}
