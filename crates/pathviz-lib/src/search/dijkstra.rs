use crate::error::Result;
use crate::frontier::PriorityQueue;
use crate::node::SearchSpace;
use crate::path::reconstruct_path;

use super::{settle_trivial, Algorithm, SearchOutcome};

/// Dijkstra's algorithm.
///
/// Every distance starts at infinity except `start`, which is zero. A node is
/// settled (and recorded as visited) when it leaves the queue with its final
/// distance; a neighbour is relaxed and re-enqueued only on a strictly
/// shorter distance. Stale queue entries are skipped. Equal distances leave
/// the queue in insertion order.
pub fn dijkstra<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::Dijkstra, space, start, finish)? {
        return Ok(outcome);
    }

    let mut outcome = SearchOutcome::new(Algorithm::Dijkstra, start, finish);
    let state = &mut outcome.state;
    let mut queue = PriorityQueue::new();
    let mut buf = Vec::new();

    state.set_distance(start, 0.0);
    queue.enqueue(start, 0.0);

    while let Some((current, distance)) = queue.dequeue() {
        if state.is_visited(current) || distance > state.distance(current) {
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
            let candidate = distance + weight;
            if candidate < state.distance(next) {
                state.set_distance(next, candidate);
                state.set_previous(next, current);
                queue.enqueue(next, candidate);
            }
        }
    }

    outcome.path = reconstruct_path(&outcome.state, start, finish);
    Ok(outcome)
}
