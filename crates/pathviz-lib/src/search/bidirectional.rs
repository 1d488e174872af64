use std::collections::VecDeque;
use std::hash::Hash;

use crate::error::Result;
use crate::node::{SearchSpace, SearchState};
use crate::path::reconstruct_bidirectional;

use super::{settle_trivial, Algorithm, SearchOutcome};

/// Bidirectional breadth-first search.
///
/// A forward frontier grows from `start` and a backward frontier from
/// `finish`, each with its own visited set and backpointers: forward
/// backpointers lead toward `start`, backward ones toward `finish`. The two
/// frontiers alternate, each advancing one full BFS level per turn.
///
/// Meetings are detected on discovery: when a frontier reaches a node the
/// other side has already visited. The frontier then finishes its current
/// level, keeping the meeting with the smallest combined depth (first found
/// on ties), and the search stops. This yields a path with the fewest edges.
pub fn bidirectional<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::Bidirectional, space, start, finish)? {
        return Ok(outcome);
    }

    let mut outcome = SearchOutcome::new(Algorithm::Bidirectional, start, finish);
    let mut forward = Frontier::new(start);
    let mut backward = Frontier::new(finish);
    let mut buf = Vec::new();

    let mut meeting = None;
    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        meeting = forward.advance_level(space, &backward.state, &mut outcome.visited, &mut buf);
        if meeting.is_some() {
            break;
        }
        meeting = backward.advance_level(space, &forward.state, &mut outcome.visited, &mut buf);
        if meeting.is_some() {
            break;
        }
    }

    if let Some(meeting) = meeting {
        tracing::debug!("bidirectional frontiers met at {:?}", meeting);
        outcome.path =
            reconstruct_bidirectional(&forward.state, &backward.state, start, finish, meeting);
    }
    outcome.state = forward.state;
    outcome.backward = Some(backward.state);
    Ok(outcome)
}

struct Frontier<N> {
    queue: VecDeque<N>,
    state: SearchState<N>,
}

impl<N: Copy + Eq + Hash> Frontier<N> {
    fn new(root: N) -> Self {
        let mut state = SearchState::new();
        state.mark_visited(root);
        state.set_distance(root, 0.0);
        Self {
            queue: VecDeque::from([root]),
            state,
        }
    }

    /// Expand every node currently queued. Returns the best meeting node
    /// discovered during this level, if any.
    fn advance_level<S>(
        &mut self,
        space: &S,
        other: &SearchState<N>,
        visited: &mut Vec<N>,
        buf: &mut Vec<(N, f64)>,
    ) -> Option<N>
    where
        S: SearchSpace<Node = N>,
    {
        let mut best: Option<(N, f64)> = None;
        for _ in 0..self.queue.len() {
            let Some(current) = self.queue.pop_front() else {
                break;
            };
            visited.push(current);
            let depth = self.state.distance(current);

            buf.clear();
            space.neighbours(current, buf);
            for &(next, _) in buf.iter() {
                if !self.state.mark_visited(next) {
                    continue;
                }
                self.state.set_distance(next, depth + 1.0);
                self.state.set_previous(next, current);

                if other.is_visited(next) {
                    let total = depth + 1.0 + other.distance(next);
                    if best.map_or(true, |(_, shortest)| total < shortest) {
                        best = Some((next, total));
                    }
                    continue;
                }
                self.queue.push_back(next);
            }
        }
        best.map(|(node, _)| node)
    }
}
