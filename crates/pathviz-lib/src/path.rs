//! Path reconstruction from backpointers.
//!
//! An empty path always means "no path found"; a path from a node to itself
//! is the single-element sequence `[start]`.

use std::hash::Hash;

use crate::node::{SearchSpace, SearchState};

/// Walk backpointers from `finish` to `start` and return the start-to-finish
/// path, or an empty vector when the chain does not reach `start`.
pub fn reconstruct_path<N>(state: &SearchState<N>, start: N, finish: N) -> Vec<N>
where
    N: Copy + Eq + Hash,
{
    if start == finish {
        return vec![start];
    }

    let mut path = vec![finish];
    let mut current = finish;
    // A well-formed chain visits each backpointer at most once.
    let limit = state.backpointer_count();
    while let Some(previous) = state.previous(current) {
        path.push(previous);
        if previous == start {
            path.reverse();
            return path;
        }
        if path.len() > limit {
            break;
        }
        current = previous;
    }
    Vec::new()
}

/// Join the two halves of a bidirectional search at `meeting`.
///
/// `forward` holds backpointers pointing toward `start`, `backward` holds
/// backpointers pointing toward `finish`. The result runs start to finish and
/// contains `meeting` exactly once.
pub fn reconstruct_bidirectional<N>(
    forward: &SearchState<N>,
    backward: &SearchState<N>,
    start: N,
    finish: N,
    meeting: N,
) -> Vec<N>
where
    N: Copy + Eq + Hash,
{
    let mut path = reconstruct_path(forward, start, meeting);
    if path.is_empty() {
        return path;
    }

    // The backward chain is already ordered meeting -> finish.
    let mut tail = reconstruct_path(backward, finish, meeting);
    if tail.is_empty() {
        return Vec::new();
    }
    tail.reverse();
    path.extend(tail.into_iter().skip(1));
    path
}

/// Whether every consecutive pair in `path` is joined by an edge of `space`.
pub fn is_connected_path<S: SearchSpace>(space: &S, path: &[S::Node]) -> bool {
    path_cost(space, path).is_some()
}

/// Sum of edge weights along `path`, or `None` if a hop has no edge.
pub fn path_cost<S: SearchSpace>(space: &S, path: &[S::Node]) -> Option<f64> {
    let mut buf = Vec::new();
    let mut total = 0.0;
    for pair in path.windows(2) {
        buf.clear();
        space.neighbours(pair[0], &mut buf);
        let weight = buf
            .iter()
            .find(|(node, _)| *node == pair[1])
            .map(|(_, weight)| *weight)?;
        total += weight;
    }
    Some(total)
}
