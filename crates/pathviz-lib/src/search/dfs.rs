use crate::error::Result;
use crate::node::SearchSpace;
use crate::path::reconstruct_path;

use super::{settle_trivial, Algorithm, SearchOutcome};

/// One suspended expansion: the node and the neighbours not yet tried.
struct Frame<N> {
    node: N,
    neighbours: Vec<(N, f64)>,
    next: usize,
}

/// Depth-first search returning the first path found.
///
/// Expansion is pre-order with an explicit stack instead of recursion, so
/// large grids cannot overflow the call stack. A node is marked visited when
/// it is entered; the search returns as soon as `finish` is entered. The path
/// is *a* path, not necessarily a shortest one.
pub fn depth_first<S: SearchSpace>(
    space: &S,
    start: S::Node,
    finish: S::Node,
) -> Result<SearchOutcome<S::Node>> {
    if let Some(outcome) = settle_trivial(Algorithm::Dfs, space, start, finish)? {
        return Ok(outcome);
    }

    let mut outcome = SearchOutcome::new(Algorithm::Dfs, start, finish);
    let state = &mut outcome.state;

    state.mark_visited(start);
    state.set_distance(start, 0.0);
    outcome.visited.push(start);
    let mut stack = vec![enter(space, start)];

    while let Some(frame) = stack.last_mut() {
        let Some(&(next, weight)) = frame.neighbours.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let parent = frame.node;

        // An earlier sibling's subtree may already have entered this node.
        if !state.mark_visited(next) {
            continue;
        }
        let cost = state.distance(parent) + weight;
        state.set_previous(next, parent);
        state.set_distance(next, cost);
        outcome.visited.push(next);
        if next == finish {
            break;
        }
        stack.push(enter(space, next));
    }

    outcome.path = reconstruct_path(&outcome.state, start, finish);
    Ok(outcome)
}

fn enter<S: SearchSpace>(space: &S, node: S::Node) -> Frame<S::Node> {
    let mut neighbours = Vec::new();
    space.neighbours(node, &mut neighbours);
    Frame {
        node,
        neighbours,
        next: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};
    use crate::path::is_connected_path;

    #[test]
    fn follows_first_neighbour_greedily() {
        // Up is tried first, then down: from the top-left corner DFS runs
        // down the first column before turning right.
        let grid = Grid::new(3, 3, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        let outcome = depth_first(&grid, grid.start(), grid.finish()).unwrap();

        assert_eq!(
            &outcome.visited[..3],
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(outcome.path.first(), Some(&grid.start()));
        assert_eq!(outcome.path.last(), Some(&grid.finish()));
        assert!(is_connected_path(&grid, &outcome.path));
        assert!(outcome.hop_count() > 2, "detour expected, not shortest");
    }

    #[test]
    fn never_visits_a_node_twice() {
        let grid = Grid::new(6, 6, Cell::new(0, 0), Cell::new(5, 5)).unwrap();
        let outcome = depth_first(&grid, grid.start(), grid.finish()).unwrap();
        let mut seen = std::collections::HashSet::new();
        assert!(outcome.visited.iter().all(|cell| seen.insert(*cell)));
    }

    #[test]
    fn exhausts_and_returns_empty_path_when_unreachable() {
        let grid = Grid::parse_layout("S.#F\n..#.").unwrap();
        let outcome = depth_first(&grid, grid.start(), grid.finish()).unwrap();
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.visited.len(), 4);
    }
}
