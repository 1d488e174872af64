//! Common test utilities and grid fixtures.
//!
//! This module provides shared grids and helpers for integration tests.

use std::collections::HashSet;

use pathviz_lib::{run_search, Algorithm, Cell, Grid, Manhattan, SearchOutcome};

/// The reference 20x40 grid with start (10,5), finish (10,35) and no walls.
#[allow(dead_code)]
pub fn reference_grid() -> Grid {
    Grid::new(20, 40, Cell::new(10, 5), Cell::new(10, 35)).expect("reference grid")
}

/// A 9x12 grid with two staggered wall segments forcing a detour.
#[allow(dead_code)]
pub fn maze_grid() -> Grid {
    Grid::parse_layout(
        "\
............
..#.........
..#......#..
..#......#..
S.#......#.F
..#......#..
.........#..
.........#..
............",
    )
    .expect("maze layout")
}

/// Run `algorithm` between the grid's endpoints with a Manhattan heuristic.
#[allow(dead_code)]
pub fn search(grid: &Grid, algorithm: Algorithm) -> SearchOutcome<Cell> {
    let heuristic = Manhattan {
        finish: grid.finish(),
    };
    run_search(
        algorithm,
        grid,
        grid.start(),
        grid.finish(),
        Some(&heuristic as &dyn pathviz_lib::Heuristic<Cell>),
    )
    .unwrap_or_else(|err| panic!("{algorithm} failed: {err}"))
}

/// Assert a visited-order sequence never repeats a node.
#[allow(dead_code)]
pub fn assert_unique(visited: &[Cell]) {
    let unique: HashSet<_> = visited.iter().collect();
    assert_eq!(unique.len(), visited.len(), "visited order repeats a node");
}
