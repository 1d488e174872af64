mod common;

use pathviz_lib::{
    clear_search, is_connected_path, reset_grid, run_search, select_strategy, Algorithm, Cell,
    Grid, SearchSpace,
};

use common::{assert_unique, maze_grid, reference_grid, search};

#[test]
fn walls_never_appear_in_visited_or_path() {
    let grid = maze_grid();
    for algorithm in Algorithm::ALL {
        let outcome = search(&grid, algorithm);
        for cell in outcome.visited.iter().chain(&outcome.path) {
            assert!(!grid.is_wall(*cell), "{algorithm} touched wall {cell}");
        }
        assert_unique(&outcome.visited);
    }
}

#[test]
fn bfs_and_dijkstra_agree_on_unit_grid() {
    for grid in [reference_grid(), maze_grid()] {
        let bfs = search(&grid, Algorithm::Bfs);
        let dijkstra = search(&grid, Algorithm::Dijkstra);
        assert!(bfs.path_found());
        assert_eq!(bfs.path.len(), dijkstra.path.len());
    }
}

#[test]
fn optimal_strategies_match_bfs_length() {
    let grid = maze_grid();
    let expected = search(&grid, Algorithm::Bfs).path.len();
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
        assert_eq!(search(&grid, algorithm).path.len(), expected, "{algorithm}");
    }
}

#[test]
fn dfs_path_is_connected_and_never_shorter_than_bfs() {
    for grid in [reference_grid(), maze_grid()] {
        let bfs = search(&grid, Algorithm::Bfs);
        let dfs = search(&grid, Algorithm::Dfs);
        assert!(dfs.path_found());
        assert!(is_connected_path(&grid, &dfs.path));
        assert!(dfs.path.len() >= bfs.path.len());
    }
}

#[test]
fn bidirectional_does_no_more_work_than_two_bfs_runs() {
    let grid = reference_grid();
    let forward = run_search(Algorithm::Bfs, &grid, grid.start(), grid.finish(), None).unwrap();
    let backward = run_search(Algorithm::Bfs, &grid, grid.finish(), grid.start(), None).unwrap();
    let both = search(&grid, Algorithm::Bidirectional);
    assert!(both.visited.len() <= forward.visited.len() + backward.visited.len());
    assert_eq!(both.path.len(), forward.path.len());
}

#[test]
fn successful_paths_run_start_to_finish() {
    let grid = maze_grid();
    for algorithm in Algorithm::ALL {
        let outcome = search(&grid, algorithm);
        assert_eq!(outcome.path.first(), Some(&grid.start()), "{algorithm}");
        assert_eq!(outcome.path.last(), Some(&grid.finish()), "{algorithm}");
        assert!(is_connected_path(&grid, &outcome.path), "{algorithm}");
        for pair in outcome.path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{algorithm}");
        }
    }
}

#[test]
fn boxed_in_finish_yields_empty_path_for_every_strategy() {
    let mut grid = reference_grid();
    for cell in [
        Cell::new(9, 35),
        Cell::new(11, 35),
        Cell::new(10, 34),
        Cell::new(10, 36),
    ] {
        grid.set_wall(cell, true).unwrap();
    }
    for algorithm in Algorithm::ALL {
        let outcome = search(&grid, algorithm);
        assert!(outcome.path.is_empty(), "{algorithm}");
        assert!(!outcome.visited.is_empty(), "{algorithm}");
        assert_unique(&outcome.visited);
    }
}

#[test]
fn reference_scenario_bounds() {
    let grid = reference_grid();
    for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra] {
        let outcome = search(&grid, algorithm);
        assert_eq!(outcome.path.len(), 31, "{algorithm}");
        assert_eq!(outcome.hop_count(), 30);
        assert!(outcome.visited.len() >= 31, "{algorithm}");
        assert!(outcome.visited.len() <= 800, "{algorithm}");
    }
}

#[test]
fn heuristic_search_expands_less_than_dijkstra() {
    let grid = reference_grid();
    let dijkstra = search(&grid, Algorithm::Dijkstra);
    let a_star = search(&grid, Algorithm::AStar);
    let greedy = search(&grid, Algorithm::Greedy);
    assert!(a_star.visited.len() < dijkstra.visited.len());
    assert!(greedy.visited.len() <= a_star.visited.len());
    assert_eq!(a_star.path.len(), 31);
}

#[test]
fn runs_are_repeatable_and_leave_grid_untouched() {
    let grid = maze_grid();
    let before = grid.clone();
    for algorithm in Algorithm::ALL {
        let first = search(&grid, algorithm);
        let second = search(&clear_search(&grid), algorithm);
        assert_eq!(first.visited, second.visited, "{algorithm}");
        assert_eq!(first.path, second.path, "{algorithm}");
    }
    assert_eq!(grid, before);
}

#[test]
fn reset_grid_reopens_blocked_routes() {
    let mut grid = Grid::parse_layout("S#F").unwrap();
    assert!(search(&grid, Algorithm::Bfs).path.is_empty());
    grid = reset_grid(&grid);
    assert_eq!(search(&grid, Algorithm::Bfs).path.len(), 3);
}

#[test]
fn strategies_selected_at_runtime_match_direct_dispatch() {
    let grid = maze_grid();
    for algorithm in Algorithm::ALL {
        let strategy = select_strategy::<Grid>(algorithm);
        assert_eq!(strategy.algorithm(), algorithm);
        let boxed = strategy
            .search(&grid, grid.start(), grid.finish(), None)
            .unwrap();
        let direct = run_search(algorithm, &grid, grid.start(), grid.finish(), None).unwrap();
        assert_eq!(boxed.visited, direct.visited, "{algorithm}");
        assert_eq!(boxed.path, direct.path, "{algorithm}");
    }
}

#[test]
fn every_visited_cell_is_traversable() {
    let grid = maze_grid();
    let outcome = search(&grid, Algorithm::Dfs);
    assert!(outcome.visited.iter().all(|&cell| grid.is_traversable(cell)));
}
