use std::fmt::{Display, Write};

use serde::Serialize;

use crate::error::Result;
use crate::node::SearchSpace;
use crate::path::path_cost;
use crate::search::{Algorithm, SearchOutcome};

/// Glyphs used when drawing a grid as text.
pub mod glyph {
    pub const OPEN: char = '.';
    pub const WALL: char = '#';
    pub const START: char = 'S';
    pub const FINISH: char = 'F';
    pub const VISITED: char = 'o';
    pub const PATH: char = '*';
}

/// Structured summary of a search run that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchReport<N> {
    pub algorithm: Algorithm,
    pub start: N,
    pub finish: N,
    pub path_found: bool,
    pub visited_count: usize,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_cost: Option<f64>,
    pub path: Vec<N>,
}

impl<N> SearchReport<N>
where
    N: Copy + Eq + std::hash::Hash,
{
    /// Summarise `outcome`, pricing its path against `space`.
    pub fn from_outcome<S>(space: &S, outcome: &SearchOutcome<N>) -> Self
    where
        S: SearchSpace<Node = N>,
    {
        let cost = if outcome.path_found() {
            path_cost(space, &outcome.path)
        } else {
            None
        };
        Self {
            algorithm: outcome.algorithm,
            start: outcome.start,
            finish: outcome.finish,
            path_found: outcome.path_found(),
            visited_count: outcome.visited.len(),
            hops: outcome.hop_count(),
            path_cost: cost,
            path: outcome.path.clone(),
        }
    }
}

impl<N: Display + Serialize> SearchReport<N> {
    /// Plain-text rendering: a one-line header followed by the path.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = write!(
            buffer,
            "{}: {} -> {} (visited {}",
            self.algorithm, self.start, self.finish, self.visited_count
        );
        if self.path_found {
            let _ = write!(buffer, ", {} hops", self.hops);
            if let Some(cost) = self.path_cost {
                let _ = write!(buffer, ", cost {cost:.3}");
            }
            let _ = writeln!(buffer, ")");
            let joined = self
                .path
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            let _ = writeln!(buffer, "{joined}");
        } else {
            let _ = writeln!(buffer, ", no path)");
        }
        buffer
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_waypoint_graph, Coordinate};
    use crate::grid::{Cell, Grid};
    use crate::search::run_search;

    #[test]
    fn report_summarises_grid_run() {
        let grid = Grid::new(3, 3, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        let outcome =
            run_search(Algorithm::Bfs, &grid, grid.start(), grid.finish(), None).unwrap();
        let report = SearchReport::from_outcome(&grid, &outcome);
        assert!(report.path_found);
        assert_eq!(report.hops, 2);
        assert_eq!(report.path_cost, Some(2.0));
        assert_eq!(report.visited_count, outcome.visited.len());

        let text = report.render_plain();
        assert!(text.starts_with("bfs: (0, 0) -> (0, 2)"));
        assert!(text.contains("(0, 0) -> (0, 1) -> (0, 2)"));
    }

    #[test]
    fn report_without_path_omits_cost() {
        let grid = Grid::parse_layout("S#F").unwrap();
        let outcome =
            run_search(Algorithm::Dfs, &grid, grid.start(), grid.finish(), None).unwrap();
        let report = SearchReport::from_outcome(&grid, &outcome);
        assert!(!report.path_found);
        assert!(report.render_plain().contains("no path"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["algorithm"], "dfs");
        assert!(json.get("path_cost").is_none());
        assert_eq!(json["path"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn waypoint_report_prices_in_kilometres() {
        let graph = build_waypoint_graph(&[
            Coordinate::new(48.86, 2.3522),
            Coordinate::new(48.85, 2.3522),
        ])
        .unwrap();
        let outcome = run_search(Algorithm::Dijkstra, &graph, 0, 1, None).unwrap();
        let report = SearchReport::from_outcome(&graph, &outcome);
        let cost = report.path_cost.unwrap();
        assert!((cost - 1.112).abs() < 0.01, "cost {cost}");
    }
}
