//! Remaining-cost estimates for A* and greedy best-first search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{haversine_km, Coordinate, WaypointGraph, WaypointId};
use crate::grid::Cell;

/// Non-negative estimate of the remaining cost from a node to the finish.
pub trait Heuristic<N> {
    fn estimate(&self, node: N) -> f64;
}

/// Estimates zero everywhere. A* with this heuristic expands like Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: N) -> f64 {
        0.0
    }
}

/// Explicit node-to-estimate table; nodes without an entry estimate zero.
impl<N: Eq + Hash> Heuristic<N> for HashMap<N, f64> {
    fn estimate(&self, node: N) -> f64 {
        self.get(&node).copied().unwrap_or(0.0)
    }
}

/// Wraps a closure as a heuristic.
pub struct FnHeuristic<F>(pub F);

impl<N, F: Fn(N) -> f64> Heuristic<N> for FnHeuristic<F> {
    fn estimate(&self, node: N) -> f64 {
        (self.0)(node)
    }
}

/// Manhattan distance to `finish`; admissible on a unit-weight 4-connected
/// grid.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    pub finish: Cell,
}

impl Heuristic<Cell> for Manhattan {
    fn estimate(&self, node: Cell) -> f64 {
        node.manhattan(self.finish) as f64
    }
}

/// Great-circle distance to a goal waypoint; admissible because every edge
/// weight is itself a great-circle distance.
#[derive(Debug, Clone)]
pub struct GreatCircle {
    waypoints: Vec<Coordinate>,
    goal: Coordinate,
}

impl GreatCircle {
    /// Returns `None` when `goal` is not a waypoint of `graph`.
    pub fn new(graph: &WaypointGraph, goal: WaypointId) -> Option<Self> {
        Some(Self {
            goal: graph.waypoint(goal)?,
            waypoints: graph.waypoints().to_vec(),
        })
    }
}

impl Heuristic<WaypointId> for GreatCircle {
    fn estimate(&self, node: WaypointId) -> f64 {
        self.waypoints
            .get(node)
            .map(|coord| haversine_km(*coord, self.goal))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_waypoint_graph;

    #[test]
    fn table_defaults_missing_nodes_to_zero() {
        let table: HashMap<u32, f64> = [(1, 4.0)].into_iter().collect();
        assert_eq!(table.estimate(1), 4.0);
        assert_eq!(table.estimate(2), 0.0);
    }

    #[test]
    fn manhattan_counts_grid_steps() {
        let h = Manhattan {
            finish: Cell::new(10, 35),
        };
        assert_eq!(h.estimate(Cell::new(10, 5)), 30.0);
        assert_eq!(h.estimate(Cell::new(10, 35)), 0.0);
    }

    #[test]
    fn closure_heuristic_delegates() {
        let h = FnHeuristic(|n: u32| f64::from(n) * 2.0);
        assert_eq!(h.estimate(3), 6.0);
    }

    #[test]
    fn great_circle_is_zero_at_goal() {
        let graph = build_waypoint_graph(&[
            Coordinate::new(48.86, 2.3522),
            Coordinate::new(48.85, 2.3522),
        ])
        .unwrap();
        let h = GreatCircle::new(&graph, 1).unwrap();
        assert_eq!(h.estimate(1), 0.0);
        assert!(h.estimate(0) > 1.0);
        assert!(GreatCircle::new(&graph, 7).is_none());
    }
}
