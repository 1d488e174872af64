//! Pathviz library entry points.
//!
//! This crate models a walled 2D grid and a great-circle waypoint graph,
//! runs graph-search strategies over either (BFS, DFS, Dijkstra,
//! bidirectional BFS, A*, greedy best-first), reconstructs the resulting
//! path, and schedules the visited and path sequences for timed replay.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

pub mod config;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod output;
pub mod path;
pub mod playback;
pub mod search;

pub use config::VisualizerConfig;
pub use error::{Error, Result};
pub use frontier::PriorityQueue;
pub use graph::{build_waypoint_graph, haversine_km, Coordinate, WaypointGraph, WaypointId};
pub use grid::{clear_search, reset_grid, Cell, Grid, GridNode};
pub use heuristic::{FnHeuristic, GreatCircle, Heuristic, Manhattan, ZeroHeuristic};
pub use node::{SearchSpace, SearchState};
pub use output::SearchReport;
pub use path::{is_connected_path, path_cost, reconstruct_bidirectional, reconstruct_path};
pub use playback::{
    schedule, schedule_outcome, CancelHandle, Clock, ManualClock, Playback, PlaybackEvent,
    PlaybackStatus, ScheduledEvent, SystemClock, DEFAULT_STEP_DELAY,
};
pub use search::{run_search, select_strategy, Algorithm, SearchOutcome, SearchStrategy};
