use thiserror::Error;

/// Convenient result alias for the pathviz library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant describes malformed input. An unreachable finish is not an
/// error: searches report it as an empty path.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a grid is requested with zero rows or columns, or with more
    /// cells than can be allocated.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Raised when the rows of a grid do not all share the same length.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a cell coordinate falls outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Raised when a layout has no start or no finish marker.
    #[error("grid layout has no {endpoint} cell")]
    MissingEndpoint { endpoint: &'static str },

    /// Raised when a layout declares more than one start or finish marker.
    #[error("grid layout declares more than one {endpoint} cell (second at ({row}, {col}))")]
    DuplicateEndpoint {
        endpoint: &'static str,
        row: usize,
        col: usize,
    },

    /// Raised when a layout contains a character outside `.#SF`.
    #[error("invalid layout character {found:?} at ({row}, {col})")]
    InvalidLayoutChar { found: char, row: usize, col: usize },

    /// Raised when a start or finish cell would become a wall, or an endpoint
    /// would be moved onto a wall.
    #[error("cell ({row}, {col}) is an endpoint and cannot be a wall")]
    ProtectedCell { row: usize, col: usize },

    /// Raised when a waypoint graph is requested for fewer than two points.
    #[error("at least 2 waypoints are required to build a graph (got {count})")]
    InsufficientWaypoints { count: usize },

    /// Raised when a waypoint is not a valid geographic coordinate.
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Raised when a search endpoint does not exist in the search space.
    #[error("unknown node {node}")]
    UnknownNode { node: String },

    /// Raised when an algorithm name cannot be parsed.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Raised when a configuration value cannot be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
