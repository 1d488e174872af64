//! Uniform 2D grid of cells with walls and a single start and finish.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::SearchSpace;

/// Neighbour offsets in expansion order: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Grid coordinate. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Manhattan (L1) distance between two cells.
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    fn offset(self, (dr, dc): (isize, isize)) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = Error;

    /// Parse `row,col`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidConfig {
            key: "cell".to_string(),
            value: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Cell { row, col })
    }
}

/// A single grid cell with its static flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridNode {
    pub cell: Cell,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
}

impl GridNode {
    /// Open cell at `cell` with no flags set.
    pub fn open(cell: Cell) -> Self {
        Self {
            cell,
            is_start: false,
            is_finish: false,
            is_wall: false,
        }
    }
}

/// Rectangular grid owning every node.
///
/// Invariants: all rows have equal length, exactly one node is the start and
/// one is the finish, and neither endpoint is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<GridNode>,
    start: Cell,
    finish: Cell,
}

impl Grid {
    /// Create an open grid with the given endpoints.
    pub fn new(rows: usize, cols: usize, start: Cell, finish: Cell) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        check_bounds(start, rows, cols)?;
        check_bounds(finish, rows, cols)?;

        let count = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(count)
            .map_err(|_| Error::InvalidDimensions { rows, cols })?;
        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(row, col);
                nodes.push(GridNode {
                    is_start: cell == start,
                    is_finish: cell == finish,
                    ..GridNode::open(cell)
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            nodes,
            start,
            finish,
        })
    }

    /// Build a grid from explicit rows of nodes.
    ///
    /// Node positions are taken from their index in `rows`; only the flags of
    /// each supplied node are read.
    pub fn from_rows(rows: Vec<Vec<GridNode>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }

        let mut nodes = Vec::with_capacity(height * width);
        let mut start = None;
        let mut finish = None;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::NonRectangularGrid {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, node) in row.into_iter().enumerate() {
                let cell = Cell::new(r, c);
                if node.is_wall && (node.is_start || node.is_finish) {
                    return Err(Error::ProtectedCell { row: r, col: c });
                }
                if node.is_start {
                    claim_endpoint(&mut start, "start", cell)?;
                }
                if node.is_finish {
                    claim_endpoint(&mut finish, "finish", cell)?;
                }
                nodes.push(GridNode { cell, ..node });
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            nodes,
            start: start.ok_or(Error::MissingEndpoint { endpoint: "start" })?,
            finish: finish.ok_or(Error::MissingEndpoint { endpoint: "finish" })?,
        })
    }

    /// Parse an ASCII layout: `.` open, `#` wall, `S` start, `F` finish.
    ///
    /// Blank lines and trailing whitespace are ignored.
    pub fn parse_layout(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (r, line) in text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let mut node = GridNode::open(Cell::new(r, c));
                match ch {
                    '.' => {}
                    '#' => node.is_wall = true,
                    'S' => node.is_start = true,
                    'F' => node.is_finish = true,
                    other => {
                        return Err(Error::InvalidLayoutChar {
                            found: other,
                            row: r,
                            col: c,
                        })
                    }
                }
                row.push(node);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Render the grid back into the layout format accepted by
    /// [`Grid::parse_layout`].
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.nodes.chunks(self.cols) {
            for node in row {
                out.push(layout_char(node));
            }
            out.push('\n');
        }
        out
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn finish(&self) -> Cell {
        self.finish
    }

    /// Look up the node at `cell`.
    pub fn node(&self, cell: Cell) -> Option<&GridNode> {
        self.index(cell).map(|idx| &self.nodes[idx])
    }

    /// Iterate over every node in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &GridNode> {
        self.nodes.iter()
    }

    /// Iterate over rows of nodes.
    pub fn node_rows(&self) -> impl Iterator<Item = &[GridNode]> {
        self.nodes.chunks(self.cols)
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.node(cell).is_some_and(|node| node.is_wall)
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_wall).count()
    }

    /// Validate that `cell` lies inside the grid.
    pub fn check_bounds(&self, cell: Cell) -> Result<()> {
        check_bounds(cell, self.rows, self.cols)
    }

    /// Flip the wall flag of `cell`, returning the new value.
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<bool> {
        let is_wall = !self.node_checked(cell)?.is_wall;
        self.set_wall(cell, is_wall)?;
        Ok(is_wall)
    }

    /// Set the wall flag of `cell`. Endpoints cannot become walls.
    pub fn set_wall(&mut self, cell: Cell, is_wall: bool) -> Result<()> {
        let idx = self.index_checked(cell)?;
        let node = &mut self.nodes[idx];
        if is_wall && (node.is_start || node.is_finish) {
            return Err(Error::ProtectedCell {
                row: cell.row,
                col: cell.col,
            });
        }
        node.is_wall = is_wall;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for node in &mut self.nodes {
            node.is_wall = false;
        }
    }

    /// Move the start marker to `cell`.
    pub fn set_start(&mut self, cell: Cell) -> Result<()> {
        let idx = self.open_endpoint_index(cell)?;
        if let Some(old) = self.index(self.start) {
            self.nodes[old].is_start = false;
        }
        self.nodes[idx].is_start = true;
        self.start = cell;
        Ok(())
    }

    /// Move the finish marker to `cell`.
    pub fn set_finish(&mut self, cell: Cell) -> Result<()> {
        let idx = self.open_endpoint_index(cell)?;
        if let Some(old) = self.index(self.finish) {
            self.nodes[old].is_finish = false;
        }
        self.nodes[idx].is_finish = true;
        self.finish = cell;
        Ok(())
    }

    fn open_endpoint_index(&self, cell: Cell) -> Result<usize> {
        let idx = self.index_checked(cell)?;
        if self.nodes[idx].is_wall {
            return Err(Error::ProtectedCell {
                row: cell.row,
                col: cell.col,
            });
        }
        Ok(idx)
    }

    fn node_checked(&self, cell: Cell) -> Result<&GridNode> {
        let idx = self.index_checked(cell)?;
        Ok(&self.nodes[idx])
    }

    fn index_checked(&self, cell: Cell) -> Result<usize> {
        self.check_bounds(cell)?;
        Ok(cell.row * self.cols + cell.col)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }
}

impl SearchSpace for Grid {
    type Node = Cell;

    fn contains(&self, node: Cell) -> bool {
        self.index(node).is_some()
    }

    fn is_traversable(&self, node: Cell) -> bool {
        self.node(node).is_some_and(|n| !n.is_wall)
    }

    fn neighbours(&self, node: Cell, buf: &mut Vec<(Cell, f64)>) {
        for direction in DIRECTIONS {
            if let Some(next) = node.offset(direction) {
                if self.is_traversable(next) {
                    buf.push((next, 1.0));
                }
            }
        }
    }
}

/// Copy of `grid` ready for a fresh run, walls preserved.
///
/// Search state is never stored on the grid, so this only has to copy it;
/// every run starts from a new [`SearchState`](crate::SearchState).
pub fn clear_search(grid: &Grid) -> Grid {
    grid.clone()
}

/// Copy of `grid` ready for a fresh run with every wall removed.
pub fn reset_grid(grid: &Grid) -> Grid {
    let mut fresh = grid.clone();
    fresh.clear_walls();
    fresh
}

fn check_bounds(cell: Cell, rows: usize, cols: usize) -> Result<()> {
    if cell.row >= rows || cell.col >= cols {
        return Err(Error::CellOutOfBounds {
            row: cell.row,
            col: cell.col,
            rows,
            cols,
        });
    }
    Ok(())
}

fn claim_endpoint(slot: &mut Option<Cell>, endpoint: &'static str, cell: Cell) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateEndpoint {
            endpoint,
            row: cell.row,
            col: cell.col,
        });
    }
    *slot = Some(cell);
    Ok(())
}

fn layout_char(node: &GridNode) -> char {
    if node.is_start {
        'S'
    } else if node.is_finish {
        'F'
    } else if node.is_wall {
        '#'
    } else {
        '.'
    }
}
