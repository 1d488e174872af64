//! Output formatting for search results.
//!
//! This module renders grids with their search overlay, the per-run summary
//! and the multi-algorithm comparison table, in text or JSON.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use pathviz_lib::output::glyph;
use pathviz_lib::{Cell, Grid, SearchReport};

use crate::terminal::ColorPalette;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Visual state of one grid cell during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Wall,
    Start,
    Finish,
    Visited,
    Path,
}

/// Mutable picture of a grid that playback callbacks paint onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    marks: Vec<Mark>,
}

impl Canvas {
    /// Blank canvas showing only walls and endpoints.
    pub fn new(grid: &Grid) -> Self {
        let marks = grid
            .nodes()
            .map(|node| {
                if node.is_start {
                    Mark::Start
                } else if node.is_finish {
                    Mark::Finish
                } else if node.is_wall {
                    Mark::Wall
                } else {
                    Mark::Open
                }
            })
            .collect();
        Self {
            cols: grid.cols(),
            marks,
        }
    }

    /// Paint a visited cell. Endpoints keep their mark.
    pub fn mark_visited(&mut self, cell: Cell) {
        self.paint(cell, Mark::Visited);
    }

    /// Paint a path cell. Endpoints keep their mark.
    pub fn mark_path(&mut self, cell: Cell) {
        self.paint(cell, Mark::Path);
    }

    fn paint(&mut self, cell: Cell, mark: Mark) {
        if cell.col >= self.cols {
            return;
        }
        if let Some(slot) = self.marks.get_mut(cell.row * self.cols + cell.col) {
            if matches!(*slot, Mark::Open | Mark::Visited) {
                *slot = mark;
            }
        }
    }

    /// Render the canvas, one line per grid row.
    pub fn render(&self, palette: &ColorPalette) -> String {
        let mut buffer = String::with_capacity(self.marks.len() * 2);
        for row in self.marks.chunks(self.cols) {
            for mark in row {
                let (color, ch) = match mark {
                    Mark::Open => ("", glyph::OPEN),
                    Mark::Wall => (palette.wall, glyph::WALL),
                    Mark::Start => (palette.start, glyph::START),
                    Mark::Finish => (palette.finish, glyph::FINISH),
                    Mark::Visited => (palette.visited, glyph::VISITED),
                    Mark::Path => (palette.path, glyph::PATH),
                };
                if color.is_empty() {
                    buffer.push(ch);
                } else {
                    let _ = write!(buffer, "{color}{ch}{}", palette.reset);
                }
            }
            buffer.push('\n');
        }
        buffer
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    #[serde(flatten)]
    pub report: SearchReport<Cell>,
    pub optimal: bool,
}

/// Render the comparison table as aligned text.
pub fn render_comparison(rows: &[ComparisonRow], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}{:<14} {:>8} {:>6} {:>8}{}",
        palette.white_bold,
        "algorithm",
        "visited",
        "hops",
        "optimal",
        palette.reset
    );
    for row in rows {
        let hops = if row.report.path_found {
            row.report.hops.to_string()
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            buffer,
            "{:<14} {:>8} {:>6} {:>8}",
            row.report.algorithm.as_str(),
            row.report.visited_count,
            hops,
            if row.optimal { "yes" } else { "no" }
        );
    }
    buffer
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration, palette: &ColorPalette) {
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    println!("\n{}Completed in {}{}", palette.gray, time_str, palette.reset);
}
