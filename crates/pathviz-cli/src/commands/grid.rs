//! Grid command handler for running and replaying a search on a 2D grid.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use pathviz_lib::{
    run_search, schedule_outcome, Algorithm, Cell, Grid, Heuristic, Manhattan, PlaybackStatus,
    SearchOutcome, SearchReport, SystemClock, VisualizerConfig,
};

use crate::output::{Canvas, OutputFormat};
use crate::terminal::{cursor, ColorPalette};

/// Grid shape, endpoints and walls shared by the grid-based commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GridOptions {
    /// Number of grid rows.
    #[arg(long)]
    pub rows: Option<usize>,
    /// Number of grid columns.
    #[arg(long)]
    pub cols: Option<usize>,
    /// Start cell.
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Cell>,
    /// Finish cell.
    #[arg(long, value_name = "ROW,COL")]
    pub finish: Option<Cell>,
    /// Cell to turn into a wall (repeatable).
    #[arg(long = "wall", value_name = "ROW,COL")]
    pub walls: Vec<Cell>,
    /// Read the grid from a layout file (`.` open, `#` wall, `S` start, `F` finish).
    #[arg(long, value_name = "FILE", conflicts_with_all = ["rows", "cols"])]
    pub layout: Option<PathBuf>,
}

impl GridOptions {
    /// Build the grid from a layout file or from `config` with flag overrides,
    /// then apply the extra walls.
    pub fn build(&self, config: &VisualizerConfig) -> Result<Grid> {
        let mut grid = match &self.layout {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read layout {}", path.display()))?;
                let mut grid = Grid::parse_layout(&text)
                    .with_context(|| format!("failed to parse layout {}", path.display()))?;
                if let Some(start) = self.start {
                    grid.set_start(start)?;
                }
                if let Some(finish) = self.finish {
                    grid.set_finish(finish)?;
                }
                grid
            }
            None => {
                let config = VisualizerConfig {
                    rows: self.rows.unwrap_or(config.rows),
                    cols: self.cols.unwrap_or(config.cols),
                    start: self.start.unwrap_or(config.start),
                    finish: self.finish.unwrap_or(config.finish),
                    step_delay: config.step_delay,
                };
                config.build_grid().context("failed to build grid")?
            }
        };

        for &cell in &self.walls {
            grid.set_wall(cell, true)
                .with_context(|| format!("cannot place wall at {cell}"))?;
        }
        tracing::debug!(
            "built {}x{} grid with {} walls",
            grid.rows(),
            grid.cols(),
            grid.wall_count()
        );
        Ok(grid)
    }
}

/// Arguments for the grid command.
#[derive(Args, Debug, Clone)]
pub struct GridCommandArgs {
    /// Search algorithm to run.
    #[arg(long, short = 'a', default_value_t)]
    pub algorithm: Algorithm,
    #[command(flatten)]
    pub grid: GridOptions,
    /// Replay the visited order and the path with a fixed delay per step.
    #[arg(long)]
    pub animate: bool,
    /// Delay between replay steps in milliseconds.
    #[arg(long, value_name = "MS")]
    pub step_delay_ms: Option<u64>,
}

/// Handle the grid subcommand.
pub fn handle_grid_command(
    args: &GridCommandArgs,
    format: OutputFormat,
    config: &VisualizerConfig,
) -> Result<()> {
    let grid = args.grid.build(config)?;
    let heuristic: &dyn Heuristic<Cell> = &Manhattan {
        finish: grid.finish(),
    };
    let outcome = run_search(
        args.algorithm,
        &grid,
        grid.start(),
        grid.finish(),
        Some(heuristic),
    )?;
    let report = SearchReport::from_outcome(&grid, &outcome);
    let palette = ColorPalette::detect();

    let canvas = if args.animate {
        let delay = args
            .step_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(config.step_delay);
        let (canvas, status) = animate(&grid, &outcome, delay, format, &palette);
        tracing::debug!("playback finished: {:?}", status);
        canvas
    } else {
        let mut canvas = Canvas::new(&grid);
        for &cell in &outcome.visited {
            canvas.mark_visited(cell);
        }
        for &cell in &outcome.path {
            canvas.mark_path(cell);
        }
        canvas
    };

    match format {
        OutputFormat::Text => {
            if !(args.animate && palette.is_colored()) {
                print!("{}", canvas.render(&palette));
            }
            print!("{}", report.render_plain());
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Replay `outcome` in real time.
///
/// Colour terminals redraw the grid in place after every event; otherwise
/// each event is printed as its own line (a JSON object per line in JSON
/// mode).
fn animate(
    grid: &Grid,
    outcome: &SearchOutcome<Cell>,
    delay: Duration,
    format: OutputFormat,
    palette: &ColorPalette,
) -> (Canvas, PlaybackStatus) {
    let canvas = RefCell::new(Canvas::new(grid));
    let redraw = format == OutputFormat::Text && palette.is_colored();
    if redraw {
        print!("{}", cursor::CLEAR);
    }

    let emit = |kind: &str, cell: Cell, canvas: &Canvas| {
        match format {
            OutputFormat::Json => println!("{}", json!({ "event": kind, "cell": cell })),
            OutputFormat::Text if redraw => {
                print!("{}{}", cursor::HOME, canvas.render(palette));
            }
            OutputFormat::Text => println!("{kind} {cell}"),
        }
        let _ = io::stdout().flush();
    };

    let status = {
        let mut playback = schedule_outcome(
            outcome,
            |cell| {
                let mut canvas = canvas.borrow_mut();
                canvas.mark_visited(cell);
                emit("visit", cell, &*canvas);
            },
            |cell| {
                let mut canvas = canvas.borrow_mut();
                canvas.mark_path(cell);
                emit("path", cell, &*canvas);
            },
            delay,
        );
        playback.run(&mut SystemClock::start())
    };
    (canvas.into_inner(), status)
}
