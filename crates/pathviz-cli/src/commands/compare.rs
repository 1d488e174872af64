//! Compare command handler: every algorithm on the same grid.

use anyhow::Result;
use clap::Args;

use pathviz_lib::{
    run_search, Algorithm, Cell, Grid, Heuristic, Manhattan, SearchReport, VisualizerConfig,
};

use crate::commands::grid::GridOptions;
use crate::output::{render_comparison, ComparisonRow, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the compare command.
#[derive(Args, Debug, Clone, Default)]
pub struct CompareCommandArgs {
    #[command(flatten)]
    pub grid: GridOptions,
}

/// Run each algorithm on `grid` and collect one row per algorithm.
pub fn compare_all(grid: &Grid) -> Result<Vec<ComparisonRow>> {
    let heuristic: &dyn Heuristic<Cell> = &Manhattan {
        finish: grid.finish(),
    };
    let mut rows = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let outcome = run_search(algorithm, grid, grid.start(), grid.finish(), Some(heuristic))?;
        rows.push(ComparisonRow {
            report: SearchReport::from_outcome(grid, &outcome),
            optimal: algorithm.is_optimal(),
        });
    }
    Ok(rows)
}

/// Handle the compare subcommand.
pub fn handle_compare_command(
    args: &CompareCommandArgs,
    format: OutputFormat,
    config: &VisualizerConfig,
) -> Result<()> {
    let grid = args.grid.build(config)?;
    let rows = compare_all(&grid)?;
    match format {
        OutputFormat::Text => print!("{}", render_comparison(&rows, &ColorPalette::detect())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}
