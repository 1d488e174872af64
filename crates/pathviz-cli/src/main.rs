use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathviz_cli::commands::compare::{handle_compare_command, CompareCommandArgs};
use pathviz_cli::commands::grid::{handle_grid_command, GridCommandArgs};
use pathviz_cli::commands::waypoints::{handle_waypoints_command, WaypointCommandArgs};
use pathviz_cli::output::{print_footer, OutputFormat};
use pathviz_cli::terminal::ColorPalette;
use pathviz_lib::VisualizerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run and replay graph searches on grids and waypoint maps")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Print the elapsed time after the command completes.
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a search on a grid and print the overlay, or replay it with --animate.
    Grid(GridCommandArgs),
    /// Run a search between two waypoints of a great-circle graph.
    Waypoints(WaypointCommandArgs),
    /// Run every algorithm on the same grid and print one row per algorithm.
    Compare(CompareCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let config =
        VisualizerConfig::from_env().context("invalid PATHVIZ_* environment configuration")?;

    match &cli.command {
        Command::Grid(args) => handle_grid_command(args, cli.format, &config)?,
        Command::Waypoints(args) => handle_waypoints_command(args, cli.format)?,
        Command::Compare(args) => handle_compare_command(args, cli.format, &config)?,
    }

    if cli.timing && cli.format == OutputFormat::Text {
        print_footer(started.elapsed(), &ColorPalette::detect());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
