//! Waypoints command handler for searching a great-circle waypoint graph.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use pathviz_lib::{
    build_waypoint_graph, run_search, Algorithm, Coordinate, GreatCircle, Heuristic,
    SearchReport, WaypointGraph, WaypointId,
};

use crate::output::OutputFormat;

/// Arguments for the waypoints command.
#[derive(Args, Debug, Clone)]
pub struct WaypointCommandArgs {
    /// Waypoint in decimal degrees (repeatable, at least two).
    #[arg(
        long = "point",
        value_name = "LAT,LON",
        required = true,
        allow_hyphen_values = true
    )]
    pub points: Vec<Coordinate>,
    /// Search algorithm to run.
    #[arg(long, short = 'a', default_value_t)]
    pub algorithm: Algorithm,
    /// Index of the starting waypoint.
    #[arg(long, default_value_t = 0)]
    pub from: WaypointId,
    /// Index of the destination waypoint (defaults to the last one).
    #[arg(long)]
    pub to: Option<WaypointId>,
}

/// JSON view of a waypoint search.
#[derive(Debug, Serialize)]
struct WaypointOutput {
    #[serde(flatten)]
    report: SearchReport<WaypointId>,
    route: Vec<Coordinate>,
}

/// Handle the waypoints subcommand.
pub fn handle_waypoints_command(args: &WaypointCommandArgs, format: OutputFormat) -> Result<()> {
    let graph = build_waypoint_graph(&args.points).context("failed to build waypoint graph")?;
    let to = args.to.unwrap_or(graph.len() - 1);
    graph
        .check_waypoint(args.from)
        .context("invalid --from waypoint")?;
    graph.check_waypoint(to).context("invalid --to waypoint")?;

    let heuristic = GreatCircle::new(&graph, to);
    let heuristic = heuristic
        .as_ref()
        .map(|h| h as &dyn Heuristic<WaypointId>);
    let outcome = run_search(args.algorithm, &graph, args.from, to, heuristic)?;
    let report = SearchReport::from_outcome(&graph, &outcome);
    let route = route_coordinates(&graph, &report.path)?;

    match format {
        OutputFormat::Text => {
            print!("{}", report.render_plain());
            for (id, coord) in report.path.iter().zip(&route) {
                println!("{id:>3}: {coord}");
            }
        }
        OutputFormat::Json => {
            let output = WaypointOutput { report, route };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn route_coordinates(graph: &WaypointGraph, path: &[WaypointId]) -> Result<Vec<Coordinate>> {
    let mut route = Vec::with_capacity(path.len());
    for &id in path {
        match graph.waypoint(id) {
            Some(coord) => route.push(coord),
            None => bail!("path references unknown waypoint {id}"),
        }
    }
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_coordinates_follow_path_order() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
        ];
        let graph = build_waypoint_graph(&points).unwrap();
        let route = route_coordinates(&graph, &[2, 0]).unwrap();
        assert_eq!(route, vec![points[2], points[0]]);
        assert!(route_coordinates(&graph, &[9]).is_err());
    }
}
