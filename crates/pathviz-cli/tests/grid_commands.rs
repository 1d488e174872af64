use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("pathviz-cli");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("PATHVIZ_ROWS")
        .env_remove("PATHVIZ_COLS")
        .env_remove("PATHVIZ_START")
        .env_remove("PATHVIZ_FINISH")
        .env_remove("PATHVIZ_STEP_DELAY_MS");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn grid_prints_overlay_and_summary() {
    cli()
        .args([
            "grid",
            "--rows",
            "3",
            "--cols",
            "3",
            "--start",
            "0,0",
            "--finish",
            "0,2",
            "--algorithm",
            "bfs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S*F\n"))
        .stdout(predicate::str::contains("bfs: (0, 0) -> (0, 2)"))
        .stdout(predicate::str::contains("2 hops"));
}

#[test]
fn default_grid_json_reports_reference_scenario() {
    let json = stdout_json(cli().args(["--format", "json", "grid"]));
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path_found"], true);
    assert_eq!(json["hops"], 30);
    assert_eq!(json["path"].as_array().unwrap().len(), 31);
    assert_eq!(json["start"]["row"], 10);
    assert_eq!(json["start"]["col"], 5);
}

#[test]
fn layout_file_with_blocked_finish_reports_no_path() {
    let dir = tempdir().expect("create temp dir");
    let layout = dir.path().join("blocked.txt");
    fs::write(&layout, "S.#.\n..#F\n..#.\n").expect("write layout");

    cli()
        .arg("grid")
        .arg("--layout")
        .arg(&layout)
        .arg("--algorithm")
        .arg("a-star")
        .assert()
        .success()
        .stdout(predicate::str::contains("no path"));
}

#[test]
fn invalid_layout_is_rejected() {
    let dir = tempdir().expect("create temp dir");
    let layout = dir.path().join("bad.txt");
    fs::write(&layout, "S.x\n..F\n").expect("write layout");

    cli()
        .arg("grid")
        .arg("--layout")
        .arg(&layout)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid layout character"));
}

#[test]
fn wall_flags_cannot_cover_an_endpoint() {
    cli()
        .args(["grid", "--wall", "10,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot place wall at (10, 5)"));
}

#[test]
fn wall_flags_force_a_detour() {
    let json = stdout_json(cli().args([
        "--format",
        "json",
        "grid",
        "--rows",
        "3",
        "--cols",
        "3",
        "--start",
        "0,0",
        "--finish",
        "0,2",
        "--wall",
        "0,1",
        "--algorithm",
        "bfs",
    ]));
    assert_eq!(json["hops"], 4);
}

#[test]
fn animate_emits_one_line_per_event() {
    let dir = tempdir().expect("create temp dir");
    let layout = dir.path().join("line.txt");
    fs::write(&layout, "S..F\n").expect("write layout");

    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("grid")
        .arg("--layout")
        .arg(&layout)
        .args(["--algorithm", "bfs", "--animate", "--step-delay-ms", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf-8 stdout");
    assert_eq!(stdout.matches("\"event\":\"visit\"").count(), 4);
    assert_eq!(stdout.matches("\"event\":\"path\"").count(), 4);
}

#[test]
fn animate_text_without_color_prints_events() {
    cli()
        .args([
            "grid",
            "--rows",
            "1",
            "--cols",
            "3",
            "--start",
            "0,0",
            "--finish",
            "0,2",
            "--algorithm",
            "dfs",
            "--animate",
            "--step-delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit (0, 1)"))
        .stdout(predicate::str::contains("path (0, 2)"));
}

#[test]
fn oversized_dimensions_are_rejected() {
    let rows = usize::MAX.to_string();
    cli()
        .args([
            "grid",
            "--rows",
            rows.as_str(),
            "--cols",
            "2",
            "--start",
            "0,0",
            "--finish",
            "0,1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grid dimensions"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    cli()
        .args(["grid", "--algorithm", "floyd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn bad_environment_override_is_reported() {
    cli()
        .env("PATHVIZ_ROWS", "lots")
        .arg("grid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATHVIZ_ROWS"));
}

#[test]
fn environment_overrides_grid_shape() {
    let json = stdout_json(
        cli()
            .env("PATHVIZ_ROWS", "2")
            .env("PATHVIZ_COLS", "2")
            .env("PATHVIZ_START", "0,0")
            .env("PATHVIZ_FINISH", "1,1")
            .args(["--format", "json", "grid"]),
    );
    assert_eq!(json["hops"], 2);
}

#[test]
fn compare_runs_every_algorithm() {
    let json = stdout_json(cli().args(["--format", "json", "compare"]));
    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 6);
    for row in rows.iter().filter(|row| row["optimal"] == true) {
        assert_eq!(row["hops"], 30, "{}", row["algorithm"]);
    }
}

#[test]
fn compare_text_lists_algorithms() {
    cli()
        .args(["compare", "--rows", "5", "--cols", "5", "--start", "0,0", "--finish", "4,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm"))
        .stdout(predicate::str::contains("bidirectional"))
        .stdout(predicate::str::contains("greedy"));
}
