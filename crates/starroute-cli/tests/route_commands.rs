//! Integration tests for the route and jumps commands.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("starroute-cli").expect("binary exists");
    cmd.env_remove("STARROUTE_MAX_OPTIMIZE_POINTS")
        .env_remove("STARROUTE_JUMP_RANGE")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn route_from_systems_prints_both_routes() {
    cli()
        .args([
            "route",
            "--system",
            "A=0,0,0",
            "--system",
            "C=3,4,0",
            "--system",
            "B=3,0,0",
            "--jump-range",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Distance: 9.00 Ly"))
        .stdout(predicate::str::contains("Optimized Total Distance: 7.00 Ly"))
        .stdout(predicate::str::contains("A → B → C  7.00 Ly"))
        .stdout(predicate::str::contains("Estimated Jumps: 2"));
}

#[test]
fn route_from_fixture_outputs_json() {
    let output = cli()
        .args(["--format", "json", "route", "--import"])
        .arg(fixtures_dir().join("sol_neighbourhood.csv"))
        .output()
        .expect("run route");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["entered"]["legs"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["optimized"]["legs"][0]["from"], "Sol");
    assert!(value["optimized"]["total_jumps"].is_null());
    assert_eq!(value["history"].as_array().map(Vec::len), Some(2));
}

#[test]
fn single_system_warns_and_succeeds() {
    cli()
        .args(["route", "--system", "Sol=0,0,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please add at least two systems"));
}

#[test]
fn malformed_csv_fails() {
    cli()
        .args(["route", "--import"])
        .arg(fixtures_dir().join("missing_z.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required columns: System Name, X, Y, Z"));
}

#[test]
fn oversized_route_fails() {
    cli()
        .args(["--max-optimize-points", "3", "route", "--import"])
        .arg(fixtures_dir().join("sol_neighbourhood.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("exact optimization is limited to 3"));
}

#[test]
fn bad_system_argument_fails() {
    cli()
        .args(["route", "--system", "Sol=0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected three coordinates"));
}

#[test]
fn export_writes_entered_route() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let export = temp_dir.path().join("route_export.csv");

    cli()
        .args(["route", "--system", "Sol=0,0,0", "--system", "Far=1.5,2,3", "--export"])
        .arg(&export)
        .assert()
        .success();

    let text = fs::read_to_string(&export).expect("export written");
    assert_eq!(text, "System Name,X,Y,Z\nSol,0.0,0.0,0.0\nFar,1.5,2.0,3.0\n");
}

#[test]
fn jumps_command_estimates_ceiling() {
    cli()
        .args(["jumps", "--distance", "7", "--jump-range", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Estimated Jumps: 2"));
}

#[test]
fn jumps_command_without_range_is_na() {
    cli()
        .args(["--format", "json", "jumps", "--distance", "7", "--jump-range", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"jumps\": null"));
}

#[test]
fn export_without_systems_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let export = temp_dir.path().join("route_export.csv");

    cli()
        .args(["route", "--export"])
        .arg(&export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no systems to export"));
    assert!(!export.exists());
}

#[test]
fn imports_append_after_earlier_files_and_export_round_trips() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let first = temp_dir.path().join("first.csv");
    let export = temp_dir.path().join("route_export.csv");
    fs::write(&first, "System Name,X,Y,Z\nProcyon,-4.75,1.03125,-10.15625\n").expect("write");

    cli()
        .args(["route", "--import"])
        .arg(&first)
        .arg("--import")
        .arg(fixtures_dir().join("sol_neighbourhood.csv"))
        .arg("--export")
        .arg(&export)
        .assert()
        .success();

    let text = fs::read_to_string(&export).expect("export written");
    let names: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(
        names,
        vec![
            "Procyon",
            "Sol",
            "Wolf 359",
            "Alpha Centauri",
            "Lalande 21185",
            "Barnard's Star"
        ]
    );
}

#[test]
fn missing_import_file_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    cli()
        .args(["route", "--import"])
        .arg(temp_dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read route from"));
}
