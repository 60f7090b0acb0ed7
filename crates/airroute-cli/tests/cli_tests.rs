//! Integration tests for the `airroute` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/minimal")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("airroute");
    cmd.env("RUST_LOG", "error").env_remove("AIRROUTE_DATA_DIR");
    cmd
}

fn fixture_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(fixture_path());
    cmd
}

#[test]
fn route_prints_joined_path() {
    fixture_command()
        .args(["route", "--from", "YYZ", "--to", "LAX"])
        .assert()
        .success()
        .stdout("YYZ->JFK->LAX\n");
}

#[test]
fn route_with_distance_prints_second_line() {
    fixture_command()
        .args(["route", "--from", "YYZ", "--to", "LAX", "--distance"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^YYZ->JFK->LAX\ndistance: \d+\.\d{4}\n$").unwrap());
}

#[test]
fn route_json_contains_steps() {
    fixture_command()
        .args(["--format", "json", "route", "--from", "YUL", "--to", "YOW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"steps\": [\n    \"YUL\",\n    \"YOW\"\n  ]"));
}

#[test]
fn unreachable_route_fails() {
    fixture_command()
        .args(["route", "--from", "YYZ", "--to", "YHZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid route"));
}

#[test]
fn same_airport_fails() {
    fixture_command()
        .args(["route", "--from", "YYZ", "--to", "YYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Origin and destination are the same",
        ));
}

#[test]
fn unknown_origin_fails() {
    fixture_command()
        .args(["route", "--from", "ZZZ", "--to", "LAX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid origin airport"));
}

#[test]
fn stats_reports_counts() {
    fixture_command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("airlines: 4"))
        .stdout(predicate::str::contains("airports: 8"))
        .stdout(predicate::str::contains("routes: 10"))
        .stdout(predicate::str::contains("duplicate route rows: 1"))
        .stdout(predicate::str::contains("skipped route rows: 1"));
}

#[test]
fn zero_policy_keeps_unknown_airport_rows() {
    fixture_command()
        .args(["--unknown-airports", "zero", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("routes: 11"))
        .stdout(predicate::str::contains("skipped route rows: 0"));
}

#[test]
fn invalid_policy_is_a_usage_error() {
    fixture_command()
        .args(["--unknown-airports", "guess", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 'skip' or 'zero'"));
}

#[test]
fn data_dir_from_environment() {
    cli()
        .env("AIRROUTE_DATA_DIR", fixture_path())
        .args(["route", "--from", "YYZ", "--to", "LAX"])
        .assert()
        .success()
        .stdout("YYZ->JFK->LAX\n");
}

#[test]
fn missing_airports_file_reports_shape_error() {
    let temp = tempdir().expect("create temp dir");
    for name in ["airlines.csv", "routes.csv"] {
        fs::copy(fixture_path().join(name), temp.path().join(name)).expect("copy fixture");
    }

    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"))
        .stderr(predicate::str::contains(
            "Airports data does not exist or invalid",
        ));
}

#[test]
fn missing_data_dir_fails() {
    let temp = tempdir().expect("create temp dir");
    cli()
        .arg("--data-dir")
        .arg(temp.path().join("absent"))
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn help_describes_connecting_route() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search for a connecting route"))
        .stdout(predicate::str::contains("shortest").not());
}
