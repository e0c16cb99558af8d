use crate::cli::support::{trains, trains_with_towns};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and banner
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trains"))
        .stdout(predicate::str::contains("shortest"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("trains"))
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Single queries
// ============================================================================

#[test]
fn test_distance() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["distance", "A,E,B,C,D"])
        .assert()
        .success()
        .stdout("22\n");
}

#[test]
fn test_distance_with_spaces_in_path() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["distance", "A, B, C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_trips_max_stops() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["trips", "C", "C", "--max-stops", "3"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_trips_exact() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["trips", "A", "C", "--exact", "4"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_trips_stop_range() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["trips", "A", "C", "--min-stops", "1", "--max-stops", "3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_within() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["within", "C", "C", "--max-distance", "30"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_shortest() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stdout("9\n");

    trains_with_towns(dir.path())
        .args(["shortest", "B", "B"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_edge() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["edge", "A", "B"])
        .assert()
        .success()
        .stdout("5\n");

    trains_with_towns(dir.path())
        .args(["edge", "A", "C"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_inspect() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Routes: 9"))
        .stdout(predicate::str::contains("Towns: A, B, C, D, E"))
        .stdout(predicate::str::contains("Length: 48"))
        .stdout(predicate::str::contains("Total distance: 48"))
        .stdout(predicate::str::contains("A -> B (5)"));
}

#[test]
fn test_global_flags_after_subcommand() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["shortest", "A", "C", "--routes", "AB1,BA1,BC1"])
        .assert()
        .success()
        .stdout("2\n");
}

// ============================================================================
// Routes sources
// ============================================================================

#[test]
fn test_graph_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "AB3, BC3,\nAC9\n").unwrap();

    trains(dir.path())
        .args(["--graph", "input.txt", "shortest", "A", "C"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_graph_from_stdin() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--graph", "-", "edge", "A", "B"])
        .write_stdin("AB7\n")
        .assert()
        .success()
        .stdout("7\n");
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    let output = trains_with_towns(dir.path())
        .args(["--format", "json", "shortest", "A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], 9);
    assert_eq!(json["query"]["kind"], "shortest");
    assert_eq!(json["query"]["from"], "A");
}

#[test]
fn test_inspect_json_output() {
    let dir = tempdir().unwrap();
    let output = trains(dir.path())
        .args(["--routes", "AB1,AB2", "--format", "json", "inspect"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["length"], 2);
    assert_eq!(json["total_distance"], 3);
    assert_eq!(json["routes"].as_array().unwrap().len(), 2);
    assert_eq!(json["routes"][1]["distance"], 2);
}

#[test]
fn test_records_output() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--format", "records", "trips", "A", "C", "--exact", "4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trains=1 records=1 mode=trips routes=9\n",
        ))
        .stdout(predicate::str::contains("Q kind=trips"))
        .stdout(predicate::str::contains("value=3"));
}

#[test]
fn test_inspect_records_output() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--routes", "AB5", "--format", "records", "inspect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=inspect routes=1"))
        .stdout(predicate::str::contains("R origin=A destination=B distance=5"));
}
