use crate::cli::support::{trains, trains_with_towns};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_no_such_route_exit_code() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["distance", "A,E,D"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: NO SUCH ROUTE"));
}

#[test]
fn test_unreachable_shortest() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["shortest", "D", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("NO SUCH ROUTE"));
}

#[test]
fn test_no_such_route_json_error() {
    let dir = tempdir().unwrap();
    let output = trains_with_towns(dir.path())
        .args(["--format", "json", "distance", "A,E,D"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "no_such_route");
    assert_eq!(json["error"]["message"], "NO SUCH ROUTE");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--quiet", "distance", "A,E,D"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_malformed_routes() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--routes", "AB5, BCx", "inspect"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed route token 'BCx'"));
}

#[test]
fn test_trailing_comma_is_malformed() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--routes", "AB5,", "inspect"])
        .assert()
        .code(3);
}

#[test]
fn test_no_routes_is_usage_error() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no routes given"));
}

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--graph", "nope.txt", "inspect"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read routes file"));
}

#[test]
fn test_routes_and_graph_conflict() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--routes", "AB1", "--graph", "x.txt", "inspect"])
        .assert()
        .code(2);
}

#[test]
fn test_bad_distance_path_is_usage_error() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["distance", "A"])
        .assert()
        .code(2);
}

#[test]
fn test_clap_error_as_json() {
    let dir = tempdir().unwrap();
    let output = trains(dir.path())
        .args(["--format", "json", "trips", "A", "C"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--format", "yaml", "inspect"])
        .assert()
        .code(2);
}
