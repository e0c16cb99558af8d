use crate::cli::support::{trains, trains_with_towns};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_report() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(
            "Output #1: 9\n\
             Output #2: 5\n\
             Output #3: 13\n\
             Output #4: 22\n\
             Output #5: NO SUCH ROUTE\n\
             Output #6: 2\n\
             Output #7: 3\n\
             Output #8: 9\n\
             Output #9: 9\n\
             Output #10: 7\n",
        );
}

#[test]
fn test_report_json() {
    let dir = tempdir().unwrap();
    let output = trains_with_towns(dir.path())
        .args(["--format", "json", "report"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["routes"], 9);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["index"], 1);
    assert_eq!(results[0]["value"], 9);
    assert_eq!(results[4]["error"], "NO SUCH ROUTE");
    assert!(results[4].get("value").is_none());
    assert_eq!(results[9]["query"]["kind"], "within");
}

#[test]
fn test_report_records() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--format", "records", "report"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H trains=1 records=1 mode=report routes=9 queries=10\n",
        ))
        .stdout(predicate::str::contains("Q index=5 kind=distance"))
        .stdout(predicate::str::contains("error=\"NO SUCH ROUTE\""));
}

#[test]
fn test_report_on_empty_graph() {
    let dir = tempdir().unwrap();
    trains(dir.path())
        .args(["--routes", "", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output #1: NO SUCH ROUTE"))
        .stdout(predicate::str::contains("Output #6: 0"))
        .stdout(predicate::str::contains("Output #8: NO SUCH ROUTE"));
}
