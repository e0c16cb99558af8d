use crate::cli::support::trains_with_towns;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--log-level", "debug", "shortest", "A", "C"])
        .assert()
        .success()
        .stdout("9\n")
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_enables_debug() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--verbose", "report"])
        .assert()
        .success()
        .stderr(predicate::str::contains("report_query"));
}

#[test]
fn test_log_json() {
    let dir = tempdir().unwrap();
    trains_with_towns(dir.path())
        .args(["--log-json", "--log-level", "debug", "inspect"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}
