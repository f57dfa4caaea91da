//! Binary-level checks that do not need a browser.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_snapshot_command() {
    Command::cargo_bin("taskboard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot"));
}

#[test]
fn snapshot_requires_project() {
    Command::cargo_bin("taskboard")
        .unwrap()
        .arg("snapshot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn snapshot_help_lists_projects() {
    Command::cargo_bin("taskboard")
        .unwrap()
        .args(["snapshot", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-application"))
        .stdout(predicate::str::contains("marketing-campaign"));
}
