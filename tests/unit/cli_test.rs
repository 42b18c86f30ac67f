//! Integration tests for wordrev CLI

use assert_cmd::cargo;
use predicates::prelude::*;

fn wordrev() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("wordrev"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    wordrev()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordrev"));
}

#[test]
fn test_version_subcommand() {
    wordrev()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("wordrev v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_subcommand_json() {
    wordrev()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help() {
    wordrev()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("an interactive session prompts for a case count"));
}

#[test]
fn test_reverse_args() {
    wordrev()
        .args(["reverse", "this is a test", "foobar"])
        .assert()
        .success()
        .stdout("Case 1: test a is this\nCase 2: foobar\n");
}

#[test]
fn test_reverse_stdin() {
    wordrev()
        .arg("reverse")
        .write_stdin("all your base\n")
        .assert()
        .success()
        .stdout("Case 1: base your all\n");
}

#[test]
fn test_inverted_bounds_fail() {
    wordrev()
        .args(["--min-length", "9", "--max-length", "3", "reverse", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum length 9 exceeds maximum length 3"));
}
