//! Basic CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("mxlogin")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints() {
    Command::cargo_bin("mxlogin")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mxlogin"));
}

#[test]
fn login_requires_username_and_password() {
    Command::cargo_bin("mxlogin")
        .unwrap()
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("mxlogin")
        .unwrap()
        .arg("logout")
        .assert()
        .failure();
}
