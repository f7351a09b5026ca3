//! Integration tests for argument validation

use assert_cmd::Command;
use predicates::prelude::*;

fn extmask() -> Command {
    Command::cargo_bin("extmask").unwrap()
}

#[test]
fn test_help_mentions_masking() {
    extmask()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mask file extensions"));
}

#[test]
fn test_encode_and_decode_are_mutually_exclusive() {
    extmask()
        .args(["-e", "-d", "some/path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_one_direction_flag_is_required() {
    extmask().arg("some/path").assert().failure();
}

#[test]
fn test_path_argument_is_required() {
    extmask()
        .arg("-e")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
