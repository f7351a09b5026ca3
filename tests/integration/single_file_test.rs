//! Integration tests for single-file encode/decode runs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use tempfile::tempdir;

fn extmask() -> Command {
    Command::cargo_bin("extmask").unwrap()
}

#[test]
fn test_encode_renames_single_file() {
    let tmp = tempdir().unwrap();
    let original = tmp.path().join("photo.jpg");
    File::create(&original).unwrap();

    extmask()
        .args(["-e", original.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed:"))
        .stdout(predicate::str::contains("photo.a1b2"));

    assert!(!original.exists());
    assert!(tmp.path().join("photo.a1b2").exists());
}

#[test]
fn test_decode_restores_single_file() {
    let tmp = tempdir().unwrap();
    let masked = tmp.path().join("report.k1l2");
    File::create(&masked).unwrap();

    extmask()
        .args(["-d", masked.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.pdf"));

    assert!(!masked.exists());
    assert!(tmp.path().join("report.pdf").exists());
}

#[test]
fn test_unknown_extension_produces_no_output() {
    let tmp = tempdir().unwrap();
    let original = tmp.path().join("main.rs");
    File::create(&original).unwrap();

    extmask()
        .args(["--encode", original.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed:").not());

    assert!(original.exists());
}

#[test]
fn test_uppercase_extension_is_masked() {
    let tmp = tempdir().unwrap();
    let original = tmp.path().join("scan.JPG");
    File::create(&original).unwrap();

    extmask()
        .args(["-e", original.to_str().unwrap()])
        .assert()
        .success();

    assert!(tmp.path().join("scan.a1b2").exists());
}

#[test]
fn test_missing_path_reports_error_and_exits_zero() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.jpg");

    extmask()
        .args(["-e", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_dry_run_reports_without_renaming() {
    let tmp = tempdir().unwrap();
    let original = tmp.path().join("song.mp3");
    File::create(&original).unwrap();

    extmask()
        .args(["-e", original.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("song.m9n0"));

    assert!(original.exists());
    assert!(!tmp.path().join("song.m9n0").exists());
}

#[test]
fn test_quiet_suppresses_processed_lines() {
    let tmp = tempdir().unwrap();
    let original = tmp.path().join("photo.jpg");
    File::create(&original).unwrap();

    extmask()
        .args(["-e", original.to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(tmp.path().join("photo.a1b2").exists());
}
