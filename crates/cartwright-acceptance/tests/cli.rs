use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_cartwright_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("cartwright")
}

#[test]
fn test_help_lists_harness_flags() {
    let mut cmd = Command::new(get_cartwright_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Browser-driven acceptance harness",
        ))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--chrome-path"))
        .stdout(predicate::str::contains("--headed"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--wait-secs"))
        .stdout(predicate::str::contains("--screenshot-dir"));
}

#[test]
fn test_malformed_base_url_is_rejected_before_launching() {
    let mut cmd = Command::new(get_cartwright_bin());
    cmd.arg("--base-url").arg("::not-a-url::");

    cmd.assert().failure().stderr(predicate::str::contains("--base-url"));
}

#[test]
fn test_missing_features_dir_fails_fast() {
    let mut cmd = Command::new(get_cartwright_bin());
    cmd.arg("--features").arg("/nonexistent/features");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("features directory not found"));
}
