// Copyright 2021-2024 Martin Pool

//! Tests for the `factorial` CLI layer.

use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;


lazy_static! {
    static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("factorial");
}

/// Run the binary in an empty directory, so that no stray `.factorial.toml` is read.
fn run_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    cmd.current_dir(dir.path());
    // Strip any options configured in the environment running these tests,
    // so that they don't cause unexpected behavior in the code under test.
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("FACTORIAL_") || k == "CLICOLOR_FORCE")
        .for_each(|k| {
            cmd.env_remove(k);
        });
    cmd
}

fn run() -> (TempDir, assert_cmd::Command) {
    let tmp = TempDir::new().unwrap();
    let cmd = run_in(&tmp);
    (tmp, cmd)
}

#[test]
fn show_version() {
    let (_tmp, mut cmd) = run();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"^factorial \d+\.\d+\.\d+(-.*)?\n$").unwrap());
}

#[test]
fn uses_stdout_for_help() {
    let (_tmp, mut cmd) = run();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--method"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn factorial_of_ten() {
    let (_tmp, mut cmd) = run();
    cmd.arg("10")
        .assert()
        .success()
        .stdout("3628800\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn small_inputs_with_each_method() {
    for method in ["iterative", "recursive", "both"] {
        for (n, expected) in [("0", "1\n"), ("1", "1\n"), ("2", "2\n")] {
            let (_tmp, mut cmd) = run();
            cmd.args(["--method", method, n])
                .assert()
                .success()
                .stdout(expected);
        }
    }
}

#[test]
fn largest_supported_input() {
    let (_tmp, mut cmd) = run();
    cmd.arg("34")
        .assert()
        .success()
        .stdout("295232799039604140847618609643520000000\n");
}

#[test]
fn negative_input_is_rejected() {
    let (_tmp, mut cmd) = run();
    cmd.arg("-3")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Error: invalid input").and(predicate::str::contains(
                "factorial is undefined for negative input -3",
            )),
        );
}

#[test]
fn overflowing_input_is_rejected() {
    let (_tmp, mut cmd) = run();
    cmd.arg("35")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "35! does not fit in 128 bits; the largest supported input is 34",
        ));
}

#[test]
fn missing_input_is_a_usage_error() {
    let (_tmp, mut cmd) = run();
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("<N>"));
}

#[test]
fn unknown_method_is_a_usage_error() {
    let (_tmp, mut cmd) = run();
    cmd.args(["--method", "magic", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'magic'"));
}

#[test]
fn json_answer() {
    let (_tmp, mut cmd) = run();
    let output = cmd.args(["--json", "10"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "n": 10,
            "value": 3628800,
            "methods": ["iterative", "recursive"],
        })
    );
}

#[test]
fn info_level_logs_each_method_to_stderr() {
    let (_tmp, mut cmd) = run();
    cmd.args(["-L", "info", "--method", "recursive", "5"])
        .assert()
        .success()
        .stdout("120\n")
        .stderr(predicate::str::contains("computed").and(predicate::str::contains("recursive")));
}

#[test]
fn completions_for_bash() {
    let (_tmp, mut cmd) = run();
    cmd.args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("factorial"));
}
