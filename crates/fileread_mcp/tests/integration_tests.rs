use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI help output
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mcp-server-fileread").unwrap();
    let assert = cmd.arg("--help").assert();

    assert
        .success()
        .stdout(predicate::str::contains("bounded file reading"));
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mcp-server-fileread").unwrap();
    let assert = cmd.arg("--version").assert();

    assert.success();
}

/// Unknown flags are rejected; the server is configured per-request
#[test]
fn test_cli_rejects_unknown_arguments() {
    let mut cmd = Command::cargo_bin("mcp-server-fileread").unwrap();
    let assert = cmd.arg("--allowed-dir").arg("/tmp").assert();

    assert.failure();
}
