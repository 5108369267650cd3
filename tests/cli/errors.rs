//! Tests for error handling and global flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["push", "check", "key", "remote", "completions"] {
        assert!(out.contains(command), "help missing {command}: {out}");
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_push_without_token_fails_with_hint() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["push", "--repo", TEST_REPO, "--yes"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "no GitHub token found");
    assert_stderr_contains(&output, "SEALDROP_TOKEN");
}

#[test]
fn test_push_without_repository_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["push", "--yes"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no target repository configured");
    assert_stderr_contains(&output, "--repo");
}

#[test]
fn test_malformed_repository_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", "not-a-repo"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid repository");
}

#[test]
fn test_insecure_api_url_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", TEST_REPO, "--api-url", "http://api.example.com"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "insecure API URL");
}

#[test]
fn test_unreachable_api_is_fatal() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t
        .push_cmd("http://127.0.0.1:1")
        .args(["--timeout", "5"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "could not fetch repository public key");
    assert_output_excludes(&output, "Results");
}

#[test]
fn test_token_never_printed() {
    let t = Test::with_env(SAMPLE_ENV);

    let output = t
        .push_cmd("http://127.0.0.1:1")
        .args(["--timeout", "5", "--verbose"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_output_excludes(&output, TEST_TOKEN);
}

#[test]
fn test_completions_generate_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sealdrop"));
    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef sealdrop"));
}

#[test]
fn test_completions_reject_unknown_shell() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let t = Test::new();

    t.cmd()
        .args(["--config", "nope.toml", "check"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}
